//! Per-seat heater model: heat levels, intensities and the decision rule.
//!
//! ```text
//!   button ──▶ HeatLevel::next()          (Off → Low → Medium → High → Off)
//!
//!   reading ─┐
//!   desired ─┼──▶ decide() ──▶ Decision { intensity, failure }
//!   diff    ─┘
//! ```
//!
//! Everything here is pure; the tasks in [`crate::tasks`] own the state
//! and the synchronization around it.

pub mod decision;

pub use decision::{Decision, DecisionLimits, decide, degrees_needed};

use serde::Serialize;

// ---------------------------------------------------------------------------
// Heat level
// ---------------------------------------------------------------------------

/// User-selected heat level.  Cycles on every button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum HeatLevel {
    Off = 0,
    Low = 1,
    Medium = 2,
    High = 3,
}

impl HeatLevel {
    /// All levels in cycle order.
    pub const ALL: [Self; 4] = [Self::Off, Self::Low, Self::Medium, Self::High];

    /// Target seat temperature for this level (Celsius).
    pub const fn set_point_c(self) -> i32 {
        match self {
            Self::Off => 0,
            Self::Low => 25,
            Self::Medium => 30,
            Self::High => 35,
        }
    }

    /// The level one button press away.
    pub const fn next(self) -> Self {
        match self {
            Self::Off => Self::Low,
            Self::Low => Self::Medium,
            Self::Medium => Self::High,
            Self::High => Self::Off,
        }
    }

    /// Decode the `repr(u8)` discriminant.  Unknown values map to `Off`.
    pub fn from_u8(raw: u8) -> Self {
        match raw {
            1 => Self::Low,
            2 => Self::Medium,
            3 => Self::High,
            0 => Self::Off,
            _ => {
                debug_assert!(false, "invalid heat level: {raw}");
                Self::Off
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Intensity
// ---------------------------------------------------------------------------

/// Heater drive strength.  Derived from each fresh reading, never set
/// directly by user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum Intensity {
    Low = 0,
    Medium = 1,
    High = 2,
    Disabled = 3,
}

impl Intensity {
    /// Decode the `repr(u8)` discriminant.  Unknown values map to `Disabled`.
    pub fn from_u8(raw: u8) -> Self {
        match raw {
            0 => Self::Low,
            1 => Self::Medium,
            2 => Self::High,
            _ => Self::Disabled,
        }
    }
}
