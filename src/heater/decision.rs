//! Intensity decision rule.
//!
//! | Condition (checked in order)              | Intensity  | Failure |
//! |-------------------------------------------|------------|---------|
//! | desired level is `Off`                    | `Disabled` | no      |
//! | reading outside `[min_valid, max_valid]`  | `Disabled` | yes     |
//! | reading >= desired set-point              | `Disabled` | no      |
//! | diff >= high band                         | `High`     | no      |
//! | medium band <= diff < high band           | `Medium`   | no      |
//! | low band <= diff < medium band            | `Low`      | no      |
//! | diff < low band                           | `Disabled` | no      |

use super::{HeatLevel, Intensity};
use crate::config::ControllerConfig;

/// Outcome of one decision cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub intensity: Intensity,
    /// Reading was implausible; heating is disabled until a good sample.
    pub failure: bool,
}

impl Decision {
    const fn disabled(failure: bool) -> Self {
        Self {
            intensity: Intensity::Disabled,
            failure,
        }
    }

    const fn heating(intensity: Intensity) -> Self {
        Self {
            intensity,
            failure: false,
        }
    }
}

/// Thresholds the decision rule needs, copied out of [`ControllerConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecisionLimits {
    pub min_valid_c: i32,
    pub max_valid_c: i32,
    pub high_band_c: i32,
    pub medium_band_c: i32,
    pub low_band_c: i32,
}

impl Default for DecisionLimits {
    fn default() -> Self {
        Self::from(&ControllerConfig::default())
    }
}

impl From<&ControllerConfig> for DecisionLimits {
    fn from(config: &ControllerConfig) -> Self {
        Self {
            min_valid_c: config.min_valid_temp_c,
            max_valid_c: config.max_valid_temp_c,
            high_band_c: config.high_band_c,
            medium_band_c: config.medium_band_c,
            low_band_c: config.low_band_c,
        }
    }
}

/// Degrees still needed to reach `target`'s set-point from `reading_c`.
/// Negative when the seat is already warmer than the set-point.
pub const fn degrees_needed(target: HeatLevel, reading_c: i32) -> i32 {
    target.set_point_c() - reading_c
}

/// Pick the heater intensity for one fresh reading.
pub fn decide(desired: HeatLevel, reading_c: i32, diff_c: i32, limits: &DecisionLimits) -> Decision {
    if desired == HeatLevel::Off {
        return Decision::disabled(false);
    }

    if reading_c < limits.min_valid_c || reading_c > limits.max_valid_c {
        return Decision::disabled(true);
    }

    if reading_c >= desired.set_point_c() {
        return Decision::disabled(false);
    }

    if diff_c >= limits.high_band_c {
        Decision::heating(Intensity::High)
    } else if diff_c >= limits.medium_band_c {
        Decision::heating(Intensity::Medium)
    } else if diff_c >= limits.low_band_c {
        Decision::heating(Intensity::Low)
    } else {
        Decision::disabled(false)
    }
}
