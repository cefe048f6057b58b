//! Unified error types for the seat heater firmware.
//!
//! A single `Error` enum that every fallible subsystem converts into,
//! keeping startup error handling uniform.  The control path itself has
//! no error returns: an out-of-range sensor is data (see
//! [`Decision`](crate::heater::Decision)), not an `Err`.
//! All variants are `Copy` so they can be passed around without allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A raw sensor sample could not be calibrated.
    Sensor(SensorError),
    /// Configuration is invalid or could not be loaded.
    Config(&'static str),
    /// Task or peripheral start-up failed.
    Init(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sensor(e) => write!(f, "sensor: {e}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::Init(msg) => write!(f, "init: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Sensor errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// Raw sample is larger than the converter's full scale.
    RawOutOfRange(u16),
    /// Calibration constants would divide by zero.
    ZeroFullScale,
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RawOutOfRange(raw) => write!(f, "raw sample {raw} above full scale"),
            Self::ZeroFullScale => write!(f, "ADC full scale is zero"),
        }
    }
}

impl From<SensorError> for Error {
    fn from(e: SensorError) -> Self {
        Self::Sensor(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
