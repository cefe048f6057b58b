//! Controller configuration parameters
//!
//! All tunable parameters for the seat heater controller.
//! Values can be overridden from a JSON file through a [`ConfigPort`]
//! adapter; anything missing from the file keeps its default.
//!
//! [`ConfigPort`]: crate::app::ports::ConfigPort

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Core controller configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    // --- Timing ---
    /// Period between ADC conversion requests (milliseconds)
    pub conversion_period_ms: u64,
    /// CPU load aggregation window (milliseconds)
    pub cpu_load_window_ms: u64,
    /// Telemetry snapshot interval (milliseconds)
    pub telemetry_period_ms: u64,

    // --- Sensor plausibility ---
    /// Lowest plausible seat temperature (Celsius, inclusive)
    pub min_valid_temp_c: i32,
    /// Highest plausible seat temperature (Celsius, inclusive)
    pub max_valid_temp_c: i32,

    // --- Intensity bands (degrees still needed, lower bounds) ---
    pub high_band_c: i32,
    pub medium_band_c: i32,
    pub low_band_c: i32,

    // --- Calibration ---
    /// Largest raw value the converter produces (12-bit ADC)
    pub adc_full_scale: u16,
    /// Temperature span mapped onto `0..=adc_full_scale` (Celsius)
    pub calibration_span_c: u16,

    // --- Input ---
    /// Lock-out window after an accepted button edge (milliseconds)
    pub button_debounce_ms: u64,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            // Timing
            conversion_period_ms: 500,
            cpu_load_window_ms: 2100,
            telemetry_period_ms: 1000,

            // Sensor plausibility
            min_valid_temp_c: 5,
            max_valid_temp_c: 40,

            // Intensity bands
            high_band_c: 10,
            medium_band_c: 5,
            low_band_c: 2,

            // Calibration
            adc_full_scale: 4095,
            calibration_span_c: 45,

            // Input
            button_debounce_ms: 300,
        }
    }
}

impl ControllerConfig {
    /// Reject configurations the controller cannot run with.
    ///
    /// Values are rejected, never clamped.
    pub fn validate(&self) -> Result<()> {
        if self.conversion_period_ms == 0 {
            return Err(Error::Config("conversion_period_ms must be > 0"));
        }
        if self.cpu_load_window_ms == 0 {
            return Err(Error::Config("cpu_load_window_ms must be > 0"));
        }
        if self.telemetry_period_ms == 0 {
            return Err(Error::Config("telemetry_period_ms must be > 0"));
        }
        if self.min_valid_temp_c > self.max_valid_temp_c {
            return Err(Error::Config("min_valid_temp_c above max_valid_temp_c"));
        }
        if !(self.high_band_c > self.medium_band_c && self.medium_band_c > self.low_band_c) {
            return Err(Error::Config("intensity bands must be strictly descending"));
        }
        if self.adc_full_scale == 0 {
            return Err(Error::Config("adc_full_scale must be > 0"));
        }
        Ok(())
    }
}
