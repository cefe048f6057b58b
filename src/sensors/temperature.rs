//! Linear seat-sensor calibration.
//!
//! The sensor front-end maps `0..=full_scale` raw counts linearly onto
//! `0..=span` degrees Celsius (12-bit converter, 45 °C span by default).
//! Integer arithmetic truncates toward zero, matching the whole-degree
//! resolution the decision rule works in.

use super::Celsius;
use crate::config::ControllerConfig;
use crate::error::{Result, SensorError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calibration {
    full_scale: u16,
    span_c: u16,
}

impl Calibration {
    pub fn new(full_scale: u16, span_c: u16) -> Result<Self> {
        if full_scale == 0 {
            return Err(SensorError::ZeroFullScale.into());
        }
        Ok(Self { full_scale, span_c })
    }

    pub fn from_config(config: &ControllerConfig) -> Result<Self> {
        Self::new(config.adc_full_scale, config.calibration_span_c)
    }

    /// Convert a raw sample, rejecting values above full scale.
    pub fn to_celsius(&self, raw: u16) -> Result<Celsius> {
        if raw > self.full_scale {
            return Err(SensorError::RawOutOfRange(raw).into());
        }
        Ok(self.scale(raw))
    }

    /// Interrupt-path conversion: never fails, clamps to full scale.
    pub fn to_celsius_saturating(&self, raw: u16) -> Celsius {
        self.scale(raw.min(self.full_scale))
    }

    /// Raw count that calibrates to `celsius` (lowest such count).
    /// Used by the simulator to synthesise samples.
    pub fn to_raw(&self, celsius: Celsius) -> u16 {
        if self.span_c == 0 {
            return 0;
        }
        let c = celsius.clamp(0, Celsius::from(self.span_c)) as u32;
        let raw = (c * u32::from(self.full_scale)).div_ceil(u32::from(self.span_c));
        raw.min(u32::from(self.full_scale)) as u16
    }

    fn scale(&self, raw: u16) -> Celsius {
        (u32::from(raw) * u32::from(self.span_c) / u32::from(self.full_scale)) as Celsius
    }
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            full_scale: 4095,
            span_c: 45,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn end_points_map_to_span() {
        let cal = Calibration::default();
        assert_eq!(cal.to_celsius(0), Ok(0));
        assert_eq!(cal.to_celsius(4095), Ok(45));
    }

    #[test]
    fn truncates_toward_zero() {
        let cal = Calibration::default();
        // 2000 * 45 / 4095 = 21.97…
        assert_eq!(cal.to_celsius(2000), Ok(21));
    }

    #[test]
    fn above_full_scale_is_an_error() {
        let cal = Calibration::default();
        assert_eq!(
            cal.to_celsius(4096),
            Err(Error::Sensor(SensorError::RawOutOfRange(4096)))
        );
        assert_eq!(cal.to_celsius_saturating(u16::MAX), 45);
    }

    #[test]
    fn zero_full_scale_rejected() {
        assert!(Calibration::new(0, 45).is_err());
    }

    #[test]
    fn to_raw_inverts_calibration() {
        let cal = Calibration::default();
        for c in 0..=45 {
            assert_eq!(cal.to_celsius(cal.to_raw(c)), Ok(c), "celsius {c}");
        }
    }
}
