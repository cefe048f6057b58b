//! Seat temperature sensing.
//!
//! Each seat has one thermistor channel on the ADC.  Conversions are
//! started by the conversion-trigger task and completed in interrupt
//! context, where [`temperature::Calibration`] turns the raw sample into
//! a [`Celsius`] reading for the seat's sample gate.

pub mod temperature;

pub use temperature::Calibration;

use crate::seat::Seat;

/// Whole degrees Celsius.
pub type Celsius = i32;

/// ADC input channel wired to a seat's sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum AdcChannel {
    Ch0 = 0,
    Ch1 = 1,
}

impl AdcChannel {
    pub const fn for_seat(seat: Seat) -> Self {
        match seat {
            Seat::Driver => Self::Ch0,
            Seat::Passenger => Self::Ch1,
        }
    }

    pub const fn seat(self) -> Seat {
        match self {
            Self::Ch0 => Seat::Driver,
            Self::Ch1 => Seat::Passenger,
        }
    }
}
