//! In-memory GPIO output pins for the simulated LED banks.
//!
//! Each pin logs its transitions at `debug!`, which is enough to watch
//! the seat LEDs follow the heater decisions.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin, StatefulOutputPin};
use log::debug;

use crate::drivers::seat_leds::LedBank;
use crate::seat::Seat;

pub struct SimPin {
    label: &'static str,
    seat: Seat,
    high: bool,
}

impl SimPin {
    pub fn new(seat: Seat, label: &'static str) -> Self {
        Self {
            label,
            seat,
            high: false,
        }
    }

    fn drive(&mut self, high: bool) {
        if self.high != high {
            debug!("{} LED {}: {}", self.seat.name(), self.label, if high { "on" } else { "off" });
        }
        self.high = high;
    }
}

impl ErrorType for SimPin {
    type Error = Infallible;
}

impl OutputPin for SimPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.drive(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.drive(true);
        Ok(())
    }
}

impl StatefulOutputPin for SimPin {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.high)
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.high)
    }
}

pub type SimLedBank = LedBank<SimPin, SimPin, SimPin>;

/// Red, green and blue pins for `seat`.
pub fn led_bank(seat: Seat) -> SimLedBank {
    LedBank::new(
        SimPin::new(seat, "red"),
        SimPin::new(seat, "green"),
        SimPin::new(seat, "blue"),
    )
}
