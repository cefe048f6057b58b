//! Seat heater indicator LEDs.
//!
//! Three discrete LEDs per seat (red, green, blue) show the outcome of
//! the last heater decision:
//!
//! | Outcome                     | Red | Green | Blue |
//! |-----------------------------|-----|-------|------|
//! | sensor failure              | on  | off   | off  |
//! | disabled (off / at target)  | off | off   | off  |
//! | Low intensity               | off | on    | off  |
//! | Medium intensity            | off | off   | on   |
//! | High intensity              | off | on    | on   |
//!
//! [`LedBank`] drives any `embedded-hal` output pins; on the host the
//! simulator backs them with in-memory pins.

use embedded_hal::digital::OutputPin;
use log::warn;

use crate::app::ports::{LedColor, LedPort};
use crate::heater::{Decision, Intensity};

/// On/off state for the three LEDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LedPattern {
    pub red: bool,
    pub green: bool,
    pub blue: bool,
}

impl LedPattern {
    pub const OFF: Self = Self {
        red: false,
        green: false,
        blue: false,
    };

    pub const fn for_decision(decision: &Decision) -> Self {
        if decision.failure {
            return Self {
                red: true,
                green: false,
                blue: false,
            };
        }
        match decision.intensity {
            Intensity::Disabled => Self::OFF,
            Intensity::Low => Self {
                red: false,
                green: true,
                blue: false,
            },
            Intensity::Medium => Self {
                red: false,
                green: false,
                blue: true,
            },
            Intensity::High => Self {
                red: false,
                green: true,
                blue: true,
            },
        }
    }

    /// Push the pattern to `port`, one LED at a time.
    pub fn apply(self, port: &mut impl LedPort) {
        port.set_led(LedColor::Red, self.red);
        port.set_led(LedColor::Green, self.green);
        port.set_led(LedColor::Blue, self.blue);
    }
}

/// One seat's LEDs on three GPIO output pins.
pub struct LedBank<R, G, B> {
    red: R,
    green: G,
    blue: B,
}

impl<R: OutputPin, G: OutputPin, B: OutputPin> LedBank<R, G, B> {
    pub fn new(red: R, green: G, blue: B) -> Self {
        Self { red, green, blue }
    }

    pub fn release(self) -> (R, G, B) {
        (self.red, self.green, self.blue)
    }
}

fn drive(pin: &mut impl OutputPin, on: bool) -> bool {
    let res = if on { pin.set_high() } else { pin.set_low() };
    res.is_ok()
}

impl<R: OutputPin, G: OutputPin, B: OutputPin> LedPort for LedBank<R, G, B> {
    fn set_led(&mut self, color: LedColor, on: bool) {
        let ok = match color {
            LedColor::Red => drive(&mut self.red, on),
            LedColor::Green => drive(&mut self.green, on),
            LedColor::Blue => drive(&mut self.blue, on),
        };
        if !ok {
            warn!("LED {:?} write failed", color);
        }
    }
}
