//! Simulated seat sensors.
//!
//! Each seat is a first-order thermal plant in tenths of a degree: the
//! heater's current intensity adds heat every conversion, and with the
//! heater disabled the seat cools back toward cabin temperature.
//! `start_conversion` completes immediately and calls the conversion
//! ISR, as the sequencer interrupt would on hardware.
//!
//! A [`FaultInjector`] forces a seat's sensor to read full scale (45 °C),
//! which the heater task treats as a sensor failure.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::app::ports::AdcPort;
use crate::app::system::HeaterSystem;
use crate::heater::Intensity;
use crate::isr;
use crate::seat::Seat;
use crate::sensors::{AdcChannel, Celsius};

/// Cabin temperature in tenths of a degree.
pub const AMBIENT_DECI_C: i32 = 150;

/// Heat added per conversion, tenths of a degree.
const fn heat_gain(intensity: Intensity) -> i32 {
    match intensity {
        Intensity::High => 8,
        Intensity::Medium => 5,
        Intensity::Low => 3,
        Intensity::Disabled => 0,
    }
}

const COOLING_DECI_C: i32 = 2;

/// Shared per-seat "sensor broken" switches.
#[derive(Clone, Default)]
pub struct FaultInjector {
    broken: Arc<[AtomicBool; 2]>,
}

impl FaultInjector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the switch and return the new state.
    pub fn toggle(&self, seat: Seat) -> bool {
        !self.broken[seat.index()].fetch_xor(true, Ordering::Relaxed)
    }

    pub fn is_broken(&self, seat: Seat) -> bool {
        self.broken[seat.index()].load(Ordering::Relaxed)
    }
}

pub struct SimAdc {
    sys: Arc<HeaterSystem>,
    faults: FaultInjector,
    temp_deci_c: [i32; 2],
    last_raw: [u16; 2],
}

impl SimAdc {
    pub fn new(sys: Arc<HeaterSystem>, faults: FaultInjector) -> Self {
        Self {
            sys,
            faults,
            temp_deci_c: [AMBIENT_DECI_C; 2],
            last_raw: [0; 2],
        }
    }

    /// Plant temperature for `seat`, tenths of a degree.
    pub fn temperature_deci_c(&self, seat: Seat) -> i32 {
        self.temp_deci_c[seat.index()]
    }

    fn step(&mut self, seat: Seat) -> u16 {
        let i = seat.index();
        let gain = heat_gain(self.sys.seat(seat).intensity());
        let t = &mut self.temp_deci_c[i];
        if gain > 0 {
            *t += gain;
        } else if *t > AMBIENT_DECI_C {
            *t = (*t - COOLING_DECI_C).max(AMBIENT_DECI_C);
        }

        let cal = self.sys.calibration();
        if self.faults.is_broken(seat) {
            return cal.to_raw(Celsius::from(self.sys.config().calibration_span_c));
        }
        cal.to_raw(*t / 10)
    }
}

impl AdcPort for SimAdc {
    fn start_conversion(&mut self, channel: AdcChannel) {
        let seat = channel.seat();
        self.last_raw[seat.index()] = self.step(seat);
        isr::adc_conversion_complete(&self.sys, seat, self.read_last_result(channel));
    }

    fn read_last_result(&self, channel: AdcChannel) -> u16 {
        self.last_raw[channel.seat().index()]
    }
}
