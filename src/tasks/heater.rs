//! Heater task: one per seat.
//!
//! ```text
//!   gate.consume_latest() ──▶ Heater::process(reading)
//!                                │
//!          ┌─────────────────────┼──────────────────────┐
//!          ▼                     ▼                      ▼
//!   desired == Off        failure == false        failure == true
//!   suspend until         commit desired          raise failure bit,
//!   resumed               as current              keep current
//! ```
//!
//! The desired level is read once per cycle; the diff, the decision and
//! the commit all use that one snapshot.

use log::{debug, info, trace};

use crate::app::ports::LedPort;
use crate::app::system::HeaterSystem;
use crate::drivers::seat_leds::LedPattern;
use crate::heater::{Decision, HeatLevel, decide, degrees_needed};
use crate::seat::Seat;
use crate::sensors::Celsius;
use crate::sync::BusFlag;

/// What one sample did to the seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Desired level is Off; the task parks until resumed.
    Suspend,
    /// Reading was valid; desired level committed as current.
    Committed(Decision),
    /// Reading was implausible; failure bit raised, nothing committed.
    Failed(Decision),
}

pub struct Heater<'a, L> {
    sys: &'a HeaterSystem,
    seat: Seat,
    leds: L,
}

impl<'a, L: LedPort> Heater<'a, L> {
    pub fn new(sys: &'a HeaterSystem, seat: Seat, leds: L) -> Self {
        Self { sys, seat, leds }
    }

    pub fn seat(&self) -> Seat {
        self.seat
    }

    /// Run one control cycle on `reading`.
    pub fn process(&mut self, reading: Celsius) -> Outcome {
        let state = self.sys.seat(self.seat);
        let handle = state.heater();

        let desired = handle.desired();
        let diff = degrees_needed(desired, reading);
        let decision = decide(desired, reading, diff, self.sys.limits());

        handle.record_reading(reading);
        handle.apply(decision);
        LedPattern::for_decision(&decision).apply(&mut self.leds);
        trace!(
            "{}: reading={} desired={:?} diff={} -> {:?}",
            self.seat.name(),
            reading,
            desired,
            diff,
            decision
        );

        if desired == HeatLevel::Off {
            return Outcome::Suspend;
        }
        if decision.failure {
            debug!("{}: reading {} out of range", self.seat.name(), reading);
            self.sys.bus().set(BusFlag::sensor_failure(self.seat));
            return Outcome::Failed(decision);
        }
        handle.commit(desired, self.sys.now_ms());
        Outcome::Committed(decision)
    }

    pub async fn run(mut self) {
        let sys = self.sys;
        let seat = self.seat;
        loop {
            let reading = sys.gate(seat).consume_latest().await;
            if self.process(reading) != Outcome::Suspend {
                continue;
            }
            info!("{}: heater off, suspending", seat.name());
            let state = sys.seat(seat);
            sys.latch(seat)
                .suspend_while(|| state.desired() == HeatLevel::Off)
                .await;
            info!("{}: heater resumed", seat.name());
        }
    }
}
