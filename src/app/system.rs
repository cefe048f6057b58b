//! The shared controller state — everything the tasks and interrupt
//! handlers coordinate through.
//!
//! ```text
//!  ┌──────────────────────────── HeaterSystem ────────────────────────────┐
//!  │  seats[2]     SeatState     (per-seat levels, intensity, failure)     │
//!  │  gates[2]     SampleGate    (ADC ISR → heater task)                   │
//!  │  latches[2]   TaskLatch     (heater self-suspend / selector resume)   │
//!  │  debounce[2]  Debouncer     (button ISR lock-out)                     │
//!  │  bus          SignalBus     (buttons + sensor failures)               │
//!  │  exec         ExecTimeTracker, cpu_load                               │
//!  │  clock        TickSource                                              │
//!  └───────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing in here blocks; all waiting happens in the tasks.

use core::sync::atomic::{AtomicU8, Ordering};

use crate::config::ControllerConfig;
use crate::diagnostics::ExecTimeTracker;
use crate::drivers::button::Debouncer;
use crate::error::Result;
use crate::heater::DecisionLimits;
use crate::seat::{Seat, SeatState, Timestamp};
use crate::sensors::Calibration;
use crate::sync::{SampleGate, SignalBus, TaskLatch};

use super::events::TelemetrySnapshot;
use super::ports::TickSource;

pub struct HeaterSystem {
    config: ControllerConfig,
    limits: DecisionLimits,
    calibration: Calibration,
    seats: [SeatState; 2],
    gates: [SampleGate; 2],
    latches: [TaskLatch; 2],
    debouncers: [Debouncer; 2],
    bus: SignalBus,
    exec: ExecTimeTracker,
    cpu_load: AtomicU8,
    clock: Box<dyn TickSource + Send + Sync>,
}

impl HeaterSystem {
    /// Validate `config` and build a system with both seats Off.
    pub fn new(config: ControllerConfig, clock: Box<dyn TickSource + Send + Sync>) -> Result<Self> {
        config.validate()?;
        let calibration = Calibration::from_config(&config)?;
        let debounce_ms = config.button_debounce_ms;
        Ok(Self {
            limits: DecisionLimits::from(&config),
            calibration,
            seats: [SeatState::new(Seat::Driver), SeatState::new(Seat::Passenger)],
            gates: [SampleGate::new(), SampleGate::new()],
            latches: [TaskLatch::new(), TaskLatch::new()],
            debouncers: [Debouncer::new(debounce_ms), Debouncer::new(debounce_ms)],
            bus: SignalBus::new(),
            exec: ExecTimeTracker::new(),
            cpu_load: AtomicU8::new(0),
            clock,
            config,
        })
    }

    // ── Accessors ─────────────────────────────────────────────

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn limits(&self) -> &DecisionLimits {
        &self.limits
    }

    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    pub fn seat(&self, seat: Seat) -> &SeatState {
        &self.seats[seat.index()]
    }

    pub fn gate(&self, seat: Seat) -> &SampleGate {
        &self.gates[seat.index()]
    }

    pub fn latch(&self, seat: Seat) -> &TaskLatch {
        &self.latches[seat.index()]
    }

    pub fn debouncer(&self, seat: Seat) -> &Debouncer {
        &self.debouncers[seat.index()]
    }

    pub fn bus(&self) -> &SignalBus {
        &self.bus
    }

    pub fn exec(&self) -> &ExecTimeTracker {
        &self.exec
    }

    pub fn now_ms(&self) -> Timestamp {
        self.clock.now_ms()
    }

    // ── Monitoring ────────────────────────────────────────────

    pub fn cpu_load(&self) -> u8 {
        self.cpu_load.load(Ordering::Relaxed)
    }

    pub fn set_cpu_load(&self, percent: u8) {
        self.cpu_load.store(percent, Ordering::Relaxed);
    }

    pub fn telemetry(&self) -> TelemetrySnapshot {
        TelemetrySnapshot {
            uptime_ms: self.now_ms(),
            cpu_load_percent: self.cpu_load(),
            seats: Seat::ALL.map(|s| self.seat(s).snapshot()),
        }
    }
}
