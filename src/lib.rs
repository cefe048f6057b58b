//! Dual-seat heater controller.
//!
//! Exposes the control core (decision rule, seat state, synchronization
//! primitives, tasks) and the host adapters for integration testing and
//! the simulator binary.
//!
//! ```text
//!  GPIO edge ─▶ isr::button_edge ─▶ SignalBus ─▶ level_selector ─▶ desired level
//!                                                       │ resume
//!  ADC done ──▶ isr::adc_conversion_complete ─▶ SampleGate ─▶ heater ─▶ LEDs, commit
//!                                                                 │ failure bit
//!                                            SignalBus ◀──────────┘
//!                                                │
//!                                                └─▶ failure_recorder
//! ```

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod diagnostics;
pub mod drivers;
pub mod error;
pub mod heater;
pub mod isr;
pub mod seat;
pub mod sensors;
pub mod sync;
pub mod tasks;
