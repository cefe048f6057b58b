//! Synchronization objects between interrupt context and tasks.
//!
//! | Object        | Producer(s)              | Consumer            |
//! |---------------|--------------------------|---------------------|
//! | [`SampleGate`] | ADC ISR                  | one heater task     |
//! | [`SignalBus`]  | button ISR, heater tasks | selector, recorders |
//! | [`TaskLatch`]  | level selector (resume)  | one heater task     |
//!
//! All three are safe to signal from any thread while the consumer is
//! waiting; none of them queue more than one pending event per bit/slot.

pub mod bus;
pub mod gate;
pub mod latch;

pub use bus::{BUTTON_MASK, BusFlag, SignalBus};
pub use gate::SampleGate;
pub use latch::TaskLatch;
