//! Peripheral helpers: button debouncing, seat LEDs, worker threads.

pub mod button;
pub mod seat_leds;
pub mod task_pin;
