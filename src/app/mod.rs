//! Application core — the shared controller state and its boundaries.
//!
//! [`system::HeaterSystem`] holds every object the tasks coordinate
//! through.  All interaction with hardware happens through the **port
//! traits** in [`ports`], keeping the core testable without peripherals.

pub mod events;
pub mod ports;
pub mod system;
