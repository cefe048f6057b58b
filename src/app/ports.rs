//! Port traits — the boundary between the controller core and the
//! peripherals it drives.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ tasks (domain)
//! ```
//!
//! Driven adapters (ADC, LEDs, serial console, tick timer, config
//! storage) implement these traits.  The tasks consume them through
//! generics, so the control logic never touches registers directly.

use crate::config::ControllerConfig;
use crate::error::Result;
use crate::seat::Timestamp;
use crate::sensors::AdcChannel;

// ───────────────────────────────────────────────────────────────
// ADC port
// ───────────────────────────────────────────────────────────────

/// Analog-to-digital converter with one sample sequencer per channel.
pub trait AdcPort {
    /// Kick off a conversion.  Completion is signalled by interrupt.
    fn start_conversion(&mut self, channel: AdcChannel);

    /// Raw result of the most recent completed conversion.
    fn read_last_result(&self, channel: AdcChannel) -> u16;
}

// ───────────────────────────────────────────────────────────────
// LED port
// ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LedColor {
    Red,
    Green,
    Blue,
}

/// Discrete on/off indicator LEDs.
pub trait LedPort {
    fn set_led(&mut self, color: LedColor, on: bool);
}

// ───────────────────────────────────────────────────────────────
// Tick source
// ───────────────────────────────────────────────────────────────

/// Free-running monotonic timer.
pub trait TickSource {
    /// Milliseconds since start; never decreases.
    fn now_ms(&self) -> Timestamp;
}

// ───────────────────────────────────────────────────────────────
// Serial port
// ───────────────────────────────────────────────────────────────

/// Byte-oriented console output.
pub trait SerialPort {
    fn send_text(&mut self, text: &str);

    fn send_integer(&mut self, value: i64);
}

// ───────────────────────────────────────────────────────────────
// Configuration port
// ───────────────────────────────────────────────────────────────

/// Loads controller configuration.
///
/// Implementations MUST validate before returning; invalid values are
/// rejected with [`Error::Config`](crate::error::Error::Config), not
/// clamped.
pub trait ConfigPort {
    fn load(&self) -> Result<ControllerConfig>;
}
