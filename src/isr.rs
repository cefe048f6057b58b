//! Interrupt entry points.
//!
//! Both handlers run to completion without blocking: they only touch
//! atomics, the seat's [`SampleGate`](crate::sync::SampleGate) and the
//! [`SignalBus`](crate::sync::SignalBus).  On the host any thread may
//! call them; on a target they are the bodies of the ADC sequencer and
//! GPIO edge vectors.
//!
//! ```text
//!  ADC done ──▶ adc_conversion_complete ──▶ calibrate ──▶ gate[seat].publish
//!  GPIO edge ─▶ button_edge ──▶ debounce ──▶ bus.set(button[seat])
//! ```

use crate::app::system::HeaterSystem;
use crate::seat::{Seat, Timestamp};
use crate::sync::BusFlag;

/// Conversion-complete handler for `seat`'s channel.
///
/// A raw value above full scale is clamped rather than rejected; the
/// clamped reading is outside the valid band anyway and the heater task
/// flags it as a sensor failure.
pub fn adc_conversion_complete(sys: &HeaterSystem, seat: Seat, raw: u16) {
    let reading = sys.calibration().to_celsius_saturating(raw);
    sys.gate(seat).publish(reading);
}

/// Button edge handler for `seat`.  Returns whether the edge was
/// accepted (outside the debounce window).
pub fn button_edge(sys: &HeaterSystem, seat: Seat, now_ms: Timestamp) -> bool {
    if !sys.debouncer(seat).accept(now_ms) {
        return false;
    }
    sys.bus().set(BusFlag::button(seat));
    true
}
