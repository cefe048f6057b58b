//! Failure recorder: one per seat, woken by that seat's sensor-failure
//! bit.  It keeps the last *good* state (level and commit time), not
//! the failing sample.

use log::warn;

use crate::app::system::HeaterSystem;
use crate::seat::{FailureRecord, Seat};
use crate::sync::BusFlag;

pub async fn run(sys: &HeaterSystem, seat: Seat) {
    let mask = BusFlag::sensor_failure(seat).mask();
    loop {
        sys.bus().wait_for_any(mask).await;
        record(sys, seat);
    }
}

pub fn record(sys: &HeaterSystem, seat: Seat) -> FailureRecord {
    let state = sys.seat(seat);
    let rec = state.recorder().capture();
    warn!(
        "{}: sensor failure #{} (last good: {:?} at {} ms)",
        seat.name(),
        state.failure_count(),
        rec.state_before_failure,
        rec.failure_time_ms
    );
    rec
}
