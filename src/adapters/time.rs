//! Monotonic tick source.
//!
//! Backed by `embassy-time`'s [`Instant`], the same clock the periodic
//! tasks' tickers run on, so commit timestamps and task periods agree.
//! On the host the `std` time driver supplies it.

use embassy_time::Instant;

use crate::app::ports::TickSource;
use crate::seat::Timestamp;

/// Milliseconds since the clock was created.
pub struct MonotonicClock {
    start: Instant,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Microseconds since start.
    pub fn uptime_us(&self) -> u64 {
        self.start.elapsed().as_micros()
    }
}

impl TickSource for MonotonicClock {
    fn now_ms(&self) -> Timestamp {
        self.start.elapsed().as_millis()
    }
}
