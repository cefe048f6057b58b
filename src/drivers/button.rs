//! Seat button debouncing without blocking in interrupt context.
//!
//! ## Hardware
//!
//! Active-low momentary switches with pull-ups, one per seat (the
//! driver seat may also have a second, external button wired to another
//! port).  The GPIO edge ISR passes its timestamp to
//! [`Debouncer::accept`]; accepted edges raise the seat's button bit on
//! the signal bus.
//!
//! ## Lock-out
//!
//! | Edge at                       | Result   |
//! |-------------------------------|----------|
//! | first edge ever               | accepted |
//! | < `window_ms` after accepted  | dropped  |
//! | >= `window_ms` after accepted | accepted |
//!
//! Contact bounce lands inside the window and is dropped; the ISR does a
//! timestamp compare and returns, it never spins.

use core::sync::atomic::{AtomicU32, AtomicU64, Ordering};

use crate::seat::Timestamp;

/// No edge accepted yet.
const NEVER: u64 = u64::MAX;

pub struct Debouncer {
    window_ms: u64,
    last_accepted_ms: AtomicU64,
    dropped: AtomicU32,
}

impl Debouncer {
    pub const fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            last_accepted_ms: AtomicU64::new(NEVER),
            dropped: AtomicU32::new(0),
        }
    }

    /// Classify an edge seen at `now_ms`.  Safe to call from several
    /// interrupt sources at once: exactly one of two racing edges wins.
    pub fn accept(&self, now_ms: Timestamp) -> bool {
        let last = self.last_accepted_ms.load(Ordering::Acquire);
        if last != NEVER && now_ms.wrapping_sub(last) < self.window_ms {
            self.dropped.fetch_add(1, Ordering::Relaxed);
            return false;
        }
        let won = self
            .last_accepted_ms
            .compare_exchange(last, now_ms, Ordering::AcqRel, Ordering::Acquire)
            .is_ok();
        if !won {
            self.dropped.fetch_add(1, Ordering::Relaxed);
        }
        won
    }

    /// Edges rejected as bounce.
    pub fn dropped(&self) -> u32 {
        self.dropped.load(Ordering::Relaxed)
    }
}
