//! Single-slot sample gate: interrupt context → one heater task.
//!
//! The reading and its ready flag live in one [`Signal`], so the
//! interrupt side can never expose a half-written value.  Publishing
//! while a reading is still pending overwrites it: the consumer only
//! ever sees the most recent conversion, never a backlog.
//!
//! ```text
//!  ADC ISR ── publish(r1) ─┐
//!  ADC ISR ── publish(r2) ─┼─▶ [ r2 ] ──▶ consume_latest() == r2   (one wake)
//! ```

use core::sync::atomic::{AtomicU32, Ordering};

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use crate::sensors::Celsius;

pub struct SampleGate {
    slot: Signal<CriticalSectionRawMutex, Celsius>,
    /// Readings replaced before the consumer took them.
    overwritten: AtomicU32,
}

impl SampleGate {
    pub const fn new() -> Self {
        Self {
            slot: Signal::new(),
            overwritten: AtomicU32::new(0),
        }
    }

    /// Store `reading` and mark the slot ready.  ISR-safe.
    pub fn publish(&self, reading: Celsius) {
        if self.slot.signaled() {
            self.overwritten.fetch_add(1, Ordering::Relaxed);
        }
        self.slot.signal(reading);
    }

    /// Wait for the slot to become ready, then clear it and return the
    /// reading it held.  Only the owning task may call this.
    pub async fn consume_latest(&self) -> Celsius {
        self.slot.wait().await
    }

    /// Non-blocking take.
    pub fn try_consume(&self) -> Option<Celsius> {
        self.slot.try_take()
    }

    pub fn is_pending(&self) -> bool {
        self.slot.signaled()
    }

    /// Number of readings dropped because a newer one replaced them.
    pub fn overwritten(&self) -> u32 {
        self.overwritten.load(Ordering::Relaxed)
    }
}

impl Default for SampleGate {
    fn default() -> Self {
        Self::new()
    }
}
