//! Shared signal bus — a bitmask with independent waiters.
//!
//! Interrupt handlers and tasks OR bits in with [`SignalBus::set_bits`].
//! A waiter names the bits it cares about; when any of them is set it
//! wakes, clears **only** the requested bits that were set, and gets
//! them back.  Bits outside its mask are left for other waiters.
//!
//! ```text
//!            bit 0   bit 1    bit 2     bit 3
//!          ┌───────┬───────┬─────────┬─────────┐
//!  bus     │ drvBtn│ pasBtn│ drvFail │ pasFail │
//!          └───┬───┴───┬───┴────┬────┴────┬────┘
//!              └───┬───┘        │         │
//!        Level Selector   Driver Rec.  Passenger Rec.
//! ```

use core::cell::RefCell;
use core::future::poll_fn;
use core::task::{Context, Poll};

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::waitqueue::MultiWakerRegistration;
use embassy_time::{Duration, Timer};

use crate::seat::Seat;

/// Upper bound on simultaneously parked waiters.  Registering beyond it
/// wakes everybody so they re-register; correctness is unaffected.
const MAX_WAITERS: usize = 8;

/// Named bus flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum BusFlag {
    DriverButton = 0b0000_0001,
    PassengerButton = 0b0000_0010,
    DriverSensorFailure = 0b0000_0100,
    PassengerSensorFailure = 0b0000_1000,
}

impl BusFlag {
    /// Return the bitmask for this flag.
    pub const fn mask(self) -> u8 {
        self as u8
    }

    pub const fn button(seat: Seat) -> Self {
        match seat {
            Seat::Driver => Self::DriverButton,
            Seat::Passenger => Self::PassengerButton,
        }
    }

    pub const fn sensor_failure(seat: Seat) -> Self {
        match seat {
            Seat::Driver => Self::DriverSensorFailure,
            Seat::Passenger => Self::PassengerSensorFailure,
        }
    }
}

/// Both button bits.
pub const BUTTON_MASK: u8 = BusFlag::DriverButton.mask() | BusFlag::PassengerButton.mask();

struct BusState {
    bits: u8,
    waiters: MultiWakerRegistration<MAX_WAITERS>,
}

pub struct SignalBus {
    state: Mutex<CriticalSectionRawMutex, RefCell<BusState>>,
}

impl SignalBus {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(RefCell::new(BusState {
                bits: 0,
                waiters: MultiWakerRegistration::new(),
            })),
        }
    }

    /// OR `mask` into the bus and wake every parked waiter.  ISR-safe.
    pub fn set_bits(&self, mask: u8) {
        self.state.lock(|s| {
            let mut s = s.borrow_mut();
            s.bits |= mask;
            s.waiters.wake();
        });
    }

    pub fn set(&self, flag: BusFlag) {
        self.set_bits(flag.mask());
    }

    /// Current bits, without consuming anything.
    pub fn bits(&self) -> u8 {
        self.state.lock(|s| s.borrow().bits)
    }

    /// Clear and return whichever bits of `mask` are set, without waiting.
    pub fn try_take(&self, mask: u8) -> Option<u8> {
        match self.poll_take(mask, None) {
            Poll::Ready(hit) => Some(hit),
            Poll::Pending => None,
        }
    }

    /// Wait until at least one bit in `mask` is set.  Clears exactly the
    /// requested bits that were set and returns them.
    pub async fn wait_for_any(&self, mask: u8) -> u8 {
        poll_fn(|cx| self.poll_take(mask, Some(cx))).await
    }

    /// [`wait_for_any`](Self::wait_for_any) bounded by `timeout`.
    /// Returns `None` on expiry; no bits are consumed in that case.
    pub async fn wait_for_any_timeout(&self, mask: u8, timeout: Duration) -> Option<u8> {
        futures_lite::future::or(async { Some(self.wait_for_any(mask).await) }, async {
            Timer::after(timeout).await;
            None
        })
        .await
    }

    fn poll_take(&self, mask: u8, cx: Option<&mut Context<'_>>) -> Poll<u8> {
        if mask == 0 {
            return Poll::Ready(0);
        }
        self.state.lock(|s| {
            let mut s = s.borrow_mut();
            let hit = s.bits & mask;
            if hit != 0 {
                s.bits &= !hit;
                return Poll::Ready(hit);
            }
            if let Some(cx) = cx {
                s.waiters.register(cx.waker());
            }
            Poll::Pending
        })
    }
}

impl Default for SignalBus {
    fn default() -> Self {
        Self::new()
    }
}
