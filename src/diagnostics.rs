//! Task registry and execution-time accounting.
//!
//! Every task future is wrapped by [`metered`], which adds the wall time
//! of each poll to that task's counter in the [`ExecTimeTracker`].  The
//! CPU-load task only reads the counters; nothing in the control path
//! depends on them.
//!
//! ```text
//!  executor ──poll──▶ metered(TaskId, fut) ──poll──▶ fut
//!                          │
//!                          └─ busy_us[TaskId] += poll time
//! ```

use core::future::{Future, poll_fn};
use core::sync::atomic::{AtomicU64, Ordering};

use embassy_time::Instant;

use crate::seat::Seat;

// ---------------------------------------------------------------------------
// Task registry
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TaskId {
    LevelSelector = 0,
    DriverHeater = 1,
    PassengerHeater = 2,
    ConversionTrigger = 3,
    Telemetry = 4,
    DriverFailureRecorder = 5,
    PassengerFailureRecorder = 6,
    CpuLoad = 7,
}

impl TaskId {
    /// Total number of registered tasks — used to size counter arrays.
    pub const COUNT: usize = 8;

    pub const ALL: [Self; Self::COUNT] = [
        Self::LevelSelector,
        Self::DriverHeater,
        Self::PassengerHeater,
        Self::ConversionTrigger,
        Self::Telemetry,
        Self::DriverFailureRecorder,
        Self::PassengerFailureRecorder,
        Self::CpuLoad,
    ];

    pub const fn heater(seat: Seat) -> Self {
        match seat {
            Seat::Driver => Self::DriverHeater,
            Seat::Passenger => Self::PassengerHeater,
        }
    }

    pub const fn failure_recorder(seat: Seat) -> Self {
        match seat {
            Seat::Driver => Self::DriverFailureRecorder,
            Seat::Passenger => Self::PassengerFailureRecorder,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::LevelSelector => "level-selector",
            Self::DriverHeater => "heater-driver",
            Self::PassengerHeater => "heater-passenger",
            Self::ConversionTrigger => "adc-trigger",
            Self::Telemetry => "telemetry",
            Self::DriverFailureRecorder => "failure-driver",
            Self::PassengerFailureRecorder => "failure-passenger",
            Self::CpuLoad => "cpu-load",
        }
    }
}

// ---------------------------------------------------------------------------
// Execution-time counters
// ---------------------------------------------------------------------------

/// Per-task accumulated busy time in microseconds.
pub struct ExecTimeTracker {
    busy_us: [AtomicU64; TaskId::COUNT],
}

/// Copy of every counter at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExecSnapshot {
    pub busy_us: [u64; TaskId::COUNT],
}

impl ExecTimeTracker {
    pub fn new() -> Self {
        Self {
            busy_us: core::array::from_fn(|_| AtomicU64::new(0)),
        }
    }

    pub fn add(&self, task: TaskId, us: u64) {
        self.busy_us[task as usize].fetch_add(us, Ordering::Relaxed);
    }

    pub fn busy_us(&self, task: TaskId) -> u64 {
        self.busy_us[task as usize].load(Ordering::Relaxed)
    }

    pub fn snapshot(&self) -> ExecSnapshot {
        ExecSnapshot {
            busy_us: core::array::from_fn(|i| self.busy_us[i].load(Ordering::Relaxed)),
        }
    }
}

impl Default for ExecTimeTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Busy share of a window, in percent (0–100).
///
/// Sums every task's counter delta between `prev` and `now` and divides
/// by the window length.  Counters that went backwards count as zero.
pub fn cpu_load_percent(prev: &ExecSnapshot, now: &ExecSnapshot, window_us: u64) -> u8 {
    if window_us == 0 {
        return 0;
    }
    let busy: u64 = now
        .busy_us
        .iter()
        .zip(prev.busy_us.iter())
        .map(|(n, p)| n.saturating_sub(*p))
        .sum();
    (busy.saturating_mul(100) / window_us).min(100) as u8
}

/// Wrap `fut` so every poll is charged to `task`.
pub fn metered<'a, F>(
    task: TaskId,
    tracker: &'a ExecTimeTracker,
    fut: F,
) -> impl Future<Output = F::Output> + 'a
where
    F: Future + 'a,
{
    let mut fut = Box::pin(fut);
    poll_fn(move |cx| {
        let started = Instant::now();
        let out = fut.as_mut().poll(cx);
        tracker.add(task, started.elapsed().as_micros());
        out
    })
}
