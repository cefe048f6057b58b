//! Per-seat shared state and the handles that gate access to it.
//!
//! Each [`SeatState`] belongs to its seat's heater task.  Other tasks get
//! a narrow handle exposing only the fields they may touch:
//!
//! | Handle               | Holder            | May write                     |
//! |----------------------|-------------------|-------------------------------|
//! | [`SelectorHandle`]   | level selector    | desired level                 |
//! | [`HeaterHandle`]     | heater task       | current level, intensity, ... |
//! | [`RecorderHandle`]   | failure recorder  | failure record                |
//!
//! The current level and the time of the last good sample are packed in
//! one `AtomicU64` so the failure recorder always captures a matching
//! pair.  Intensity and the failure flag share one `AtomicU8` for the
//! same reason: a reader never sees a failure with heating still on.  `desired` has exactly one writer; Release/Acquire gives the
//! heater the latest value before it acts.

use core::sync::atomic::{AtomicI32, AtomicU8, AtomicU32, AtomicU64, Ordering};

use serde::Serialize;

use crate::heater::{Decision, HeatLevel, Intensity};
use crate::sensors::Celsius;

/// Milliseconds on the monotonic tick source.
pub type Timestamp = u64;

/// Marks an empty failure-record slot.  Never produced by [`pack`]:
/// that would need a level byte of `0xFF`.
const NO_RECORD: u64 = u64::MAX;

/// Failure flag in the packed decision byte; the low bits hold the
/// intensity discriminant.
const FAILURE_BIT: u8 = 0x80;

// ---------------------------------------------------------------------------
// Seat identity
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Seat {
    Driver,
    Passenger,
}

impl Seat {
    pub const ALL: [Self; 2] = [Self::Driver, Self::Passenger];

    /// Index into per-seat arrays.
    pub const fn index(self) -> usize {
        match self {
            Self::Driver => 0,
            Self::Passenger => 1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Driver => "driver",
            Self::Passenger => "passenger",
        }
    }
}

// ---------------------------------------------------------------------------
// Plain value types
// ---------------------------------------------------------------------------

/// Last successfully committed level and when it was committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Commit {
    pub level: HeatLevel,
    pub at_ms: Timestamp,
}

/// Snapshot taken when a sensor failure is signalled: the last good
/// state, not the failing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FailureRecord {
    pub state_before_failure: HeatLevel,
    pub failure_time_ms: Timestamp,
}

/// Read-only view of one seat for telemetry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeatSnapshot {
    pub seat: Seat,
    pub reading_c: Celsius,
    pub desired: HeatLevel,
    pub current: HeatLevel,
    pub intensity: Intensity,
    pub failure: bool,
    pub last_good_sample_ms: Timestamp,
    pub failure_record: Option<FailureRecord>,
    pub failure_count: u32,
}

const fn pack(level: HeatLevel, at_ms: Timestamp) -> u64 {
    (at_ms << 8) | level as u64
}

fn unpack(raw: u64) -> (HeatLevel, Timestamp) {
    (HeatLevel::from_u8((raw & 0xFF) as u8), raw >> 8)
}

const fn pack_decision(decision: Decision) -> u8 {
    let flag = if decision.failure { FAILURE_BIT } else { 0 };
    decision.intensity as u8 | flag
}

fn unpack_decision(raw: u8) -> Decision {
    Decision {
        intensity: Intensity::from_u8(raw & !FAILURE_BIT),
        failure: raw & FAILURE_BIT != 0,
    }
}

// ---------------------------------------------------------------------------
// SeatState
// ---------------------------------------------------------------------------

pub struct SeatState {
    seat: Seat,
    desired: AtomicU8,
    committed: AtomicU64,
    decision: AtomicU8,
    last_reading: AtomicI32,
    failure_record: AtomicU64,
    failure_count: AtomicU32,
}

impl SeatState {
    /// Fresh seat: Off, Disabled, no failure, nothing recorded.
    pub const fn new(seat: Seat) -> Self {
        Self {
            seat,
            desired: AtomicU8::new(HeatLevel::Off as u8),
            committed: AtomicU64::new(pack(HeatLevel::Off, 0)),
            decision: AtomicU8::new(Intensity::Disabled as u8),
            last_reading: AtomicI32::new(0),
            failure_record: AtomicU64::new(NO_RECORD),
            failure_count: AtomicU32::new(0),
        }
    }

    pub fn seat(&self) -> Seat {
        self.seat
    }

    pub fn selector(&self) -> SelectorHandle<'_> {
        SelectorHandle { state: self }
    }

    pub fn heater(&self) -> HeaterHandle<'_> {
        HeaterHandle { state: self }
    }

    pub fn recorder(&self) -> RecorderHandle<'_> {
        RecorderHandle { state: self }
    }

    pub fn desired(&self) -> HeatLevel {
        HeatLevel::from_u8(self.desired.load(Ordering::Acquire))
    }

    pub fn last_commit(&self) -> Commit {
        let (level, at_ms) = unpack(self.committed.load(Ordering::Acquire));
        Commit { level, at_ms }
    }

    pub fn current(&self) -> HeatLevel {
        self.last_commit().level
    }

    /// Intensity and failure flag from the same decision.
    pub fn decision(&self) -> Decision {
        unpack_decision(self.decision.load(Ordering::Acquire))
    }

    pub fn intensity(&self) -> Intensity {
        self.decision().intensity
    }

    pub fn failure(&self) -> bool {
        self.decision().failure
    }

    pub fn last_reading(&self) -> Celsius {
        self.last_reading.load(Ordering::Relaxed)
    }

    pub fn failure_record(&self) -> Option<FailureRecord> {
        let raw = self.failure_record.load(Ordering::Acquire);
        if raw == NO_RECORD {
            return None;
        }
        let (state_before_failure, failure_time_ms) = unpack(raw);
        Some(FailureRecord {
            state_before_failure,
            failure_time_ms,
        })
    }

    pub fn failure_count(&self) -> u32 {
        self.failure_count.load(Ordering::Relaxed)
    }

    pub fn snapshot(&self) -> SeatSnapshot {
        let commit = self.last_commit();
        let decision = self.decision();
        SeatSnapshot {
            seat: self.seat,
            reading_c: self.last_reading(),
            desired: self.desired(),
            current: commit.level,
            intensity: decision.intensity,
            failure: decision.failure,
            last_good_sample_ms: commit.at_ms,
            failure_record: self.failure_record(),
            failure_count: self.failure_count(),
        }
    }
}

// ---------------------------------------------------------------------------
// Handles
// ---------------------------------------------------------------------------

/// Level selector access: the desired level and nothing else.
pub struct SelectorHandle<'a> {
    state: &'a SeatState,
}

impl SelectorHandle<'_> {
    /// Advance the desired level one step and return the new value.
    pub fn advance(&self) -> HeatLevel {
        let next = self.state.desired().next();
        self.state.desired.store(next as u8, Ordering::Release);
        next
    }

    pub fn desired(&self) -> HeatLevel {
        self.state.desired()
    }
}

/// Heater task access.
pub struct HeaterHandle<'a> {
    state: &'a SeatState,
}

impl HeaterHandle<'_> {
    pub fn desired(&self) -> HeatLevel {
        self.state.desired()
    }

    pub fn record_reading(&self, reading: Celsius) {
        self.state.last_reading.store(reading, Ordering::Relaxed);
    }

    pub fn apply(&self, decision: Decision) {
        self.state
            .decision
            .store(pack_decision(decision), Ordering::Release);
    }

    /// Commit `level` as current, stamped `at_ms`.
    pub fn commit(&self, level: HeatLevel, at_ms: Timestamp) {
        self.state.committed.store(pack(level, at_ms), Ordering::Release);
    }
}

/// Failure recorder access.
pub struct RecorderHandle<'a> {
    state: &'a SeatState,
}

impl RecorderHandle<'_> {
    pub fn last_commit(&self) -> Commit {
        self.state.last_commit()
    }

    /// Capture the last good commit as this seat's failure record.
    pub fn capture(&self) -> FailureRecord {
        let commit = self.last_commit();
        self.state
            .failure_record
            .store(pack(commit.level, commit.at_ms), Ordering::Release);
        self.state.failure_count.fetch_add(1, Ordering::Relaxed);
        FailureRecord {
            state_before_failure: commit.level,
            failure_time_ms: commit.at_ms,
        }
    }
}
