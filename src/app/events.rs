//! Outbound telemetry.
//!
//! The telemetry task serialises a [`TelemetrySnapshot`] to one JSON line
//! and hands it to the [`SerialPort`](super::ports::SerialPort).  Whatever
//! sits on the other side of the wire does the pretty-printing.

use serde::Serialize;

use crate::seat::{SeatSnapshot, Timestamp};

/// A point-in-time view of the whole controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TelemetrySnapshot {
    pub uptime_ms: Timestamp,
    pub cpu_load_percent: u8,
    /// Indexed by [`Seat::index`](crate::seat::Seat::index).
    pub seats: [SeatSnapshot; 2],
}

impl TelemetrySnapshot {
    /// Encode as a single newline-terminated JSON record.
    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        let mut line = serde_json::to_string(self)?;
        line.push('\n');
        Ok(line)
    }
}
