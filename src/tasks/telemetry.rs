//! Telemetry: one JSON line per period on the serial port.

use embassy_time::{Duration, Ticker};
use log::warn;

use crate::app::ports::SerialPort;
use crate::app::system::HeaterSystem;

pub async fn run(sys: &HeaterSystem, mut serial: impl SerialPort) {
    let mut ticker = Ticker::every(Duration::from_millis(sys.config().telemetry_period_ms));
    loop {
        ticker.next().await;
        publish(sys, &mut serial);
    }
}

pub fn publish(sys: &HeaterSystem, serial: &mut impl SerialPort) {
    match sys.telemetry().to_json_line() {
        Ok(line) => serial.send_text(&line),
        Err(e) => warn!("telemetry encode failed: {}", e),
    }
}
