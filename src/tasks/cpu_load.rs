//! CPU load monitor.
//!
//! Once per window, diff the execution-time counters against the last
//! window and divide by the elapsed time.  Purely informational: the
//! result is logged and shown in telemetry, nothing acts on it.

use embassy_time::{Duration, Instant, Ticker};
use log::info;

use crate::app::system::HeaterSystem;
use crate::diagnostics::cpu_load_percent;

pub async fn run(sys: &HeaterSystem) {
    let mut ticker = Ticker::every(Duration::from_millis(sys.config().cpu_load_window_ms));
    let mut prev = sys.exec().snapshot();
    let mut prev_at = Instant::now();
    loop {
        ticker.next().await;
        let now = sys.exec().snapshot();
        let at = Instant::now();
        let load = cpu_load_percent(&prev, &now, (at - prev_at).as_micros());
        sys.set_cpu_load(load);
        info!("CPU load: {}%", load);
        prev = now;
        prev_at = at;
    }
}
