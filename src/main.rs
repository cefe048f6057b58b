//! Seat heater simulator — host entry point.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     Adapters (outer ring)                    │
//! │  SimAdc (AdcPort)   LedBank<SimPin> (LedPort)                │
//! │  ConsoleSerial (SerialPort)   MonotonicClock (TickSource)    │
//! │  JsonFileConfig (ConfigPort)  console_log (tracing)          │
//! │                                                              │
//! │  ──────────────── Port Trait Boundary ───────────────────    │
//! │                                                              │
//! │  control thread: selector · heater ×2 · recorder ×2 · ADC ⏱  │
//! │  monitor thread: cpu load · telemetry                        │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Stdin stands in for the buttons: `d` / `p` press the driver or
//! passenger button, `fd` / `fp` toggle a broken sensor, `q` quits.
//! Telemetry goes to stdout as JSON lines, logs to stderr.

use std::io::BufRead;
use std::sync::Arc;

use anyhow::{Context, Result};
use log::{info, warn};

use seatheat::adapters::config_file::JsonFileConfig;
use seatheat::adapters::console_log;
use seatheat::adapters::serial::ConsoleSerial;
use seatheat::adapters::sim_adc::{FaultInjector, SimAdc};
use seatheat::adapters::sim_led;
use seatheat::adapters::time::MonotonicClock;
use seatheat::app::ports::ConfigPort;
use seatheat::app::system::HeaterSystem;
use seatheat::isr;
use seatheat::seat::Seat;
use seatheat::tasks;

fn main() -> Result<()> {
    // ── 1. Logging ────────────────────────────────────────────
    console_log::init_from_env()
        .map_err(|e| anyhow::anyhow!("installing console logger: {e}"))?;
    info!("seatheat v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Configuration ──────────────────────────────────────
    let config = JsonFileConfig::from_env()
        .load()
        .context("loading configuration")?;

    // ── 3. Shared state ───────────────────────────────────────
    let sys = Arc::new(
        HeaterSystem::new(config, Box::new(MonotonicClock::new()))
            .context("building heater system")?,
    );

    // ── 4. Adapters + tasks ───────────────────────────────────
    let faults = FaultInjector::new();
    let adc = SimAdc::new(Arc::clone(&sys), faults.clone());
    let leds = Seat::ALL.map(sim_led::led_bank);
    let _threads = tasks::spawn_all(&sys, adc, leds, ConsoleSerial::stdout())
        .context("starting task threads")?;

    // ── 5. Button console ─────────────────────────────────────
    info!("ready: d/p = press button, fd/fp = toggle sensor fault, q = quit");
    for line in std::io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        match line.trim() {
            "d" => press(&sys, Seat::Driver),
            "p" => press(&sys, Seat::Passenger),
            "fd" => toggle_fault(&faults, Seat::Driver),
            "fp" => toggle_fault(&faults, Seat::Passenger),
            "q" => break,
            "" => {}
            other => warn!("unknown command '{}'", other),
        }
    }

    info!("shutting down");
    Ok(())
}

fn press(sys: &HeaterSystem, seat: Seat) {
    if !isr::button_edge(sys, seat, sys.now_ms()) {
        info!("{}: press ignored (debounce)", seat.name());
    }
}

fn toggle_fault(faults: &FaultInjector, seat: Seat) {
    let broken = faults.toggle(seat);
    warn!("{}: sensor {}", seat.name(), if broken { "broken" } else { "restored" });
}
