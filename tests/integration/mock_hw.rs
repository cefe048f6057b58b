//! Mock peripherals for integration tests.
//!
//! Every mock is cheap to clone and shares its state with its clones,
//! so a test can hand one copy to a task and keep another to inspect.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use seatheat::app::ports::{AdcPort, LedColor, LedPort, SerialPort, TickSource};
use seatheat::app::system::HeaterSystem;
use seatheat::config::ControllerConfig;
use seatheat::isr;
use seatheat::seat::{Seat, Timestamp};
use seatheat::sensors::{AdcChannel, Calibration, Celsius};

// ── Clock ─────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockClock {
    now: Arc<AtomicU64>,
}

#[allow(dead_code)]
impl MockClock {
    pub fn set(&self, ms: Timestamp) {
        self.now.store(ms, Ordering::Relaxed);
    }

    pub fn advance(&self, ms: u64) -> Timestamp {
        self.now.fetch_add(ms, Ordering::Relaxed) + ms
    }
}

impl TickSource for MockClock {
    fn now_ms(&self) -> Timestamp {
        self.now.load(Ordering::Relaxed)
    }
}

// ── LEDs ──────────────────────────────────────────────────────

/// Last written state of red, green, blue.
#[derive(Clone, Default)]
pub struct MockLeds {
    state: Arc<Mutex<[bool; 3]>>,
}

#[allow(dead_code)]
impl MockLeds {
    pub fn rgb(&self) -> (bool, bool, bool) {
        let s = self.state.lock().unwrap();
        (s[0], s[1], s[2])
    }
}

impl LedPort for MockLeds {
    fn set_led(&mut self, color: LedColor, on: bool) {
        let idx = match color {
            LedColor::Red => 0,
            LedColor::Green => 1,
            LedColor::Blue => 2,
        };
        self.state.lock().unwrap()[idx] = on;
    }
}

// ── ADC ───────────────────────────────────────────────────────

/// Returns a fixed raw value per channel and completes every conversion
/// immediately through the ISR.
#[derive(Clone)]
pub struct MockAdc {
    sys: Arc<HeaterSystem>,
    raw: Arc<Mutex<[u16; 2]>>,
    starts: Arc<AtomicU64>,
}

#[allow(dead_code)]
impl MockAdc {
    pub fn new(sys: Arc<HeaterSystem>) -> Self {
        Self {
            sys,
            raw: Arc::default(),
            starts: Arc::default(),
        }
    }

    pub fn set_reading(&self, seat: Seat, celsius: Celsius) {
        let raw = self.sys.calibration().to_raw(celsius);
        self.raw.lock().unwrap()[seat.index()] = raw;
    }

    pub fn conversions_started(&self) -> u64 {
        self.starts.load(Ordering::Relaxed)
    }
}

impl AdcPort for MockAdc {
    fn start_conversion(&mut self, channel: AdcChannel) {
        self.starts.fetch_add(1, Ordering::Relaxed);
        isr::adc_conversion_complete(&self.sys, channel.seat(), self.read_last_result(channel));
    }

    fn read_last_result(&self, channel: AdcChannel) -> u16 {
        self.raw.lock().unwrap()[channel.seat().index()]
    }
}

// ── Serial ────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockSerial {
    out: Arc<Mutex<String>>,
}

#[allow(dead_code)]
impl MockSerial {
    pub fn lines(&self) -> Vec<String> {
        self.out.lock().unwrap().lines().map(str::to_owned).collect()
    }
}

impl SerialPort for MockSerial {
    fn send_text(&mut self, text: &str) {
        self.out.lock().unwrap().push_str(text);
    }

    fn send_integer(&mut self, value: i64) {
        self.out.lock().unwrap().push_str(&value.to_string());
    }
}

// ── System builders ───────────────────────────────────────────

#[allow(dead_code)]
pub fn system() -> (HeaterSystem, MockClock) {
    system_with(ControllerConfig::default())
}

pub fn system_with(config: ControllerConfig) -> (HeaterSystem, MockClock) {
    let clock = MockClock::default();
    let sys = HeaterSystem::new(config, Box::new(clock.clone())).unwrap();
    (sys, clock)
}

/// Raw ADC count that calibrates to `celsius` with default settings.
#[allow(dead_code)]
pub fn raw_for(celsius: Celsius) -> u16 {
    Calibration::default().to_raw(celsius)
}
