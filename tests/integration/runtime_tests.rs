//! Full runtime on real threads: both executors running, peripherals
//! mocked, buttons pressed through the ISR from the test thread.

use std::sync::Arc;
use std::time::{Duration, Instant};

use seatheat::config::ControllerConfig;
use seatheat::diagnostics::TaskId;
use seatheat::heater::{HeatLevel, Intensity};
use seatheat::isr;
use seatheat::seat::Seat;
use seatheat::tasks;

use crate::mock_hw::{MockAdc, MockLeds, MockSerial, system_with};

fn fast_config() -> ControllerConfig {
    ControllerConfig {
        conversion_period_ms: 20,
        cpu_load_window_ms: 100,
        telemetry_period_ms: 50,
        ..ControllerConfig::default()
    }
}

/// Poll `cond` every few milliseconds for up to two seconds.
fn eventually(mut cond: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + Duration::from_secs(2);
    while Instant::now() < deadline {
        if cond() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    cond()
}

#[test]
fn pressed_seat_heats_and_reports_over_serial() {
    let (sys, clock) = system_with(fast_config());
    let sys = Arc::new(sys);
    let adc = MockAdc::new(Arc::clone(&sys));
    adc.set_reading(Seat::Driver, 20);
    adc.set_reading(Seat::Passenger, 20);
    let leds = [MockLeds::default(), MockLeds::default()];
    let driver_leds = leds[0].clone();
    let serial = MockSerial::default();

    let _threads = tasks::spawn_all(&sys, adc.clone(), leds, serial.clone()).unwrap();

    clock.set(1000);
    assert!(isr::button_edge(&sys, Seat::Driver, 1000));

    assert!(eventually(|| sys.seat(Seat::Driver).current() == HeatLevel::Low));
    assert_eq!(sys.seat(Seat::Driver).intensity(), Intensity::Medium);
    assert_eq!(driver_leds.rgb(), (false, false, true));
    assert_eq!(sys.seat(Seat::Passenger).current(), HeatLevel::Off);
    assert!(adc.conversions_started() >= 2);

    assert!(eventually(|| {
        serial.lines().iter().any(|l| {
            let v: serde_json::Value = serde_json::from_str(l).unwrap();
            v["seats"][0]["current"] == "Low"
        })
    }));
}

#[test]
fn broken_sensor_is_recorded_by_the_running_recorder() {
    let (sys, clock) = system_with(fast_config());
    let sys = Arc::new(sys);
    let adc = MockAdc::new(Arc::clone(&sys));
    adc.set_reading(Seat::Passenger, 20);
    let _threads = tasks::spawn_all(
        &sys,
        adc.clone(),
        [MockLeds::default(), MockLeds::default()],
        MockSerial::default(),
    )
    .unwrap();

    clock.set(500);
    assert!(isr::button_edge(&sys, Seat::Passenger, 500));
    assert!(eventually(|| sys.seat(Seat::Passenger).current() == HeatLevel::Low));

    adc.set_reading(Seat::Passenger, 44);
    clock.set(9000);
    assert!(eventually(|| sys.seat(Seat::Passenger).failure_count() > 0));

    let seat = sys.seat(Seat::Passenger);
    let rec = seat.failure_record().unwrap();
    assert_eq!(rec.state_before_failure, HeatLevel::Low);
    assert_eq!(rec.failure_time_ms, seat.last_commit().at_ms);
    assert!(seat.failure());
}

#[test]
fn execution_time_is_charged_to_running_tasks() {
    let (sys, _clock) = system_with(fast_config());
    let sys = Arc::new(sys);
    let adc = MockAdc::new(Arc::clone(&sys));
    let _threads = tasks::spawn_all(
        &sys,
        adc,
        [MockLeds::default(), MockLeds::default()],
        MockSerial::default(),
    )
    .unwrap();

    assert!(eventually(|| {
        TaskId::ALL.iter().map(|t| sys.exec().busy_us(*t)).sum::<u64>() > 0
    }));
    assert!(sys.cpu_load() <= 100);
}
