//! Async behaviour of the heater self-suspend / resume cycle and the
//! bus-driven tasks, stepped with `poll_once`.

use core::pin::pin;

use futures_lite::future::{block_on, poll_once};

use seatheat::heater::HeatLevel;
use seatheat::isr;
use seatheat::seat::Seat;
use seatheat::sync::{BUTTON_MASK, BusFlag};
use seatheat::tasks::heater::Heater;
use seatheat::tasks::{failure_recorder, level_selector};

use crate::mock_hw::{MockLeds, raw_for, system};

#[test]
fn heater_parks_while_off_and_resumes_on_first_press() {
    let (sys, _clock) = system();
    let mut task = pin!(Heater::new(&sys, Seat::Driver, MockLeds::default()).run());

    // Nothing to consume yet.
    assert!(block_on(poll_once(task.as_mut())).is_none());

    isr::adc_conversion_complete(&sys, Seat::Driver, raw_for(20));
    assert!(block_on(poll_once(task.as_mut())).is_none());
    assert!(sys.latch(Seat::Driver).is_suspended());

    // Samples arriving while parked are not acted on.
    isr::adc_conversion_complete(&sys, Seat::Driver, raw_for(21));
    assert!(block_on(poll_once(task.as_mut())).is_none());
    assert!(sys.gate(Seat::Driver).is_pending());

    sys.seat(Seat::Driver).selector().advance();
    sys.latch(Seat::Driver).resume();
    assert!(block_on(poll_once(task.as_mut())).is_none());
    assert!(!sys.latch(Seat::Driver).is_suspended());

    // The pending sample was consumed right after the resume.
    let seat = sys.seat(Seat::Driver);
    assert_eq!(seat.current(), HeatLevel::Low);
    assert_eq!(seat.last_reading(), 21);
}

#[test]
fn stale_resume_does_not_wake_an_off_seat() {
    let (sys, _clock) = system();
    let mut task = pin!(Heater::new(&sys, Seat::Passenger, MockLeds::default()).run());
    let selector = sys.seat(Seat::Passenger).selector();

    // Resume issued while the heater is running, never consumed.
    selector.advance();
    sys.latch(Seat::Passenger).resume();
    isr::adc_conversion_complete(&sys, Seat::Passenger, raw_for(20));
    assert!(block_on(poll_once(task.as_mut())).is_none());
    assert_eq!(sys.seat(Seat::Passenger).current(), HeatLevel::Low);

    for _ in 0..3 {
        selector.advance();
    }
    isr::adc_conversion_complete(&sys, Seat::Passenger, raw_for(20));
    assert!(block_on(poll_once(task.as_mut())).is_none());
    assert!(sys.latch(Seat::Passenger).is_suspended());

    isr::adc_conversion_complete(&sys, Seat::Passenger, raw_for(22));
    assert!(block_on(poll_once(task.as_mut())).is_none());
    assert_eq!(sys.seat(Seat::Passenger).last_reading(), 20);
}

#[test]
fn level_selector_consumes_only_button_bits() {
    let (sys, _clock) = system();
    let mut task = pin!(level_selector::run(&sys));
    assert!(block_on(poll_once(task.as_mut())).is_none());

    sys.bus().set(BusFlag::DriverSensorFailure);
    isr::button_edge(&sys, Seat::Passenger, 0);
    assert!(block_on(poll_once(task.as_mut())).is_none());

    assert_eq!(sys.seat(Seat::Passenger).desired(), HeatLevel::Low);
    assert_eq!(sys.seat(Seat::Driver).desired(), HeatLevel::Off);
    assert_eq!(sys.bus().bits(), BusFlag::DriverSensorFailure.mask());
    assert_eq!(sys.bus().bits() & BUTTON_MASK, 0);
}

#[test]
fn failure_recorders_only_wake_for_their_seat() {
    let (sys, _clock) = system();
    let mut driver = pin!(failure_recorder::run(&sys, Seat::Driver));
    let mut passenger = pin!(failure_recorder::run(&sys, Seat::Passenger));
    assert!(block_on(poll_once(driver.as_mut())).is_none());
    assert!(block_on(poll_once(passenger.as_mut())).is_none());

    sys.seat(Seat::Driver).heater().commit(HeatLevel::Medium, 777);
    sys.bus().set(BusFlag::DriverSensorFailure);

    assert!(block_on(poll_once(passenger.as_mut())).is_none());
    assert_eq!(sys.bus().bits(), BusFlag::DriverSensorFailure.mask());
    assert!(block_on(poll_once(driver.as_mut())).is_none());

    assert_eq!(sys.bus().bits(), 0);
    let rec = sys.seat(Seat::Driver).failure_record().expect("recorded");
    assert_eq!(rec.state_before_failure, HeatLevel::Medium);
    assert_eq!(rec.failure_time_ms, 777);
    assert_eq!(sys.seat(Seat::Passenger).failure_record(), None);
}
