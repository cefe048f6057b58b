//! End-to-end control flow through the interrupt entry points, the level
//! selector, the heater and the failure recorder, one step at a time.

use seatheat::app::system::HeaterSystem;
use seatheat::heater::{HeatLevel, Intensity};
use seatheat::isr;
use seatheat::seat::Seat;
use seatheat::sync::{BUTTON_MASK, BusFlag};
use seatheat::tasks::heater::{Heater, Outcome};
use seatheat::tasks::{failure_recorder, level_selector};

use crate::mock_hw::{MockClock, MockLeds, raw_for, system};

/// Button ISR followed by one level-selector wake.
fn press(sys: &HeaterSystem, clock: &MockClock, seat: Seat) {
    assert!(isr::button_edge(sys, seat, clock.advance(400)));
    let bits = sys.bus().try_take(BUTTON_MASK).expect("button bit set");
    level_selector::on_buttons(sys, bits);
}

/// ADC ISR followed by one heater wake.
fn sample(sys: &HeaterSystem, heater: &mut Heater<'_, MockLeds>, celsius: i32) -> Outcome {
    isr::adc_conversion_complete(sys, heater.seat(), raw_for(celsius));
    let reading = sys.gate(heater.seat()).try_consume().expect("sample pending");
    assert_eq!(reading, celsius);
    heater.process(reading)
}

#[test]
fn press_then_cool_seat_heats_medium_and_commits_low() {
    let (sys, clock) = system();
    let leds = MockLeds::default();
    let mut heater = Heater::new(&sys, Seat::Driver, leds.clone());

    press(&sys, &clock, Seat::Driver);
    assert_eq!(sys.seat(Seat::Driver).desired(), HeatLevel::Low);
    assert_eq!(sys.latch(Seat::Driver).resume_count(), 1);

    clock.set(1000);
    let outcome = sample(&sys, &mut heater, 20);

    let Outcome::Committed(decision) = outcome else {
        panic!("expected commit, got {outcome:?}");
    };
    assert_eq!(decision.intensity, Intensity::Medium);
    assert!(!decision.failure);
    let commit = sys.seat(Seat::Driver).last_commit();
    assert_eq!(commit.level, HeatLevel::Low);
    assert_eq!(commit.at_ms, 1000);
    assert_eq!(leds.rgb(), (false, false, true));
}

#[test]
fn implausible_reading_keeps_last_good_state_for_the_recorder() {
    let (sys, clock) = system();
    let mut heater = Heater::new(&sys, Seat::Passenger, MockLeds::default());

    press(&sys, &clock, Seat::Passenger);
    clock.set(1000);
    assert!(matches!(sample(&sys, &mut heater, 20), Outcome::Committed(_)));

    clock.set(2000);
    let outcome = sample(&sys, &mut heater, 42);
    assert!(matches!(outcome, Outcome::Failed(d) if d.intensity == Intensity::Disabled));

    let seat = sys.seat(Seat::Passenger);
    assert!(seat.failure());
    assert_eq!(seat.last_commit().at_ms, 1000, "failing sample is not committed");

    let mask = BusFlag::PassengerSensorFailure.mask();
    assert_eq!(sys.bus().try_take(mask), Some(mask));
    let rec = failure_recorder::record(&sys, Seat::Passenger);
    assert_eq!(rec.state_before_failure, HeatLevel::Low);
    assert_eq!(rec.failure_time_ms, 1000);
    assert_eq!(seat.failure_record(), Some(rec));
    assert_eq!(seat.failure_count(), 1);
}

#[test]
fn recovery_after_failure_commits_again() {
    let (sys, clock) = system();
    let mut heater = Heater::new(&sys, Seat::Driver, MockLeds::default());
    press(&sys, &clock, Seat::Driver);

    assert!(matches!(sample(&sys, &mut heater, 3), Outcome::Failed(_)));
    assert_eq!(sys.seat(Seat::Driver).current(), HeatLevel::Off);

    clock.set(5000);
    assert!(matches!(sample(&sys, &mut heater, 24), Outcome::Committed(_)));
    let seat = sys.seat(Seat::Driver);
    assert!(!seat.failure());
    assert_eq!(seat.current(), HeatLevel::Low);
    assert_eq!(seat.intensity(), Intensity::Disabled, "one degree short needs no heat");
}

#[test]
fn four_presses_return_to_off_and_suspend() {
    let (sys, clock) = system();
    let mut heater = Heater::new(&sys, Seat::Driver, MockLeds::default());

    for _ in 0..4 {
        press(&sys, &clock, Seat::Driver);
    }
    assert_eq!(sys.seat(Seat::Driver).desired(), HeatLevel::Off);
    assert_eq!(sample(&sys, &mut heater, 20), Outcome::Suspend);
    assert_eq!(sys.seat(Seat::Driver).intensity(), Intensity::Disabled);
}

#[test]
fn warm_seat_needs_no_heat() {
    let (sys, clock) = system();
    let leds = MockLeds::default();
    let mut heater = Heater::new(&sys, Seat::Driver, leds.clone());
    for _ in 0..3 {
        press(&sys, &clock, Seat::Driver);
    }
    assert_eq!(sys.seat(Seat::Driver).desired(), HeatLevel::High);

    let outcome = sample(&sys, &mut heater, 36);
    assert!(matches!(outcome, Outcome::Committed(d) if d.intensity == Intensity::Disabled));
    assert_eq!(sys.seat(Seat::Driver).current(), HeatLevel::High);
    assert_eq!(leds.rgb(), (false, false, false));

    let outcome = sample(&sys, &mut heater, 24);
    assert!(matches!(outcome, Outcome::Committed(d) if d.intensity == Intensity::High));
    assert_eq!(leds.rgb(), (false, true, true));
}

#[test]
fn seats_do_not_share_state() {
    let (sys, clock) = system();
    let mut driver = Heater::new(&sys, Seat::Driver, MockLeds::default());
    press(&sys, &clock, Seat::Driver);

    assert!(matches!(sample(&sys, &mut driver, 42), Outcome::Failed(_)));
    let passenger = sys.seat(Seat::Passenger);
    assert!(!passenger.failure());
    assert_eq!(passenger.desired(), HeatLevel::Off);
    assert_eq!(sys.bus().bits(), BusFlag::DriverSensorFailure.mask());
}
