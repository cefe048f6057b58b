//! Conversion trigger: starts a conversion on every seat channel once
//! per period.  Completion arrives by interrupt; this task never waits
//! for it.
//!
//! The first conversion is requested at start-up, so each heater has a
//! reading without waiting a full period.  After that the [`Ticker`]
//! schedules each wake from a fixed baseline, so late dispatch of one
//! period does not push back the next.

use embassy_time::{Duration, Ticker};
use log::debug;

use crate::app::ports::AdcPort;
use crate::app::system::HeaterSystem;
use crate::seat::Seat;
use crate::sensors::AdcChannel;

pub async fn run(sys: &HeaterSystem, mut adc: impl AdcPort) {
    let period = Duration::from_millis(sys.config().conversion_period_ms);
    let mut ticker = Ticker::every(period);
    debug!("conversion trigger every {} ms", period.as_millis());
    trigger(&mut adc);
    loop {
        ticker.next().await;
        trigger(&mut adc);
    }
}

/// Request one conversion per seat channel.
pub fn trigger(adc: &mut impl AdcPort) {
    for seat in Seat::ALL {
        adc.start_conversion(AdcChannel::for_seat(seat));
    }
}
