//! Level selector: the only consumer of the button bits and the only
//! writer of each seat's desired level.
//!
//! Every accepted press advances that seat one step around
//! Off → Low → Medium → High → Off.  Leaving Off resumes the seat's
//! heater task.

use log::info;

use crate::app::system::HeaterSystem;
use crate::heater::HeatLevel;
use crate::seat::Seat;
use crate::sync::{BUTTON_MASK, BusFlag};

pub async fn run(sys: &HeaterSystem) {
    loop {
        let bits = sys.bus().wait_for_any(BUTTON_MASK).await;
        on_buttons(sys, bits);
    }
}

/// Apply one batch of button bits taken from the bus.
pub fn on_buttons(sys: &HeaterSystem, bits: u8) {
    for seat in Seat::ALL {
        if bits & BusFlag::button(seat).mask() == 0 {
            continue;
        }
        let level = sys.seat(seat).selector().advance();
        info!("{}: desired level -> {:?}", seat.name(), level);
        if level == HeatLevel::Low {
            sys.latch(seat).resume();
        }
    }
}
