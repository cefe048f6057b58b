//! Fuzz target: signal bus and sample gate
//!
//! Interprets the input as a sequence of set / take / publish / consume
//! operations and checks after every step that:
//! - A take clears exactly the requested bits that were set
//! - Bits outside the mask are never touched
//! - The gate only ever hands out the most recently published reading
//!
//! cargo fuzz run fuzz_signal_bus

#![no_main]

use libfuzzer_sys::fuzz_target;
use seatheat::sync::{SampleGate, SignalBus};

fuzz_target!(|data: &[u8]| {
    let bus = SignalBus::new();
    let gate = SampleGate::new();
    let mut model_bits = 0u8;
    let mut model_slot: Option<i32> = None;

    for pair in data.chunks_exact(2) {
        let (op, arg) = (pair[0] % 4, pair[1]);
        match op {
            0 => {
                let mask = arg & 0x0F;
                bus.set_bits(mask);
                model_bits |= mask;
            }
            1 => {
                let mask = arg & 0x0F;
                let hit = model_bits & mask;
                let got = bus.try_take(mask);
                if mask == 0 {
                    assert_eq!(got, Some(0));
                } else if hit == 0 {
                    assert_eq!(got, None);
                } else {
                    assert_eq!(got, Some(hit));
                }
                model_bits &= !mask;
            }
            2 => {
                let reading = i32::from(arg as i8);
                gate.publish(reading);
                model_slot = Some(reading);
            }
            _ => {
                assert_eq!(gate.try_consume(), model_slot.take());
            }
        }
        assert_eq!(bus.bits(), model_bits);
        assert_eq!(gate.is_pending(), model_slot.is_some());
    }
});
