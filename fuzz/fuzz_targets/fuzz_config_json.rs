//! Fuzz target: JSON configuration loading
//!
//! Feeds arbitrary bytes to the config parser and verifies:
//! - No panics on malformed or hostile input
//! - Anything accepted passes `validate()` and builds a `HeaterSystem`
//!
//! cargo fuzz run fuzz_config_json

#![no_main]

use libfuzzer_sys::fuzz_target;
use seatheat::adapters::config_file::parse;
use seatheat::app::ports::TickSource;
use seatheat::app::system::HeaterSystem;
use seatheat::seat::Timestamp;

struct Zero;

impl TickSource for Zero {
    fn now_ms(&self) -> Timestamp {
        0
    }
}

fuzz_target!(|data: &[u8]| {
    let Ok(text) = core::str::from_utf8(data) else {
        return;
    };
    if let Ok(config) = parse(text) {
        assert!(config.validate().is_ok());
        assert!(HeaterSystem::new(config, Box::new(Zero)).is_ok());
    }
});
