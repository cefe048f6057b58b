//! Integration test driver for `tests/integration/` submodules.
//!
//! Each `mod` below maps to a file that exercises a specific subsystem
//! against mock peripherals.  All tests run on the host with no real
//! hardware required.

mod heater_flow_tests;
mod lifecycle_tests;
mod mock_hw;
mod runtime_tests;
