//! Adapters — host implementations of the port traits.
//!
//! | Adapter        | Implements   | Connects to                        |
//! |----------------|--------------|------------------------------------|
//! | `config_file`  | ConfigPort   | JSON file named by SEATHEAT_CONFIG |
//! | `console_log`  | log backend  | tracing-subscriber on stderr       |
//! | `serial`       | SerialPort   | stdout / any `io::Write`           |
//! | `sim_adc`      | AdcPort      | simulated seat thermal plants      |
//! | `sim_led`      | OutputPin    | in-memory pins behind `LedBank`    |
//! | `time`         | TickSource   | embassy-time monotonic clock       |

pub mod config_file;
pub mod console_log;
pub mod serial;
pub mod sim_adc;
pub mod sim_led;
pub mod time;
