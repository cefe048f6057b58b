//! Task set and the executor threads that drive it.
//!
//! ```text
//!  ┌──────────────── "control" thread ────────────────┐  ┌──── "monitor" thread ────┐
//!  │  LocalExecutor                                   │  │  LocalExecutor           │
//!  │   level_selector        bus: buttons             │  │   cpu_load   2100 ms ⏱   │
//!  │   heater ×2             gate[seat], latch[seat]  │  │   telemetry  1000 ms ⏱   │
//!  │   failure_recorder ×2   bus: failure[seat]       │  └──────────────────────────┘
//!  │   conversion            500 ms ⏱                 │
//!  └──────────────────────────────────────────────────┘
//! ```
//!
//! Every task suspends at exactly one wait (gate, bus or ticker) per
//! loop.  Each future is wrapped in [`metered`] so its poll time lands
//! in the [`TaskId`] counter the CPU-load task reads.

pub mod conversion;
pub mod cpu_load;
pub mod failure_recorder;
pub mod heater;
pub mod level_selector;
pub mod telemetry;

use std::sync::Arc;
use std::thread::JoinHandle;

use edge_executor::LocalExecutor;
use log::info;

use crate::app::ports::{AdcPort, LedPort, SerialPort};
use crate::app::system::HeaterSystem;
use crate::diagnostics::{TaskId, metered};
use crate::drivers::task_pin::spawn_task;
use crate::error::Result;
use crate::seat::Seat;

use heater::Heater;

const CONTROL_STACK_KB: usize = 32;
const MONITOR_STACK_KB: usize = 16;

/// Run the control task group on the calling thread.  Never returns.
pub fn run_control<A, L>(sys: &HeaterSystem, adc: A, leds: [L; 2])
where
    A: AdcPort,
    L: LedPort,
{
    let executor: LocalExecutor<'_, 8> = LocalExecutor::new();
    let exec = sys.exec();

    executor
        .spawn(metered(TaskId::LevelSelector, exec, level_selector::run(sys)))
        .detach();

    for (seat, leds) in Seat::ALL.into_iter().zip(leds) {
        executor
            .spawn(metered(TaskId::heater(seat), exec, Heater::new(sys, seat, leds).run()))
            .detach();
        executor
            .spawn(metered(
                TaskId::failure_recorder(seat),
                exec,
                failure_recorder::run(sys, seat),
            ))
            .detach();
    }

    executor
        .spawn(metered(TaskId::ConversionTrigger, exec, conversion::run(sys, adc)))
        .detach();

    info!("control tasks started");
    futures_lite::future::block_on(executor.run(core::future::pending::<()>()));
}

/// Run the monitoring task group on the calling thread.  Never returns.
pub fn run_monitor(sys: &HeaterSystem, serial: impl SerialPort) {
    let executor: LocalExecutor<'_, 4> = LocalExecutor::new();
    let exec = sys.exec();

    executor
        .spawn(metered(TaskId::CpuLoad, exec, cpu_load::run(sys)))
        .detach();
    executor
        .spawn(metered(TaskId::Telemetry, exec, telemetry::run(sys, serial)))
        .detach();

    info!("monitor tasks started");
    futures_lite::future::block_on(executor.run(core::future::pending::<()>()));
}

/// Spawn both executor threads.
pub fn spawn_all<A, L, S>(
    sys: &Arc<HeaterSystem>,
    adc: A,
    leds: [L; 2],
    serial: S,
) -> Result<[JoinHandle<()>; 2]>
where
    A: AdcPort + Send + 'static,
    L: LedPort + Send + 'static,
    S: SerialPort + Send + 'static,
{
    let control = {
        let sys = Arc::clone(sys);
        spawn_task("control", CONTROL_STACK_KB, move || run_control(&sys, adc, leds))?
    };
    let monitor = {
        let sys = Arc::clone(sys);
        spawn_task("monitor", MONITOR_STACK_KB, move || run_monitor(&sys, serial))?
    };
    Ok([control, monitor])
}
