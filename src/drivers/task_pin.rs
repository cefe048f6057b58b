//! Named worker-thread spawning.
//!
//! Each executor runs on its own OS thread with an explicit stack size.
//! The thread name shows up in panic messages and debuggers, so it is
//! taken from the executor's role (`"control"`, `"monitor"`).

use std::thread::JoinHandle;

use crate::error::{Error, Result};

/// Spawn a named thread with a `stack_kb` KiB stack.
///
/// Thread creation failure is reported as [`Error::Init`]; the caller
/// decides whether the system can start without it.
pub fn spawn_task(
    name: &'static str,
    stack_kb: usize,
    f: impl FnOnce() + Send + 'static,
) -> Result<JoinHandle<()>> {
    log::info!("Spawning '{}' (stack={}KB)", name, stack_kb);

    std::thread::Builder::new()
        .name(name.into())
        .stack_size(stack_kb * 1024)
        .spawn(f)
        .map_err(|e| {
            log::error!("spawn '{}' failed: {}", name, e);
            Error::Init("thread creation failed")
        })
}
