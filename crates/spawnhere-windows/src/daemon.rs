use spawnhere_core::{Result, config, logging, pid};

use crate::dpi;

#[path = "daemon_ipc.rs"]
mod daemon_ipc;
#[path = "daemon_loop.rs"]
mod daemon_loop;
#[path = "daemon_threads.rs"]
mod daemon_threads;
#[path = "daemon_types.rs"]
mod daemon_types;

/// Runs the spawnhere watcher until stopped.
///
/// Used both by `spawnhere run` (attached to a console, stopped with
/// Ctrl+C) and by the detached daemon (stopped over IPC). Starts
/// background threads for the WinEvent hooks and the IPC listener;
/// the calling thread owns the tracker.
///
/// Failures are logged before being returned.
pub fn run() -> Result<()> {
    let config = config::load();
    logging::init(&config.logging);
    dpi::enable_dpi_awareness();

    let result = pid::write_pid_file().and_then(|()| {
        let result = daemon_loop::daemon_loop(&config);
        let _ = pid::remove_pid_file();
        result
    });

    if let Err(e) = &result {
        log::error!("Watcher failed: {e}");
    }
    result
}
