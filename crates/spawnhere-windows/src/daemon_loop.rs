use std::sync::mpsc;

use spawnhere_core::config::Config;
use spawnhere_core::ipc::{Command, Response};
use spawnhere_core::{Result, Tracker};

use crate::desktop::Win32Desktop;
use crate::{event_loop, monitor};

use super::daemon_threads;
use super::daemon_types::DaemonMsg;

/// The inner daemon loop, separated so cleanup always runs in `run()`.
pub(super) fn daemon_loop(config: &Config) -> Result<()> {
    log::info!("Watcher started (PID: {})", std::process::id());
    log::info!(
        "Config: max(width={}, height={}), margin={}, min(width={}, height={}), foreground={}",
        config.placement.max_width,
        config.placement.max_height,
        config.placement.margin,
        config.filter.min_width,
        config.filter.min_height,
        config.events.foreground
    );

    match monitor::enumerate_monitors() {
        Ok(monitors) => {
            for m in monitors {
                let area = m.work_area;
                log::info!(
                    "Monitor 0x{:X}: work area {}x{} at ({}, {})",
                    m.id,
                    area.width,
                    area.height,
                    area.x,
                    area.y
                );
            }
        }
        Err(e) => log::warn!("Could not enumerate monitors: {e}"),
    }

    let (tx, rx) = mpsc::channel::<DaemonMsg>();

    // Hooks first: if they cannot be installed there is nothing to run.
    let (event_channel_tx, event_channel_rx) = mpsc::channel();
    let event_loop = event_loop::start(event_channel_tx, config.events.foreground)?;

    let event_bridge = daemon_threads::spawn_event_bridge(event_channel_rx, tx.clone());
    let ipc_thread = daemon_threads::spawn_ipc_listener(tx.clone());
    daemon_threads::spawn_ctrl_c_bridge(tx.clone());

    let mut tracker = Tracker::new(Win32Desktop, config);
    let mut stopped_over_ipc = false;

    // Main processing loop: blocks until a message arrives.
    while let Ok(msg) = rx.recv() {
        match msg {
            DaemonMsg::Event(event) => {
                let outcome = tracker.handle(&event);
                log::trace!("{event} -> {outcome:?}");
            }
            DaemonMsg::Command(Command::Status, reply_tx) => {
                let _ = reply_tx.send(Response::status(tracker.tracked_count()));
            }
            DaemonMsg::Command(Command::Stop, reply_tx) => {
                let _ = reply_tx.send(Response::ok_with_message("Watcher stopping"));
                stopped_over_ipc = true;
                break;
            }
            DaemonMsg::Shutdown => break,
        }
    }

    // Unhooks on the hook thread and closes the event channel.
    event_loop.stop();
    drop(tx);
    let _ = event_bridge.join();

    // The IPC thread only exits by itself after a Stop; otherwise it is
    // blocked in ConnectNamedPipe and dies with the process.
    if stopped_over_ipc {
        let _ = ipc_thread.join();
    }

    log::info!(
        "Watcher stopped ({} windows tracked)",
        tracker.tracked_count()
    );
    Ok(())
}
