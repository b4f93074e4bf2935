use std::sync::mpsc;
use std::thread;

use spawnhere_core::WindowEvent;

use crate::ctrl_c;

use super::daemon_ipc;
use super::daemon_types::DaemonMsg;

/// Bridges window events into the daemon message channel.
pub(super) fn spawn_event_bridge(
    event_rx: mpsc::Receiver<WindowEvent>,
    tx: mpsc::Sender<DaemonMsg>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        for event in event_rx {
            if tx.send(DaemonMsg::Event(event)).is_err() {
                break;
            }
        }
    })
}

/// Spawns the IPC listener thread.
pub(super) fn spawn_ipc_listener(tx: mpsc::Sender<DaemonMsg>) -> thread::JoinHandle<()> {
    thread::spawn(move || daemon_ipc::ipc_loop(tx))
}

/// Forwards console control signals into the daemon channel.
///
/// A detached daemon has no console; there the handler is simply never
/// invoked. The bridge thread exits once the process does.
pub(super) fn spawn_ctrl_c_bridge(tx: mpsc::Sender<DaemonMsg>) {
    let (signal_tx, signal_rx) = mpsc::channel();
    if let Err(e) = ctrl_c::set_handler(signal_tx) {
        log::debug!("No console control handler: {e}");
        return;
    }

    thread::spawn(move || {
        if signal_rx.recv().is_ok() {
            let _ = tx.send(DaemonMsg::Shutdown);
        }
    });
}
