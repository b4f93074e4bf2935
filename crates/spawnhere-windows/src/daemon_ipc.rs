//! Named-pipe front end of the watcher: one command per connection.
//!
//! The tracker lives on the daemon thread, so every command is relayed
//! there and the reply is carried back on a one-shot channel.

use std::sync::mpsc;
use std::time::Duration;

use spawnhere_core::Result;
use spawnhere_core::ipc::{Command, Response};

use crate::ipc::PipeServer;

use super::daemon_types::DaemonMsg;

/// How long a CLI client waits for the daemon thread to answer.
const REPLY_TIMEOUT: Duration = Duration::from_secs(2);

/// Serves connections until a `Stop` has been answered or the daemon
/// thread is gone. Runs on a dedicated thread.
pub(super) fn ipc_loop(tx: mpsc::Sender<DaemonMsg>) {
    loop {
        let server = match PipeServer::create() {
            Ok(server) => server,
            Err(e) => {
                log::error!("IPC disabled, could not create pipe: {e}");
                return;
            }
        };

        match serve(&server, &tx) {
            Ok(true) => {}
            Ok(false) => return,
            Err(e) => log::warn!("Dropped IPC connection: {e}"),
        }
    }
}

/// Handles one connection. Returns whether to keep listening.
fn serve(server: &PipeServer, tx: &mpsc::Sender<DaemonMsg>) -> Result<bool> {
    let command = server.accept_command()?;
    log::debug!("IPC command: {command:?}");

    let (response, keep_listening) = relay(command, tx);
    server.send_response(&response)?;
    Ok(keep_listening)
}

/// Forwards a command to the daemon thread and waits for its reply.
fn relay(command: Command, tx: &mpsc::Sender<DaemonMsg>) -> (Response, bool) {
    let stopping = command == Command::Stop;
    let (reply_tx, reply_rx) = mpsc::channel();

    if tx.send(DaemonMsg::Command(command, reply_tx)).is_err() {
        return (Response::error("watcher is shutting down"), false);
    }

    match reply_rx.recv_timeout(REPLY_TIMEOUT) {
        Ok(response) => (response, !stopping),
        Err(mpsc::RecvTimeoutError::Timeout) => (Response::error("watcher did not answer"), true),
        Err(mpsc::RecvTimeoutError::Disconnected) => {
            (Response::error("watcher is shutting down"), false)
        }
    }
}
