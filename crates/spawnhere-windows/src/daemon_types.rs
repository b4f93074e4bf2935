use std::sync::mpsc;

use spawnhere_core::WindowEvent;
use spawnhere_core::ipc::{Command, Response};

/// Internal message type for the main daemon thread.
pub(super) enum DaemonMsg {
    /// A window event from the hook thread.
    Event(WindowEvent),
    /// A CLI command with a callback to send the response.
    Command(Command, ResponseSender),
    /// Ctrl+C, Ctrl+Break or console close.
    Shutdown,
}

/// Sends a response back to the IPC thread for the connected client.
pub(super) type ResponseSender = mpsc::Sender<Response>;
