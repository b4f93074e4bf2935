//! Console control handler using `SetConsoleCtrlHandler`.

use std::sync::OnceLock;
use std::sync::mpsc::Sender;

use spawnhere_core::{Error, Result};
use windows::Win32::System::Console::{
    CTRL_BREAK_EVENT, CTRL_C_EVENT, CTRL_CLOSE_EVENT, SetConsoleCtrlHandler,
};

use crate::error::OrPlatform;

/// Registers a handler that sends `()` on the given channel when the
/// console receives Ctrl+C, Ctrl+Break or is closed.
///
/// Can only be registered once per process.
pub fn set_handler(tx: Sender<()>) -> Result<()> {
    SENDER
        .set(tx)
        .map_err(|_| Error::platform("Ctrl+C handler already registered"))?;

    unsafe { SetConsoleCtrlHandler(Some(handler), true) }.or_platform()
}

/// Global sender, written once by `set_handler` and read by the callback.
static SENDER: OnceLock<Sender<()>> = OnceLock::new();

unsafe extern "system" fn handler(ctrl_type: u32) -> windows::core::BOOL {
    let handled = matches!(ctrl_type, CTRL_C_EVENT | CTRL_BREAK_EVENT | CTRL_CLOSE_EVENT);
    if handled && let Some(tx) = SENDER.get() {
        let _ = tx.send(());
    }
    windows::core::BOOL(handled as i32)
}
