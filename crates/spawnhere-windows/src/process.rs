use spawnhere_core::Result;
use windows::Win32::Foundation::CloseHandle;
use windows::Win32::System::Threading::{
    OpenProcess, PROCESS_QUERY_LIMITED_INFORMATION, PROCESS_TERMINATE, TerminateProcess,
};

use crate::error::OrPlatform;

/// Checks whether a process with the given PID is still alive.
///
/// Uses `OpenProcess` with minimal access rights. If the handle can be
/// opened, the process exists. Used to detect stale PID files left
/// behind when the daemon is killed without a clean shutdown.
pub fn is_process_alive(pid: u32) -> bool {
    // SAFETY: OpenProcess attempts to open an existing process.
    // PROCESS_QUERY_LIMITED_INFORMATION is the least-privilege access
    // right that still confirms the process exists.
    let result = unsafe { OpenProcess(PROCESS_QUERY_LIMITED_INFORMATION, false, pid) };

    match result {
        Ok(handle) => {
            unsafe {
                let _ = CloseHandle(handle);
            }
            true
        }
        Err(_) => false,
    }
}

/// Forcibly terminates the process with the given PID.
///
/// Used by `stop` when the daemon no longer answers on its pipe.
pub fn kill_process(pid: u32) -> Result<()> {
    // SAFETY: the handle is closed on every path after use.
    unsafe {
        let handle = OpenProcess(PROCESS_TERMINATE, false, pid).or_platform()?;
        let result = TerminateProcess(handle, 1).or_platform();
        let _ = CloseHandle(handle);
        result
    }
}
