use spawnhere_core::Result;
use windows::Win32::Foundation::{HWND, LPARAM};
use windows::Win32::UI::WindowsAndMessaging::{EnumWindows, IsWindowVisible};
use windows::core::BOOL;

use crate::error::OrPlatform;
use crate::window::Window;

/// Enumerates all visible top-level windows.
///
/// Eligibility is left to the caller so that diagnostics can show why
/// a window would be skipped.
pub fn enumerate_windows() -> Result<Vec<Window>> {
    let mut windows: Vec<Window> = Vec::new();

    // SAFETY: EnumWindows calls our callback for each top-level window.
    // We pass a pointer to our Vec as LPARAM (user data). This is sound
    // because EnumWindows runs synchronously and the Vec outlives the call.
    unsafe {
        EnumWindows(
            Some(enum_window_callback),
            LPARAM(&mut windows as *mut _ as isize),
        )
    }
    .or_platform()?;

    Ok(windows)
}

/// Callback invoked by `EnumWindows` for each top-level window.
///
/// Returns `TRUE` to continue enumeration.
unsafe extern "system" fn enum_window_callback(hwnd: HWND, lparam: LPARAM) -> BOOL {
    // SAFETY: lparam is a pointer to our Vec<Window>, cast from enumerate_windows().
    let windows = unsafe { &mut *(lparam.0 as *mut Vec<Window>) };

    if unsafe { IsWindowVisible(hwnd).as_bool() } {
        windows.push(Window::new(hwnd));
    }

    BOOL(1)
}
