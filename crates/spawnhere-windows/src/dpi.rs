use windows::Win32::UI::HiDpi::{
    DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2, SetProcessDpiAwarenessContext,
};

/// Declares this process as per-monitor DPI aware (V2).
///
/// Cursor positions, work areas and window rectangles are then all in
/// physical pixels, so placements stay correct when the source and
/// destination monitors use different scale factors.
///
/// Must be called once at process startup, before any window query.
pub fn enable_dpi_awareness() {
    // SAFETY: SetProcessDpiAwarenessContext is safe to call once at startup.
    // Failure means awareness was already set (e.g. via manifest).
    if unsafe { SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2) }
        .is_err()
    {
        log::debug!("DPI awareness already set for this process");
    }
}
