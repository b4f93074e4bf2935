use std::mem;

use spawnhere_core::{Error, Monitor, Point, Rect, Result};
use windows::Win32::Foundation::{LPARAM, POINT, RECT};
use windows::Win32::Graphics::Gdi::{
    EnumDisplayMonitors, GetMonitorInfoW, HDC, HMONITOR, MONITOR_DEFAULTTONEAREST, MONITORINFO,
    MonitorFromPoint, MonitorFromRect,
};
use windows::Win32::UI::WindowsAndMessaging::GetCursorPos;
use windows::core::BOOL;

use crate::error::OrPlatform;

/// Returns the current cursor position in virtual-screen coordinates.
pub fn cursor_position() -> Result<Point> {
    let mut point = POINT::default();
    // SAFETY: GetCursorPos writes into the POINT we own.
    unsafe { GetCursorPos(&mut point) }.or_platform()?;
    Ok(Point::new(point.x, point.y))
}

/// Returns the monitor containing the point, or the nearest one.
pub fn monitor_from_point(point: Point) -> Result<Monitor> {
    // SAFETY: MonitorFromPoint only reads the display layout.
    let monitor = unsafe {
        MonitorFromPoint(
            POINT {
                x: point.x,
                y: point.y,
            },
            MONITOR_DEFAULTTONEAREST,
        )
    };
    describe(monitor)
}

/// Returns the monitor with the largest overlap with the rectangle,
/// or the nearest one if they don't intersect.
pub fn monitor_from_rect(rect: &Rect) -> Result<Monitor> {
    let rc = RECT {
        left: rect.left(),
        top: rect.top(),
        right: rect.right(),
        bottom: rect.bottom(),
    };
    // SAFETY: MonitorFromRect only reads the RECT and the display layout.
    let monitor = unsafe { MonitorFromRect(&rc, MONITOR_DEFAULTTONEAREST) };
    describe(monitor)
}

/// Lists every connected monitor with its work area.
pub fn enumerate_monitors() -> Result<Vec<Monitor>> {
    let mut handles: Vec<HMONITOR> = Vec::new();

    // SAFETY: EnumDisplayMonitors runs synchronously; the Vec outlives
    // the call and the callback only pushes into it.
    let ok = unsafe {
        EnumDisplayMonitors(
            None,
            None,
            Some(enum_monitor_callback),
            LPARAM(&mut handles as *mut _ as isize),
        )
    };
    if !ok.as_bool() {
        return Err(Error::platform("EnumDisplayMonitors failed"));
    }

    handles.into_iter().map(describe).collect()
}

unsafe extern "system" fn enum_monitor_callback(
    monitor: HMONITOR,
    _hdc: HDC,
    _rect: *mut RECT,
    lparam: LPARAM,
) -> BOOL {
    // SAFETY: lparam is the Vec pointer passed by enumerate_monitors().
    let handles = unsafe { &mut *(lparam.0 as *mut Vec<HMONITOR>) };
    handles.push(monitor);
    BOOL(1)
}

fn describe(monitor: HMONITOR) -> Result<Monitor> {
    if monitor.is_invalid() {
        return Err(Error::platform("no monitor found"));
    }
    Ok(Monitor::new(monitor.0 as usize, work_area_for_monitor(monitor)?))
}

/// Queries the work area for a given monitor handle.
///
/// The work area excludes the taskbar and any docked toolbars.
fn work_area_for_monitor(monitor: HMONITOR) -> Result<Rect> {
    let mut info = MONITORINFO {
        cbSize: mem::size_of::<MONITORINFO>() as u32,
        ..Default::default()
    };

    // SAFETY: GetMonitorInfoW fills the MONITORINFO struct with
    // monitor dimensions. We set cbSize as required by the API.
    let success = unsafe { GetMonitorInfoW(monitor, &mut info) };

    if !success.as_bool() {
        return Err(Error::platform("failed to get monitor info"));
    }

    let rc = info.rcWork;
    Ok(Rect::from_edges(rc.left, rc.top, rc.right, rc.bottom))
}
