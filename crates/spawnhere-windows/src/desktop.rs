use spawnhere_core::{Desktop, Monitor, Point, Rect, Result};

use crate::monitor;
use crate::window::Window;

/// The live Win32 desktop.
///
/// Stateless: every query goes to the OS, so monitor hot-plugging and
/// work-area changes are picked up on the next event.
#[derive(Debug, Default, Clone, Copy)]
pub struct Win32Desktop;

impl Desktop for Win32Desktop {
    type Window = Window;

    fn window(&self, hwnd: usize) -> Window {
        Window::from_raw(hwnd)
    }

    fn cursor_position(&self) -> Result<Point> {
        monitor::cursor_position()
    }

    fn monitor_from_point(&self, point: Point) -> Result<Monitor> {
        monitor::monitor_from_point(point)
    }

    fn monitor_from_rect(&self, rect: &Rect) -> Result<Monitor> {
        monitor::monitor_from_rect(rect)
    }
}
