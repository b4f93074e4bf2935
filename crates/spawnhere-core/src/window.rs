use crate::{Monitor, Point, Rect, Result};

/// Style bits relevant to eligibility, read in a single snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowStyle {
    /// `WS_CHILD` on Windows.
    pub child: bool,
    /// `WS_EX_TOOLWINDOW` on Windows: tooltips, floating palettes.
    pub tool_window: bool,
    /// Has a title bar (`WS_CAPTION`).
    pub caption: bool,
}

/// Platform-agnostic window trait.
///
/// Each platform crate (e.g. `spawnhere-windows`) provides its own
/// implementation. The core only ever reads live metadata through it
/// and never owns the window's lifetime.
pub trait Window {
    /// Whether the handle still refers to an existing window.
    fn exists(&self) -> bool;

    /// Returns whether the window is currently visible.
    fn is_visible(&self) -> bool;

    /// Returns the window title.
    fn title(&self) -> Result<String>;

    /// Returns the window class name.
    fn class(&self) -> Result<String>;

    /// Returns the window bounding rectangle.
    fn rect(&self) -> Result<Rect>;

    fn style(&self) -> WindowStyle;

    fn is_maximized(&self) -> bool;

    /// Moves and resizes the window.
    fn set_rect(&self, rect: &Rect) -> Result<()>;

    /// Restores a maximized window to its normal state.
    fn restore(&self) -> Result<()>;

    fn maximize(&self) -> Result<()>;
}

/// The desktop the watcher operates on: windows, cursor and monitors.
///
/// Both monitor lookups fall back to the nearest display, so they only
/// fail when the platform query itself fails.
pub trait Desktop {
    type Window: Window;

    /// Wraps a raw window handle.
    fn window(&self, hwnd: usize) -> Self::Window;

    fn cursor_position(&self) -> Result<Point>;

    /// The monitor containing (or nearest to) a point.
    fn monitor_from_point(&self, point: Point) -> Result<Monitor>;

    /// The monitor with the largest overlap with (or nearest to) a rectangle.
    fn monitor_from_rect(&self, rect: &Rect) -> Result<Monitor>;
}
