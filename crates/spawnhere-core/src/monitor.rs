use crate::Rect;

/// A display as seen at one instant: its identity and usable work area.
///
/// The work area excludes the taskbar and docked toolbars. Monitors are
/// resolved on demand and never cached, because the layout can change
/// while the watcher is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Monitor {
    /// Platform monitor handle value. Two lookups that land on the same
    /// display return the same id.
    pub id: usize,
    pub work_area: Rect,
}

impl Monitor {
    pub fn new(id: usize, work_area: Rect) -> Self {
        Self { id, work_area }
    }

    /// Whether `other` is the same physical display.
    ///
    /// Compares identity only; two monitors with identical work areas
    /// (mirrored or cloned layouts) are still distinct.
    pub fn is_same(&self, other: &Monitor) -> bool {
        self.id == other.id
    }
}
