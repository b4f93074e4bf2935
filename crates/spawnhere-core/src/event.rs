use std::fmt;

/// A platform-agnostic window event.
///
/// Platform crates translate raw OS notifications into these variants,
/// dropping anything that targets a sub-object (scrollbar, caret, menu
/// item) rather than the window itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    /// A window became visible.
    Shown { hwnd: usize },

    /// A window became the foreground window.
    ///
    /// Catches windows that are activated without a show notification.
    Foreground { hwnd: usize },

    /// A window was destroyed.
    Destroyed { hwnd: usize },
}

impl WindowEvent {
    /// Returns the window handle associated with this event.
    pub fn hwnd(&self) -> usize {
        match self {
            Self::Shown { hwnd } | Self::Foreground { hwnd } | Self::Destroyed { hwnd } => *hwnd,
        }
    }
}

impl fmt::Display for WindowEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Shown { .. } => "shown",
            Self::Foreground { .. } => "foreground",
            Self::Destroyed { .. } => "destroyed",
        };
        write!(f, "{name:<10} 0x{:X}", self.hwnd())
    }
}
