//! Decides whether a window is a real application window worth moving.
//!
//! Every gate is an independent check on live window metadata. The
//! first failing gate short-circuits; the order only affects how much
//! is queried, never the verdict. Nothing is memoized: an ineligible
//! window is re-evaluated on every event it shows up in.

use std::fmt;

use crate::config::FilterConfig;
use crate::window::Window;

/// Shell and system classes that are never repositioned (exact match).
pub const RESERVED_CLASSES: &[&str] = &[
    "tooltips_class32",
    "Shell_TrayWnd",
    "Progman",
    "WorkerW",
    "NotifyIconOverflowWindow",
    "Windows.UI.Core.CoreWindow",
];

/// Class-name fragment used by transient XAML shell surfaces.
pub const RESERVED_CLASS_FRAGMENT: &str = "Xaml";

/// Why a window was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The handle no longer refers to a window.
    Gone,
    Hidden,
    Child,
    ToolWindow,
    /// No title bar, so not a top-level application window.
    NoCaption,
    ReservedClass(String),
    TooSmall { width: i32, height: i32 },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gone => write!(f, "window no longer exists"),
            Self::Hidden => write!(f, "not visible"),
            Self::Child => write!(f, "child window"),
            Self::ToolWindow => write!(f, "tool window"),
            Self::NoCaption => write!(f, "no caption"),
            Self::ReservedClass(class) => write!(f, "reserved class {class}"),
            Self::TooSmall { width, height } => write!(f, "too small ({width}x{height})"),
        }
    }
}

/// Runs every gate and returns the first rejection, if any.
///
/// A class name or rectangle that cannot be read does not reject the
/// window on its own; the remaining gates still apply.
pub fn check(window: &impl Window, config: &FilterConfig) -> Result<(), Rejection> {
    if !window.exists() {
        return Err(Rejection::Gone);
    }
    if !window.is_visible() {
        return Err(Rejection::Hidden);
    }

    let style = window.style();
    if style.child {
        return Err(Rejection::Child);
    }
    if style.tool_window {
        return Err(Rejection::ToolWindow);
    }
    if !style.caption {
        return Err(Rejection::NoCaption);
    }

    if let Ok(class) = window.class()
        && is_reserved_class(&class, &config.excluded_classes)
    {
        return Err(Rejection::ReservedClass(class));
    }

    if let Ok(rect) = window.rect()
        && (rect.width < config.min_width || rect.height < config.min_height)
    {
        return Err(Rejection::TooSmall {
            width: rect.width,
            height: rect.height,
        });
    }

    Ok(())
}

/// Returns `true` when the window should be repositioned.
pub fn is_eligible(window: &impl Window, config: &FilterConfig) -> bool {
    check(window, config).is_ok()
}

/// Whether a class belongs to the shell or to the user's exclusion list.
pub fn is_reserved_class(class: &str, extra: &[String]) -> bool {
    RESERVED_CLASSES.contains(&class)
        || class.contains(RESERVED_CLASS_FRAGMENT)
        || extra.iter().any(|c| c == class)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rect;
    use crate::fake::FakeWindow;

    fn config() -> FilterConfig {
        FilterConfig::default()
    }

    #[test]
    fn accepts_normal_application_window() {
        // Arrange
        let window = FakeWindow::app("Notepad", Rect::new(100, 100, 400, 300));

        // Act / Assert
        assert_eq!(check(&window, &config()), Ok(()));
        assert!(is_eligible(&window, &config()));
    }

    #[test]
    fn rejects_destroyed_window() {
        // Arrange
        let mut window = FakeWindow::app("Notepad", Rect::new(0, 0, 400, 300));
        window.exists = false;

        // Act / Assert
        assert_eq!(check(&window, &config()), Err(Rejection::Gone));
    }

    #[test]
    fn rejects_hidden_window() {
        let mut window = FakeWindow::app("Notepad", Rect::new(0, 0, 400, 300));
        window.visible = false;

        assert_eq!(check(&window, &config()), Err(Rejection::Hidden));
    }

    #[test]
    fn rejects_child_window() {
        let mut window = FakeWindow::app("Button", Rect::new(0, 0, 400, 300));
        window.style.child = true;

        assert_eq!(check(&window, &config()), Err(Rejection::Child));
    }

    #[test]
    fn rejects_tool_window() {
        let mut window = FakeWindow::app("Palette", Rect::new(0, 0, 400, 300));
        window.style.tool_window = true;

        assert_eq!(check(&window, &config()), Err(Rejection::ToolWindow));
    }

    #[test]
    fn rejects_window_without_caption() {
        let mut window = FakeWindow::app("Splash", Rect::new(0, 0, 400, 300));
        window.style.caption = false;

        assert_eq!(check(&window, &config()), Err(Rejection::NoCaption));
    }

    #[test]
    fn rejects_every_reserved_shell_class() {
        for class in RESERVED_CLASSES {
            // Arrange
            let window = FakeWindow::app(class, Rect::new(0, 0, 400, 300));

            // Act / Assert
            assert_eq!(
                check(&window, &config()),
                Err(Rejection::ReservedClass(class.to_string())),
                "{class} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_xaml_hosted_surfaces_by_substring() {
        let window = FakeWindow::app(
            "Windows.UI.Composition.DesktopWindowContentBridge.XamlIsland",
            Rect::new(0, 0, 400, 300),
        );

        assert!(matches!(
            check(&window, &config()),
            Err(Rejection::ReservedClass(_))
        ));
    }

    #[test]
    fn reserved_class_match_is_exact() {
        // "Progman" is reserved, but a class that merely contains it is not.
        let window = FakeWindow::app("ProgmanClone", Rect::new(0, 0, 400, 300));

        assert!(is_eligible(&window, &config()));
    }

    #[test]
    fn rejects_user_excluded_class() {
        // Arrange
        let config = FilterConfig {
            excluded_classes: vec!["ConsoleWindowClass".into()],
            ..FilterConfig::default()
        };
        let window = FakeWindow::app("ConsoleWindowClass", Rect::new(0, 0, 400, 300));

        // Act / Assert
        assert!(!is_eligible(&window, &config));
    }

    #[test]
    fn rejects_windows_below_minimum_size() {
        let narrow = FakeWindow::app("App", Rect::new(0, 0, 49, 300));
        let short = FakeWindow::app("App", Rect::new(0, 0, 300, 49));

        assert_eq!(
            check(&narrow, &config()),
            Err(Rejection::TooSmall {
                width: 49,
                height: 300
            })
        );
        assert!(!is_eligible(&short, &config()));
    }

    #[test]
    fn accepts_window_exactly_at_minimum_size() {
        let window = FakeWindow::app("App", Rect::new(0, 0, 50, 50));

        assert!(is_eligible(&window, &config()));
    }

    #[test]
    fn unreadable_metadata_does_not_reject() {
        // Arrange
        let mut window = FakeWindow::app("App", Rect::new(0, 0, 400, 300));
        window.class = None;
        window.rect = None;

        // Act / Assert
        assert!(is_eligible(&window, &config()));
    }
}
