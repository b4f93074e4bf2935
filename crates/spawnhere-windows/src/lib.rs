//! Win32 backend for spawnhere. Empty on other platforms.
#![cfg(windows)]

/// Ctrl+C handling for the foreground watcher.
pub mod ctrl_c;

/// Watcher daemon main loop.
pub mod daemon;

/// `Desktop` implementation backed by Win32.
pub mod desktop;

/// Per-monitor DPI awareness.
pub mod dpi;

/// Top-level window enumeration.
pub mod enumerate;

/// Translation of raw WinEvents.
pub mod event;

/// WinEvent hooks and the message pump thread.
pub mod event_loop;

/// IPC via Named Pipes.
pub mod ipc;

/// Monitor and cursor queries.
pub mod monitor;

/// Process utilities (alive check, terminate).
pub mod process;

/// Window type wrapping a Win32 `HWND`.
pub mod window;

mod error;

pub use desktop::Win32Desktop;
pub use enumerate::enumerate_windows;
pub use window::Window;
