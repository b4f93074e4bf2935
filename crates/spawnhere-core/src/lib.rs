pub mod config;
pub mod error;
pub mod event;
pub mod filter;
pub mod ipc;
pub mod logging;
pub mod monitor;
pub mod pid;
pub mod placement;
pub mod rect;
pub mod relocate;
pub mod tracker;
pub mod window;

#[cfg(test)]
pub(crate) mod fake;

pub use error::{Error, Result};
pub use event::WindowEvent;
pub use ipc::{Command, PIPE_NAME, Response};
pub use monitor::Monitor;
pub use placement::Placement;
pub use rect::{Point, Rect};
pub use tracker::{Outcome, Tracker};
pub use window::{Desktop, Window, WindowStyle};
