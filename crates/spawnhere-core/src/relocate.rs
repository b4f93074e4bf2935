//! Moves one window to the monitor under the cursor.
//!
//! Resolves both monitors fresh, asks [`placement::compute`] what to do,
//! applies it and emits the single log line for the move.

use crate::config::PlacementConfig;
use crate::placement::{self, Placement};
use crate::{Desktop, Result, Window};

/// Relocates `hwnd` to the cursor's monitor.
///
/// Any failed query aborts the attempt and returns the error; nothing
/// is retried. Returns the placement that was applied (possibly
/// [`Placement::Skip`]).
pub fn relocate<D: Desktop>(
    desktop: &D,
    hwnd: usize,
    config: &PlacementConfig,
) -> Result<Placement> {
    let cursor = desktop.cursor_position()?;
    let destination = desktop.monitor_from_point(cursor)?;

    let window = desktop.window(hwnd);
    let current = window.rect()?;
    let source = desktop.monitor_from_rect(&current)?;

    let placement = placement::compute(
        &current,
        window.is_maximized(),
        &source,
        &destination,
        config,
    );
    apply(&window, &placement)?;

    match placement {
        Placement::Skip => {}
        Placement::MoveTo(rect) | Placement::RestoreCenterAndMaximize(rect) => {
            let title = window.title().unwrap_or_default();
            let kind = if matches!(placement, Placement::MoveTo(_)) {
                "window"
            } else {
                "maximized window"
            };
            log::info!("Moved {kind} \"{title}\" to cursor monitor");
            log::debug!(
                "0x{hwnd:X}: {} mon {} -> mon {} at ({},{} {}x{})",
                placement.describe(),
                source.id,
                destination.id,
                rect.x,
                rect.y,
                rect.width,
                rect.height
            );
        }
    }

    Ok(placement)
}

/// Performs the OS mutations for a placement.
fn apply(window: &impl Window, placement: &Placement) -> Result<()> {
    match placement {
        Placement::Skip => {}
        Placement::MoveTo(rect) => window.set_rect(rect)?,
        Placement::RestoreCenterAndMaximize(rect) => {
            window.restore()?;
            window.set_rect(rect)?;
            window.maximize()?;
        }
    }
    Ok(())
}
