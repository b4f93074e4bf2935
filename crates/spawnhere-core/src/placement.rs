//! Computes where a window should land on the cursor's monitor.
//!
//! Pure geometry: the caller resolves the monitors, applies the result
//! to the real window and logs it.

use crate::config::PlacementConfig;
use crate::{Monitor, Rect};

/// What to do with a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Already on the destination monitor. Leave it alone.
    Skip,
    /// Move the window to this rectangle (size unchanged).
    MoveTo(Rect),
    /// Restore the maximized window, apply this rectangle, then maximize
    /// again.
    ///
    /// Maximizing straight onto another monitor does not reliably move
    /// the window; the intermediate restore and resize does.
    RestoreCenterAndMaximize(Rect),
}

impl Placement {
    /// Short label used in log lines.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Skip => "skip",
            Self::MoveTo(_) => "move",
            Self::RestoreCenterAndMaximize(_) => "maximized move",
        }
    }
}

/// Computes the placement of `current` when moving from `source` to
/// `destination`.
///
/// Normal windows keep their size and their relative position inside
/// the work area, then get clamped into the destination work area.
/// Maximized windows are centered at a capped size and re-maximized.
pub fn compute(
    current: &Rect,
    maximized: bool,
    source: &Monitor,
    destination: &Monitor,
    config: &PlacementConfig,
) -> Placement {
    if source.is_same(destination) {
        return Placement::Skip;
    }

    let dest = destination.work_area;

    if maximized {
        let width = capped(config.max_width, dest.width, config.margin);
        let height = capped(config.max_height, dest.height, config.margin);
        return Placement::RestoreCenterAndMaximize(dest.centered(width, height));
    }

    let src = source.work_area;
    let x = dest.x + rescale(current.x - src.x, src.width, dest.width);
    let y = dest.y + rescale(current.y - src.y, src.height, dest.height);

    Placement::MoveTo(clamp_into(
        Rect::new(x, y, current.width, current.height),
        &dest,
    ))
}

/// Restored size along one axis: at most `max`, leaving `margin` free
/// when the work area allows it. A work area no larger than the margin
/// is filled instead of collapsing to nothing.
fn capped(max: i32, extent: i32, margin: i32) -> i32 {
    let room = extent - margin;
    if room > 0 {
        max.min(room)
    } else {
        max.min(extent).max(0)
    }
}

/// Maps an offset along a source axis of length `from` onto an axis of
/// length `to`, keeping the same fraction. Truncates toward zero.
///
/// Not clamped: a window hanging off the source monitor maps outside
/// the destination, which the final clamp then corrects.
fn rescale(offset: i32, from: i32, to: i32) -> i32 {
    if from <= 0 {
        return 0;
    }
    (i64::from(offset) * i64::from(to) / i64::from(from)) as i32
}

/// Pulls `rect` back inside `area` without resizing it.
///
/// The right/bottom edges are fixed first and the left/top edges last,
/// so a window larger than the area ends up flush with its left/top.
fn clamp_into(mut rect: Rect, area: &Rect) -> Rect {
    if rect.right() > area.right() {
        rect.x = area.right() - rect.width;
    }
    if rect.bottom() > area.bottom() {
        rect.y = area.bottom() - rect.height;
    }
    if rect.x < area.x {
        rect.x = area.x;
    }
    if rect.y < area.y {
        rect.y = area.y;
    }
    rect
}
