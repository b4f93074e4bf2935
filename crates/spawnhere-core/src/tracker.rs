//! Registry of windows that have already been handled.
//!
//! Bridges the show, foreground and destroy notification streams into
//! [`relocate`]. A window is relocated at most once between its first
//! qualifying notification and its destruction. Show and foreground
//! notifications often arrive back to back for the same window; the
//! registry check collapses them into one action.
//!
//! The tracker is owned by a single thread and takes `&mut self`, so
//! the registry needs no lock.

use std::collections::HashSet;

use crate::config::{Config, FilterConfig, PlacementConfig};
use crate::filter::{self, Rejection};
use crate::placement::Placement;
use crate::relocate::relocate;
use crate::{Desktop, WindowEvent};

/// What the tracker did with one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The event was dropped without looking at the window (null
    /// handle, disabled stream, destroy of an unknown window).
    Ignored,
    /// The window was already handled earlier in its lifetime.
    AlreadyTracked,
    /// The window failed the eligibility filter and stays untracked.
    Ineligible(Rejection),
    /// The window is now tracked and the placement was applied.
    Relocated(Placement),
    /// The window is now tracked but the move was abandoned because a
    /// platform query failed.
    Failed,
    /// A destroyed window was removed from the registry.
    Forgotten,
}

/// Tracks handled windows and relocates new ones.
pub struct Tracker<D: Desktop> {
    desktop: D,
    placement: PlacementConfig,
    filter: FilterConfig,
    follow_foreground: bool,
    tracked: HashSet<usize>,
}

impl<D: Desktop> Tracker<D> {
    pub fn new(desktop: D, config: &Config) -> Self {
        Self {
            desktop,
            placement: config.placement.clone(),
            filter: config.filter.clone(),
            follow_foreground: config.events.foreground,
            tracked: HashSet::new(),
        }
    }

    /// Handles one window event.
    pub fn handle(&mut self, event: &WindowEvent) -> Outcome {
        match *event {
            WindowEvent::Shown { hwnd } => self.observe(hwnd),
            WindowEvent::Foreground { hwnd } if self.follow_foreground => self.observe(hwnd),
            WindowEvent::Foreground { .. } => Outcome::Ignored,
            WindowEvent::Destroyed { hwnd } => self.forget(hwnd),
        }
    }

    /// Number of windows currently in the registry.
    pub fn tracked_count(&self) -> usize {
        self.tracked.len()
    }

    pub fn is_tracked(&self, hwnd: usize) -> bool {
        self.tracked.contains(&hwnd)
    }

    /// First sighting of a window: filter, register, relocate.
    fn observe(&mut self, hwnd: usize) -> Outcome {
        if hwnd == 0 {
            return Outcome::Ignored;
        }
        if self.tracked.contains(&hwnd) {
            return Outcome::AlreadyTracked;
        }

        let window = self.desktop.window(hwnd);
        if let Err(reason) = filter::check(&window, &self.filter) {
            log::trace!("skip 0x{hwnd:X}: {reason}");
            return Outcome::Ineligible(reason);
        }

        // Registered before moving so a failed attempt is not retried.
        self.tracked.insert(hwnd);

        match relocate(&self.desktop, hwnd, &self.placement) {
            Ok(placement) => Outcome::Relocated(placement),
            Err(e) => {
                log::debug!("relocate 0x{hwnd:X} abandoned: {e}");
                Outcome::Failed
            }
        }
    }

    /// Drops a destroyed window. Unknown handles are a no-op.
    fn forget(&mut self, hwnd: usize) -> Outcome {
        if self.tracked.remove(&hwnd) {
            Outcome::Forgotten
        } else {
            Outcome::Ignored
        }
    }

    #[cfg(test)]
    pub(crate) fn desktop_mut(&mut self) -> &mut D {
        &mut self.desktop
    }
}

#[cfg(test)]
mod tests;
