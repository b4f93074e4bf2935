mod loader;
pub mod template;

use serde::{Deserialize, Serialize};

use crate::logging::LogConfig;

pub use loader::{config_dir, config_path, load, try_load};

/// Top-level configuration for spawnhere.
///
/// Loaded from `~/.config/spawnhere/config.toml`. Missing sections
/// fall back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How destination rectangles are computed.
    pub placement: PlacementConfig,
    /// Which windows are considered for repositioning.
    pub filter: FilterConfig,
    /// Which notification streams feed the tracker.
    pub events: EventsConfig,
    /// File logging settings.
    pub logging: LogConfig,
}

/// Placement settings for maximized windows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Largest restored width used when relocating a maximized window.
    pub max_width: i32,
    /// Largest restored height used when relocating a maximized window.
    pub max_height: i32,
    /// Space kept free on each axis when the destination is smaller
    /// than the maximum size.
    pub margin: i32,
}

/// Eligibility filter settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Windows narrower than this are ignored.
    pub min_width: i32,
    /// Windows shorter than this are ignored.
    pub min_height: i32,
    /// Extra window classes to ignore (exact match), on top of the
    /// built-in shell classes.
    pub excluded_classes: Vec<String>,
}

/// Event subscription settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventsConfig {
    /// Also react to foreground changes, which catches windows that
    /// never send a show notification.
    pub foreground: bool,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            max_width: 1200,
            max_height: 900,
            margin: 100,
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_width: 50,
            min_height: 50,
            excluded_classes: Vec::new(),
        }
    }
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self { foreground: true }
    }
}

impl Config {
    /// Clamps values to safe ranges.
    ///
    /// Prevents zero or negative restore sizes and margins that would
    /// push a relocated window off its destination monitor.
    pub fn validate(&mut self) {
        self.placement.max_width = self.placement.max_width.clamp(100, 16384);
        self.placement.max_height = self.placement.max_height.clamp(100, 16384);
        self.placement.margin = self.placement.margin.clamp(0, 1000);
        self.filter.min_width = self.filter.min_width.clamp(0, 1000);
        self.filter.min_height = self.filter.min_height.clamp(0, 1000);
    }
}
