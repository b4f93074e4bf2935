/// Generates the default `config.toml` contents with explanatory comments.
///
/// This is used by `spawnhere init` to create a starter config file that
/// users can immediately edit.
pub fn generate_config() -> String {
    r##"# spawnhere configuration
# Location: ~/.config/spawnhere/config.toml

[placement]
# A maximized window is restored to at most this size, centered on the
# cursor's monitor, and then maximized again there.
max_width = 1200
max_height = 900
# Pixels kept free on each axis when the destination monitor is smaller
# than the size above.
margin = 100

[filter]
# Windows smaller than this (in pixels) are never moved.
min_width = 50
min_height = 50
# Extra window classes to leave alone (exact match). Use
# `spawnhere debug list` to find a window's class.
# excluded_classes = ["ConsoleWindowClass"]
excluded_classes = []

[events]
# Also react when a window becomes the foreground window. Some apps never
# send a show notification; disable this if windows jump unexpectedly.
foreground = true

[logging]
# Enable file logging to ~/.config/spawnhere/logs/spawnhere.log.
enabled = false
# Minimum log level: "debug", "info", "warn", or "error".
level = "info"
# Maximum log file size in MB before rotation.
max_file_mb = 10
"##
    .to_string()
}
