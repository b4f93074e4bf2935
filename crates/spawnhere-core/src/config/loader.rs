use std::path::PathBuf;

use super::Config;
use crate::{Error, Result};

/// Returns the config directory: `~/.config/spawnhere/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".config").join("spawnhere"))
}

/// Returns the config file path: `~/.config/spawnhere/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Tries to load and parse `config.toml`.
///
/// Returns the validated config, or an error describing what went
/// wrong (missing home directory, IO error, parse error).
pub fn try_load() -> Result<Config> {
    let path =
        config_path().ok_or_else(|| Error::Config("could not determine config path".into()))?;
    let content = std::fs::read_to_string(&path)?;
    let mut config: Config = toml::from_str(&content)
        .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
    config.validate();
    Ok(config)
}

/// Loads the configuration from disk, falling back to defaults.
///
/// A missing file silently returns defaults; any other failure is
/// reported on stderr (the logger isn't up yet) and also yields defaults.
pub fn load() -> Config {
    match try_load() {
        Ok(config) => config,
        Err(Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Config::default(),
        Err(e) => {
            eprintln!("Warning: {e}, using defaults");
            Config::default()
        }
    }
}
