use std::fs;
use std::path::PathBuf;

use crate::{Error, Result};

/// Returns the spawnhere data directory, creating it if needed.
///
/// On Windows: `%LOCALAPPDATA%\spawnhere`
fn data_dir() -> Result<PathBuf> {
    let base = std::env::var("LOCALAPPDATA")
        .map_err(|_| Error::Config("LOCALAPPDATA environment variable not set".into()))?;

    let dir = PathBuf::from(base).join("spawnhere");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Returns the path to the PID file.
pub fn pid_path() -> Result<PathBuf> {
    Ok(data_dir()?.join("spawnhere.pid"))
}

/// Writes the current process's PID to the PID file.
///
/// Lets the CLI find a daemon whose pipe has stopped answering and
/// terminate it.
pub fn write_pid_file() -> Result<()> {
    fs::write(pid_path()?, std::process::id().to_string())?;
    Ok(())
}

/// Reads the PID from the PID file, if it exists.
pub fn read_pid_file() -> Result<Option<u32>> {
    let path = pid_path()?;

    if !path.exists() {
        return Ok(None);
    }

    parse_pid(&fs::read_to_string(&path)?).map(Some)
}

/// Removes the PID file.
pub fn remove_pid_file() -> Result<()> {
    let path = pid_path()?;

    if path.exists() {
        fs::remove_file(&path)?;
    }

    Ok(())
}

fn parse_pid(contents: &str) -> Result<u32> {
    contents
        .trim()
        .parse()
        .map_err(|e| Error::Config(format!("invalid PID file contents: {e}")))
}
