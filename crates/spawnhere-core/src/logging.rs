//! `log` backend: console lines plus an optional rotating log file.
//!
//! Every record is written to stderr. When file logging is enabled the
//! same line is appended to `~/.config/spawnhere/logs/spawnhere.log`;
//! once the file exceeds the configured size it is rotated to
//! `spawnhere.log.1` (one backup kept).

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

use log::{LevelFilter, Log, Metadata, Record};
use serde::{Deserialize, Serialize};

static LOGGER: OnceLock<Logger> = OnceLock::new();

const LOG_FILE_NAME: &str = "spawnhere.log";

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Whether file logging is enabled. Defaults to `false`.
    pub enabled: bool,
    /// Minimum log level: "debug", "info", "warn", or "error".
    pub level: String,
    /// Maximum log file size in megabytes before rotation.
    pub max_file_mb: u64,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".into(),
            max_file_mb: 10,
        }
    }
}

struct Logger {
    min_level: LevelFilter,
    file: Option<Mutex<LogFile>>,
}

struct LogFile {
    file: File,
    path: PathBuf,
    max_bytes: u64,
    written: u64,
}

/// Installs the global logger. Call once at startup.
///
/// Later calls are ignored, as is any failure to open the log file;
/// console output keeps working either way.
pub fn init(config: &LogConfig) {
    let logger = LOGGER.get_or_init(|| Logger {
        min_level: parse_level(&config.level),
        file: open_log_file(config).map(Mutex::new),
    });
    if log::set_logger(logger).is_ok() {
        log::set_max_level(logger.min_level);
    }
}

/// Parses a level name, defaulting to `Info` for anything unknown.
pub fn parse_level(s: &str) -> LevelFilter {
    s.trim().parse().unwrap_or(LevelFilter::Info)
}

fn open_log_file(config: &LogConfig) -> Option<LogFile> {
    if !config.enabled {
        return None;
    }
    let log_dir = crate::config::config_dir()?.join("logs");
    let _ = fs::create_dir_all(&log_dir);
    LogFile::open(&log_dir.join(LOG_FILE_NAME), config.max_file_mb * 1024 * 1024).ok()
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.min_level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("{} [{}] {}\n", timestamp(), record.level(), record.args());
        let _ = io::stderr().write_all(line.as_bytes());

        if let Some(file) = &self.file
            && let Ok(mut file) = file.lock()
        {
            file.append(&line);
        }
    }

    fn flush(&self) {
        if let Some(file) = &self.file
            && let Ok(mut file) = file.lock()
        {
            let _ = file.file.flush();
        }
    }
}

impl LogFile {
    fn open(path: &Path, max_bytes: u64) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let written = file.metadata().map(|m| m.len()).unwrap_or(0);
        Ok(Self {
            file,
            path: path.to_path_buf(),
            max_bytes,
            written,
        })
    }

    fn append(&mut self, line: &str) {
        let _ = self.file.write_all(line.as_bytes());
        self.written += line.len() as u64;

        if self.max_bytes > 0 && self.written >= self.max_bytes {
            self.rotate();
        }
    }

    fn backup_path(&self) -> PathBuf {
        self.path.with_extension("log.1")
    }

    fn rotate(&mut self) {
        let _ = fs::rename(&self.path, self.backup_path());
        if let Ok(f) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
        {
            self.file = f;
        }
        self.written = 0;
    }
}

fn timestamp() -> String {
    // UTC wall clock, enough to correlate lines within a session.
    let dur = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    let secs = dur.as_secs();
    let (h, m, s) = (secs / 3600 % 24, secs / 60 % 60, secs % 60);
    format!("{h:02}:{m:02}:{s:02}")
}
