use thiserror::Error;

/// Errors produced by spawnhere.
///
/// Platform crates map their native errors into [`Error::Platform`] so
/// the core never depends on an OS binding.
#[derive(Debug, Error)]
pub enum Error {
    /// A platform query or mutation failed (window gone, monitor info
    /// unavailable, hook not installed, ...).
    #[error("platform call failed: {0}")]
    Platform(String),

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Shorthand for building a [`Error::Platform`] from anything printable.
    pub fn platform(msg: impl Into<String>) -> Self {
        Self::Platform(msg.into())
    }
}

/// Result alias used across the workspace.
pub type Result<T> = std::result::Result<T, Error>;
