use spawnhere_core::{Error, Result};

/// Maps `windows` crate errors into the core error type.
pub(crate) trait OrPlatform<T> {
    fn or_platform(self) -> Result<T>;
}

impl<T> OrPlatform<T> for windows::core::Result<T> {
    fn or_platform(self) -> Result<T> {
        self.map_err(|e| Error::platform(e.to_string()))
    }
}
