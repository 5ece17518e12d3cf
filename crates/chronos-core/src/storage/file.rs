use std::path::{Path, PathBuf};

use super::{KeyValueStore, StorageError};

/// One file per key under a data directory.
///
/// `<dir>/<key>` holds the raw value. The directory is created on the
/// first write, so a fresh install reads as empty.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store rooted at [`data_dir`].
    pub fn open_default() -> Self {
        Self::new(data_dir())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StorageError::InvalidKey {
                key: key.to_string(),
            });
        }
        Ok(self.dir.join(key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::ReadFailed {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| StorageError::WriteFailed {
                key: key.to_string(),
                source,
            })?;
        }

        std::fs::write(&path, value).map_err(|source| StorageError::WriteFailed {
            key: key.to_string(),
            source,
        })?;

        tracing::debug!(
            event = "core.storage.write_completed",
            key = key,
            path = %path.display(),
            bytes = value.len()
        );

        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::WriteFailed {
                key: key.to_string(),
                source,
            }),
        }
    }
}

/// Directory holding all durable entries.
///
/// `CHRONOS_HOME` wins when set and non-empty. Otherwise `~/.chronos`, or
/// `./.chronos` if the home directory cannot be determined.
pub fn data_dir() -> PathBuf {
    if let Ok(path_str) = std::env::var("CHRONOS_HOME")
        && !path_str.is_empty()
    {
        return PathBuf::from(path_str);
    }

    match dirs::home_dir() {
        Some(home) => home.join(".chronos"),
        None => {
            tracing::error!(
                event = "core.storage.home_dir_not_found",
                fallback = ".",
                "Could not determine home directory - using current directory as fallback"
            );
            PathBuf::from(".").join(".chronos")
        }
    }
}

/// Test utilities for the data directory override.
///
/// Public so the CLI crate can use the env lock/guard in its tests.
#[doc(hidden)]
pub mod test_helpers {
    use std::sync::Mutex;

    /// Mutex to serialize tests that modify the CHRONOS_HOME env var.
    pub static CHRONOS_HOME_ENV_LOCK: Mutex<()> = Mutex::new(());

    /// RAII guard that removes the CHRONOS_HOME env var on drop.
    pub struct ChronosHomeEnvGuard;

    impl ChronosHomeEnvGuard {
        pub fn new(path: &std::path::Path) -> Self {
            // SAFETY: Caller must hold CHRONOS_HOME_ENV_LOCK to serialize access
            // from Rust test code. Acceptable in test-only code.
            unsafe { std::env::set_var("CHRONOS_HOME", path) };
            Self
        }
    }

    impl Drop for ChronosHomeEnvGuard {
        fn drop(&mut self) {
            // SAFETY: Caller must hold CHRONOS_HOME_ENV_LOCK throughout guard
            // lifetime. See safety comment in new().
            unsafe { std::env::remove_var("CHRONOS_HOME") };
        }
    }
}
