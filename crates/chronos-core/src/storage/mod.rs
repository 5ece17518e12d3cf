//! Durable key-value entries backing the timer list and display preferences.

pub mod errors;
pub mod file;
pub mod memory;

pub use errors::StorageError;
pub use file::{FileStore, data_dir};
pub use memory::MemoryStore;

/// Key holding the JSON array of timers.
pub const TIMERS_KEY: &str = "my_timers";
/// Key holding the selected skin name.
pub const SKIN_KEY: &str = "visual_style";
/// Key holding the light/dark theme preference.
pub const THEME_KEY: &str = "theme";

/// String-keyed durable storage.
///
/// Values are opaque strings; callers own their encoding. A missing key is
/// `Ok(None)`, not an error.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}
