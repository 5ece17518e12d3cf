use crate::storage::{KeyValueStore, TIMERS_KEY};

use super::errors::TimerError;
use super::types::Timer;

/// Loaded timer list plus the reason loading fell back to empty, if it did.
#[derive(Debug, Clone, Default)]
pub struct TimersData {
    pub timers: Vec<Timer>,
    /// Error message if loading failed (entry corrupted, unreadable, etc.).
    /// Transient, never persisted.
    pub load_error: Option<String>,
}

/// Load the timer list from the `my_timers` entry.
///
/// A missing entry is an empty list. An unreadable or corrupted entry is
/// also an empty list, with the error logged and kept in `load_error`.
pub fn load_timers<S: KeyValueStore + ?Sized>(store: &S) -> TimersData {
    let content = match store.get(TIMERS_KEY) {
        Ok(Some(content)) => content,
        Ok(None) => return TimersData::default(),
        Err(e) => {
            tracing::error!(
                event = "core.timers.load_failed",
                key = TIMERS_KEY,
                error = %e
            );
            return TimersData {
                load_error: Some(format!("Failed to read timers: {}", e)),
                ..Default::default()
            };
        }
    };

    match serde_json::from_str::<Vec<Timer>>(&content) {
        Ok(timers) => {
            tracing::debug!(event = "core.timers.loaded", count = timers.len());
            TimersData {
                timers,
                load_error: None,
            }
        }
        Err(e) => {
            // ERROR (not warn): entry exists but is corrupted, the next save
            // will replace it.
            tracing::error!(
                event = "core.timers.json_parse_failed",
                key = TIMERS_KEY,
                error = %e,
                "Timers entry exists but contains invalid JSON - starting with an empty list"
            );
            TimersData {
                load_error: Some(format!("Timers data corrupted ({}). Starting empty.", e)),
                ..Default::default()
            }
        }
    }
}

/// Persist the whole timer list to the `my_timers` entry.
pub fn save_timers<S: KeyValueStore + ?Sized>(
    store: &mut S,
    timers: &[Timer],
) -> Result<(), TimerError> {
    let json = serde_json::to_string(timers).map_err(|e| TimerError::SaveFailed {
        message: format!("Failed to serialize timers: {}", e),
    })?;

    store.set(TIMERS_KEY, &json)?;

    tracing::info!(event = "core.timers.saved", count = timers.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileStore, MemoryStore};
    use crate::timers::types::TimerId;
    use tempfile::TempDir;

    fn timer(id: u64, title: &str) -> Timer {
        Timer {
            id: TimerId(id),
            title: title.to_string(),
            date: "2030-01-01T00:00".to_string(),
        }
    }

    #[test]
    fn test_load_missing_entry_is_empty() {
        let store = MemoryStore::new();
        let data = load_timers(&store);
        assert!(data.timers.is_empty());
        assert!(data.load_error.is_none());
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileStore::new(temp_dir.path());

        save_timers(&mut store, &[timer(1, "Launch"), timer(2, "Landing")]).unwrap();

        let data = load_timers(&store);
        assert_eq!(data.timers.len(), 2);
        assert_eq!(data.timers[0].title, "Launch");
        assert_eq!(data.timers[1].id, TimerId(2));
    }

    #[test]
    fn test_saved_entry_is_plain_json_array() {
        let mut store = MemoryStore::new();
        save_timers(&mut store, &[timer(5, "x")]).unwrap();

        let raw = store.get(TIMERS_KEY).unwrap().unwrap();
        assert_eq!(raw, r#"[{"id":5,"title":"x","date":"2030-01-01T00:00"}]"#);
    }

    #[test]
    fn test_load_corrupted_json_returns_empty_with_error() {
        let mut store = MemoryStore::new();
        store.set(TIMERS_KEY, "{ this is not valid json }").unwrap();

        let data = load_timers(&store);
        assert!(data.timers.is_empty());
        assert!(data.load_error.unwrap().contains("corrupted"));
    }

    #[test]
    fn test_load_unreadable_entry_returns_empty_with_error() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::create_dir_all(temp_dir.path().join(TIMERS_KEY)).unwrap();
        let store = FileStore::new(temp_dir.path());

        let data = load_timers(&store);
        assert!(data.timers.is_empty());
        assert!(data.load_error.is_some());
    }
}
