use crate::errors::ChronosError;
use crate::storage::StorageError;

use super::types::TimerId;

#[derive(Debug, thiserror::Error)]
pub enum TimerError {
    #[error("Timer '{id}' not found")]
    NotFound { id: TimerId },

    #[error("Title and date are both required")]
    IncompleteDraft,

    #[error("Invalid date '{date}'. Expected a local date-time like 2025-03-02T01:02")]
    InvalidDate { date: String },

    #[error("Date '{date}' does not exist in the local time zone")]
    UnresolvableDate { date: String },

    #[error("Failed to save timers: {message}")]
    SaveFailed { message: String },

    #[error("Storage error: {source}")]
    Storage {
        #[from]
        source: StorageError,
    },
}

impl ChronosError for TimerError {
    fn error_code(&self) -> &'static str {
        match self {
            TimerError::NotFound { .. } => "TIMER_NOT_FOUND",
            TimerError::IncompleteDraft => "TIMER_INCOMPLETE_DRAFT",
            TimerError::InvalidDate { .. } => "TIMER_INVALID_DATE",
            TimerError::UnresolvableDate { .. } => "TIMER_UNRESOLVABLE_DATE",
            TimerError::SaveFailed { .. } => "TIMER_SAVE_FAILED",
            TimerError::Storage { .. } => "TIMER_STORAGE_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        // Exhaustive match ensures new variants force an explicit classification.
        match self {
            TimerError::NotFound { .. }
            | TimerError::IncompleteDraft
            | TimerError::InvalidDate { .. }
            | TimerError::UnresolvableDate { .. } => true,

            TimerError::SaveFailed { .. } | TimerError::Storage { .. } => false,
        }
    }
}
