//! Explicit application state owned by the root controller.

use crate::preferences::Preferences;
use crate::timers::{TimerDraft, TimerId, TimerList};

/// Only one dialog can be open at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DialogState {
    #[default]
    None,
    /// Create/edit form. `editing` is `None` for a new timer.
    Form {
        draft: TimerDraft,
        editing: Option<TimerId>,
        /// Last submit failure, shown with the form.
        error: Option<String>,
    },
    /// Delete confirmation for `id`.
    ConfirmDelete { id: TimerId },
}

impl DialogState {
    pub fn is_form(&self) -> bool {
        matches!(self, DialogState::Form { .. })
    }

    pub fn is_confirm_delete(&self) -> bool {
        matches!(self, DialogState::ConfirmDelete { .. })
    }

    pub fn open_create() -> Self {
        DialogState::Form {
            draft: TimerDraft::default(),
            editing: None,
            error: None,
        }
    }

    pub fn open_edit(id: TimerId, draft: TimerDraft) -> Self {
        DialogState::Form {
            draft,
            editing: Some(id),
            error: None,
        }
    }

    pub fn draft(&self) -> Option<&TimerDraft> {
        match self {
            DialogState::Form { draft, .. } => Some(draft),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub timers: TimerList,
    /// Why the stored list could not be read, if it could not.
    pub load_error: Option<String>,
    pub preferences: Preferences,
    pub dialog: DialogState,
    /// Timer shown fullscreen.
    pub fullscreen: Option<TimerId>,
}

impl AppState {
    pub fn new(timers: TimerList, preferences: Preferences) -> Self {
        Self {
            timers,
            preferences,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialog_default_is_closed() {
        let dialog = DialogState::default();
        assert!(!dialog.is_form());
        assert!(!dialog.is_confirm_delete());
        assert!(dialog.draft().is_none());
    }

    #[test]
    fn test_open_edit_keeps_draft() {
        let dialog = DialogState::open_edit(TimerId(3), TimerDraft::new("a", "2025-01-01"));
        assert!(dialog.is_form());
        assert_eq!(dialog.draft().unwrap().title, "a");
    }
}
