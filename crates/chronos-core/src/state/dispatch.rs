use tracing::{debug, error, info};

use crate::config::DisplayConfig;
use crate::display::Theme;
use crate::preferences::{load_preferences, save_skin, save_theme};
use crate::state::app::{AppState, DialogState};
use crate::state::errors::DispatchError;
use crate::state::events::Event;
use crate::state::store::Store;
use crate::state::types::Command;
use crate::storage::KeyValueStore;
use crate::timers::handler as timer_ops;
use crate::timers::{TimerDraft, TimerId};

/// Default Store implementation backed by a key-value store.
///
/// Every timer mutation persists the whole list; theme and skin changes
/// persist their own entries. A failed save leaves state unchanged.
pub struct CoreStore<S: KeyValueStore> {
    storage: S,
    state: AppState,
}

impl<S: KeyValueStore> CoreStore<S> {
    /// Load timers and preferences from `storage`.
    pub fn open(storage: S, display: &DisplayConfig) -> Self {
        let (timers, load_error) = timer_ops::open_list(&storage);
        let preferences = load_preferences(&storage, display);
        let mut state = AppState::new(timers, preferences);
        state.load_error = load_error;
        Self { storage, state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn submit_form(&mut self) -> Result<Vec<Event>, DispatchError> {
        let DialogState::Form { draft, editing, .. } = &self.state.dialog else {
            return Err(DispatchError::NoFormOpen);
        };
        if !draft.is_complete() {
            debug!(event = "core.state.submit_ignored", reason = "incomplete_draft");
            return Ok(vec![]);
        }

        let draft = draft.clone();
        let editing = *editing;
        let result = match editing {
            None => timer_ops::create_timer(&mut self.state.timers, &mut self.storage, draft)
                .map(|timer| Event::TimerCreated { id: timer.id }),
            Some(id) => {
                let old_date = timer_ops::get_timer(&self.state.timers, id)?.date.clone();
                timer_ops::update_timer(&mut self.state.timers, &mut self.storage, id, draft).map(
                    |timer| Event::TimerUpdated {
                        id,
                        date_changed: timer.date != old_date,
                    },
                )
            }
        };

        match result {
            Ok(event) => {
                self.state.dialog = DialogState::None;
                Ok(vec![event, Event::FormClosed])
            }
            Err(e) => {
                if let DialogState::Form { error, .. } = &mut self.state.dialog {
                    *error = Some(e.to_string());
                }
                Err(e.into())
            }
        }
    }

    fn set_theme(&mut self, theme: Theme) -> Result<Vec<Event>, DispatchError> {
        save_theme(&mut self.storage, theme)?;
        self.state.preferences.theme = theme;
        Ok(vec![Event::ThemeChanged { theme }])
    }

    fn require_timer(&self, id: TimerId) -> Result<(), DispatchError> {
        timer_ops::get_timer(&self.state.timers, id)?;
        Ok(())
    }
}

impl<S: KeyValueStore> Store for CoreStore<S> {
    type Error = DispatchError;

    fn dispatch(&mut self, cmd: Command) -> Result<Vec<Event>, DispatchError> {
        debug!(event = "core.state.dispatch_started", command = ?cmd);

        let result = match cmd {
            Command::OpenCreateForm => {
                self.state.dialog = DialogState::open_create();
                Ok(vec![Event::FormOpened { editing: None }])
            }
            Command::OpenEditForm { id } => {
                let timer = timer_ops::get_timer(&self.state.timers, id)?;
                self.state.dialog =
                    DialogState::open_edit(id, TimerDraft::from_timer(timer));
                Ok(vec![Event::FormOpened { editing: Some(id) }])
            }
            Command::UpdateDraft { title, date } => match &mut self.state.dialog {
                DialogState::Form { draft, error, .. } => {
                    if let Some(title) = title {
                        draft.title = title;
                    }
                    if let Some(date) = date {
                        draft.date = date;
                    }
                    *error = None;
                    Ok(vec![Event::DraftUpdated])
                }
                _ => Err(DispatchError::NoFormOpen),
            },
            Command::SubmitForm => self.submit_form(),
            Command::CancelForm => {
                if self.state.dialog.is_form() {
                    self.state.dialog = DialogState::None;
                    Ok(vec![Event::FormClosed])
                } else {
                    Ok(vec![])
                }
            }
            Command::RequestDelete { id } => {
                self.require_timer(id)?;
                self.state.dialog = DialogState::ConfirmDelete { id };
                Ok(vec![Event::DeleteRequested { id }])
            }
            Command::ConfirmDelete => {
                let DialogState::ConfirmDelete { id } = self.state.dialog else {
                    return Err(DispatchError::NoPendingDelete);
                };
                timer_ops::delete_timer(&mut self.state.timers, &mut self.storage, id)?;
                self.state.dialog = DialogState::None;

                let mut events = vec![Event::TimerDeleted { id }];
                if self.state.fullscreen == Some(id) {
                    self.state.fullscreen = None;
                    events.push(Event::FullscreenClosed);
                }
                Ok(events)
            }
            Command::CancelDelete => match self.state.dialog {
                DialogState::ConfirmDelete { id } => {
                    self.state.dialog = DialogState::None;
                    Ok(vec![Event::DeleteCancelled { id }])
                }
                _ => Ok(vec![]),
            },
            Command::OpenFullscreen { id } => {
                self.require_timer(id)?;
                self.state.fullscreen = Some(id);
                Ok(vec![Event::FullscreenOpened { id }])
            }
            Command::CloseFullscreen => match self.state.fullscreen.take() {
                Some(_) => Ok(vec![Event::FullscreenClosed]),
                None => Ok(vec![]),
            },
            Command::ToggleTheme => self.set_theme(self.state.preferences.theme.toggle()),
            Command::SetTheme { theme } => self.set_theme(theme),
            Command::SetSkin { skin } => {
                save_skin(&mut self.storage, skin)?;
                self.state.preferences.skin = skin;
                Ok(vec![Event::SkinChanged { skin }])
            }
        };

        match &result {
            Ok(events) => info!(
                event = "core.state.dispatch_completed",
                event_count = events.len()
            ),
            Err(e) => error!(event = "core.state.dispatch_failed", error = %e),
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::SkinKind;
    use crate::storage::{MemoryStore, SKIN_KEY, StorageError, THEME_KEY, TIMERS_KEY};
    use crate::timers::load_timers;

    fn open() -> CoreStore<MemoryStore> {
        CoreStore::open(MemoryStore::new(), &DisplayConfig::default())
    }

    fn add(store: &mut CoreStore<MemoryStore>, title: &str, date: &str) -> TimerId {
        store.dispatch(Command::OpenCreateForm).unwrap();
        store
            .dispatch(Command::UpdateDraft {
                title: Some(title.to_string()),
                date: Some(date.to_string()),
            })
            .unwrap();
        let events = store.dispatch(Command::SubmitForm).unwrap();
        match events[0] {
            Event::TimerCreated { id } => id,
            ref other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn test_core_store_implements_store_trait() {
        fn assert_store<T: Store>(_s: &T) {}
        assert_store(&open());
    }

    #[test]
    fn test_create_flow_persists() {
        let mut store = open();
        let id = add(&mut store, "Launch", "2030-01-01T09:00");

        assert_eq!(store.state().dialog, DialogState::None);
        assert_eq!(store.state().timers.len(), 1);

        let persisted = load_timers(store.storage());
        assert_eq!(persisted.timers.len(), 1);
        assert_eq!(persisted.timers[0].id, id);
        assert_eq!(persisted.timers[0].title, "Launch");
    }

    #[test]
    fn test_incomplete_submit_keeps_form_open() {
        let mut store = open();
        store.dispatch(Command::OpenCreateForm).unwrap();
        store
            .dispatch(Command::UpdateDraft {
                title: Some("   ".to_string()),
                date: Some("2030-01-01T09:00".to_string()),
            })
            .unwrap();

        let events = store.dispatch(Command::SubmitForm).unwrap();
        assert!(events.is_empty());
        assert!(store.state().dialog.is_form());
        assert!(store.state().timers.is_empty());
        assert!(store.storage().get(TIMERS_KEY).unwrap().is_none());
    }

    #[test]
    fn test_invalid_date_reports_on_form() {
        let mut store = open();
        store.dispatch(Command::OpenCreateForm).unwrap();
        store
            .dispatch(Command::UpdateDraft {
                title: Some("x".to_string()),
                date: Some("tomorrow".to_string()),
            })
            .unwrap();

        let err = store.dispatch(Command::SubmitForm).unwrap_err();
        assert!(matches!(err, DispatchError::Timer(_)));
        match &store.state().dialog {
            DialogState::Form { error, .. } => assert!(error.is_some()),
            other => panic!("form should stay open, got {:?}", other),
        }
    }

    #[test]
    fn test_edit_reports_date_change() {
        let mut store = open();
        let id = add(&mut store, "Launch", "2030-01-01T09:00");

        store.dispatch(Command::OpenEditForm { id }).unwrap();
        assert_eq!(store.state().dialog.draft().unwrap().title, "Launch");

        store
            .dispatch(Command::UpdateDraft {
                title: Some("Renamed".to_string()),
                date: None,
            })
            .unwrap();
        let events = store.dispatch(Command::SubmitForm).unwrap();
        assert_eq!(
            events,
            vec![
                Event::TimerUpdated {
                    id,
                    date_changed: false
                },
                Event::FormClosed
            ]
        );

        store.dispatch(Command::OpenEditForm { id }).unwrap();
        store
            .dispatch(Command::UpdateDraft {
                title: None,
                date: Some("2031-01-01T09:00".to_string()),
            })
            .unwrap();
        let events = store.dispatch(Command::SubmitForm).unwrap();
        assert_eq!(
            events[0],
            Event::TimerUpdated {
                id,
                date_changed: true
            }
        );
    }

    #[test]
    fn test_cancel_delete_keeps_timer() {
        let mut store = open();
        let id = add(&mut store, "Launch", "2030-01-01T09:00");

        let events = store.dispatch(Command::RequestDelete { id }).unwrap();
        assert_eq!(events, vec![Event::DeleteRequested { id }]);
        assert_eq!(store.state().timers.len(), 1);

        let events = store.dispatch(Command::CancelDelete).unwrap();
        assert_eq!(events, vec![Event::DeleteCancelled { id }]);
        assert_eq!(store.state().timers.len(), 1);
        assert_eq!(store.state().dialog, DialogState::None);
    }

    #[test]
    fn test_confirm_delete_clears_fullscreen() {
        let mut store = open();
        let id = add(&mut store, "Launch", "2030-01-01T09:00");
        store.dispatch(Command::OpenFullscreen { id }).unwrap();

        store.dispatch(Command::RequestDelete { id }).unwrap();
        let events = store.dispatch(Command::ConfirmDelete).unwrap();

        assert_eq!(
            events,
            vec![Event::TimerDeleted { id }, Event::FullscreenClosed]
        );
        assert!(store.state().fullscreen.is_none());
        assert!(load_timers(store.storage()).timers.is_empty());
    }

    #[test]
    fn test_confirm_without_request_fails() {
        let mut store = open();
        assert!(matches!(
            store.dispatch(Command::ConfirmDelete),
            Err(DispatchError::NoPendingDelete)
        ));
    }

    #[test]
    fn test_unknown_ids_rejected() {
        let mut store = open();
        for cmd in [
            Command::OpenEditForm { id: TimerId(1) },
            Command::RequestDelete { id: TimerId(1) },
            Command::OpenFullscreen { id: TimerId(1) },
        ] {
            let err = store.dispatch(cmd).unwrap_err();
            assert_eq!(
                crate::errors::ChronosError::error_code(&err),
                "TIMER_NOT_FOUND"
            );
        }
        assert_eq!(store.state().dialog, DialogState::None);
    }

    #[test]
    fn test_theme_and_skin_persist() {
        let mut store = open();
        assert_eq!(store.state().preferences.theme, Theme::Dark);

        let events = store.dispatch(Command::ToggleTheme).unwrap();
        assert_eq!(
            events,
            vec![Event::ThemeChanged {
                theme: Theme::Light
            }]
        );
        store
            .dispatch(Command::SetSkin {
                skin: SkinKind::Casio,
            })
            .unwrap();

        assert_eq!(
            store.storage().get(THEME_KEY).unwrap().as_deref(),
            Some("light")
        );
        assert_eq!(
            store.storage().get(SKIN_KEY).unwrap().as_deref(),
            Some("casio")
        );
        assert_eq!(store.state().preferences.skin, SkinKind::Casio);
    }

    #[test]
    fn test_failed_theme_save_leaves_state() {
        struct ReadOnlyStore;
        impl KeyValueStore for ReadOnlyStore {
            fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
                Ok(None)
            }
            fn set(&mut self, key: &str, _value: &str) -> Result<(), StorageError> {
                Err(StorageError::WriteFailed {
                    key: key.to_string(),
                    source: std::io::Error::other("read-only"),
                })
            }
            fn remove(&mut self, _key: &str) -> Result<(), StorageError> {
                Ok(())
            }
        }

        let mut store = CoreStore::open(ReadOnlyStore, &DisplayConfig::default());
        let before = store.state().preferences.theme;
        assert!(store.dispatch(Command::ToggleTheme).is_err());
        assert_eq!(store.state().preferences.theme, before);
    }

    #[test]
    fn test_reopen_restores_state() {
        let mut store = open();
        add(&mut store, "One", "2030-01-01T09:00");
        store
            .dispatch(Command::SetSkin {
                skin: SkinKind::Nixie,
            })
            .unwrap();

        let storage = store.storage().clone();
        let reopened = CoreStore::open(storage, &DisplayConfig::default());
        assert_eq!(reopened.state().timers.len(), 1);
        assert_eq!(reopened.state().preferences.skin, SkinKind::Nixie);
    }
}
