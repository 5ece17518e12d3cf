use serde::{Deserialize, Serialize};

use crate::display::{SkinKind, Theme};
use crate::timers::TimerId;

/// All user actions that can be dispatched through the store.
///
/// Commands use owned types so they can be serialized, logged, and sent
/// across boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Open an empty form for a new timer.
    OpenCreateForm,
    /// Open the form prefilled with an existing timer.
    OpenEditForm { id: TimerId },
    /// Replace form fields. `None` leaves a field as is.
    UpdateDraft {
        title: Option<String>,
        date: Option<String>,
    },
    /// Save the form. An incomplete form is ignored and stays open.
    SubmitForm,
    CancelForm,
    /// Ask for confirmation before deleting. Nothing is deleted yet.
    RequestDelete { id: TimerId },
    /// Delete the timer awaiting confirmation.
    ConfirmDelete,
    CancelDelete,
    OpenFullscreen { id: TimerId },
    CloseFullscreen,
    ToggleTheme,
    SetTheme { theme: Theme },
    SetSkin { skin: SkinKind },
}
