use serde::{Deserialize, Serialize};

use crate::display::{SkinKind, Theme};
use crate::timers::TimerId;

/// State changes resulting from a dispatched command.
///
/// Each variant describes _what happened_. Failures use the `Result` error
/// channel, not the event stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// The form opened, for a new timer when `editing` is `None`.
    FormOpened { editing: Option<TimerId> },
    DraftUpdated,
    FormClosed,
    TimerCreated { id: TimerId },
    /// A timer was saved. Views retarget when `date_changed` is set.
    TimerUpdated { id: TimerId, date_changed: bool },
    DeleteRequested { id: TimerId },
    DeleteCancelled { id: TimerId },
    TimerDeleted { id: TimerId },
    FullscreenOpened { id: TimerId },
    FullscreenClosed,
    ThemeChanged { theme: Theme },
    SkinChanged { skin: SkinKind },
}
