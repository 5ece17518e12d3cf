//! chronos-core: Core library for the Chronos countdown dashboard
//!
//! Computes the calendar breakdown between now and each saved timer's
//! target, keeps mounted timers ticking, and renders them with one of three
//! skins. Used by the `chronos` CLI.
//!
//! # Main Entry Points
//!
//! - [`countdown`] - Years-to-seconds breakdown between two instants
//! - [`refresh`] - Per-timer tick sources and the dashboard board
//! - [`timers`] - Timer list, persistence and handler operations
//! - [`state`] - Command dispatch over the whole application state
//! - [`display`] - Skins, themes and frame rendering
//! - [`config`] - Configuration management

pub mod config;
pub mod countdown;
pub mod display;
pub mod errors;
pub mod events;
pub mod logging;
pub mod preferences;
pub mod refresh;
pub mod state;
pub mod storage;
pub mod timers;

// Re-export commonly used types at crate root for convenience
pub use config::ChronosConfig;
pub use countdown::{Breakdown, Countdown, Direction, Unit, compute_breakdown, compute_countdown};
pub use display::{Palette, SkinKind, Theme};
pub use preferences::Preferences;
pub use refresh::{Clock, Frame, SystemClock, TimerBoard, TimerView};
pub use state::{AppState, Command, CoreStore, DialogState, DispatchError, Event, Store};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
pub use timers::{Timer, TimerDraft, TimerError, TimerId, TimerList};

// Re-export handler modules as the primary API
pub use timers::handler as timer_ops;

// Re-export logging initialization
pub use logging::init_logging;
