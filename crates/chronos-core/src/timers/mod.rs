pub mod errors;
pub mod handler;
pub mod manager;
pub mod persistence;
pub mod types;

// Re-export commonly used types at module level
pub use errors::TimerError;
pub use manager::TimerList;
pub use persistence::{TimersData, load_timers, save_timers};
pub use types::{Timer, TimerDraft, TimerId, parse_local_datetime, resolve_in, resolve_local};
