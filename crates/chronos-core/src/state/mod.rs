//! Root controller: every user action goes through [`Store::dispatch`].

pub mod app;
pub mod dispatch;
pub mod errors;
pub mod events;
pub mod store;
pub mod types;

pub use app::{AppState, DialogState};
pub use dispatch::CoreStore;
pub use errors::DispatchError;
pub use events::Event;
pub use store::Store;
pub use types::Command;
