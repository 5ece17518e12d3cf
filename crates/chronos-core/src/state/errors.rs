use crate::errors::ChronosError;
use crate::storage::StorageError;
use crate::timers::TimerError;

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error(transparent)]
    Timer(#[from] TimerError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("No form is open")]
    NoFormOpen,
    #[error("No delete is awaiting confirmation")]
    NoPendingDelete,
}

impl ChronosError for DispatchError {
    fn error_code(&self) -> &'static str {
        match self {
            DispatchError::Timer(e) => e.error_code(),
            DispatchError::Storage(e) => e.error_code(),
            DispatchError::NoFormOpen => "DISPATCH_NO_FORM_OPEN",
            DispatchError::NoPendingDelete => "DISPATCH_NO_PENDING_DELETE",
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            DispatchError::Timer(e) => e.is_user_error(),
            DispatchError::Storage(e) => e.is_user_error(),
            DispatchError::NoFormOpen | DispatchError::NoPendingDelete => false,
        }
    }
}
