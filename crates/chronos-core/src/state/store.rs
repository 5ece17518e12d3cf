use super::events::Event;
use super::types::Command;

/// Trait for dispatching user commands.
///
/// Decouples command definitions from their execution, so front ends and
/// tests drive the same state transitions.
///
/// # Semantics
///
/// - **Ordering**: Commands execute in the order received.
/// - **Error handling**: Implementations define their own error type. A
///   failed command leaves state unchanged.
/// - **Events**: On success, dispatch returns the events describing what
///   changed, in order. An empty vector means the command was a no-op
///   (for example submitting an incomplete form).
pub trait Store {
    type Error;
    fn dispatch(&mut self, cmd: Command) -> Result<Vec<Event>, Self::Error>;
}
