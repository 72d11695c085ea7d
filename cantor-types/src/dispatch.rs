//! Dispatch abstraction over session implementations.

use crate::{Action, DispatchResult};

/// Trait for dispatching actions to a session.
///
/// Front ends program against this so they do not depend on how the
/// session is hosted.
pub trait Dispatcher {
    /// Dispatch an action and return the result.
    fn dispatch(&mut self, action: Action) -> DispatchResult;
}
