//! LocalDispatcher: Dispatcher implementation for an in-process session.

use cantor_types::{Action, DispatchResult, Dispatcher};

use crate::state::Session;

use super::dispatch_action;

/// Dispatches actions directly onto a borrowed session.
pub struct LocalDispatcher<'a> {
    pub session: &'a mut Session,
}

impl<'a> LocalDispatcher<'a> {
    pub fn new(session: &'a mut Session) -> Self {
        Self { session }
    }
}

impl<'a> Dispatcher for LocalDispatcher<'a> {
    fn dispatch(&mut self, action: Action) -> DispatchResult {
        dispatch_action(action, self.session)
    }
}
