//! # cantor-types
//!
//! Shared type definitions for the Cantor vocal score editor.
//! This crate holds the note model, the reversible edit events, playback
//! state, and the pure reducers that apply edits to a [`NoteStore`].
//! It has no knowledge of history, audio engines, or observers; those live
//! in cantor-core.

pub mod action;
mod dispatch;
mod error;
pub mod event;
mod note;
mod playback;
pub mod reduce;
pub mod state;

pub use action::{Action, DispatchResult};
pub use dispatch::Dispatcher;
pub use error::EditError;
pub use event::*;
pub use note::{Note, Score};
pub use playback::{AudioRequest, PlaybackState};
pub use state::NoteStore;

/// Stable identifier for a note, unique within a session.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct NoteId(u64);

impl NoteId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
    pub fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for NoteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
