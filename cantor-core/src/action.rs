//! Action types for the dispatch system.
//!
//! All action and event types live in cantor-types; this module re-exports
//! them so front ends can depend on cantor-core alone.

pub use cantor_types::{
    Action, AudioRequest, Direction, DispatchResult, EventKind, NoteAddition, NoteChanges,
    NoteEffect, NoteEvent, NoteMove, NoteResize, NoteRetext, PlaybackState,
};
