use thiserror::Error;

use cantor_types::{EditError, NoteId, PlaybackState};

/// Session operation failures. None are fatal: a failed operation leaves the
/// session exactly as it was before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The event is malformed (empty changeset, or out-of-range offsets)
    #[error("invalid event: {0}")]
    InvalidEvent(EditError),

    /// The event targets a note that is not in the store
    #[error("event references unknown note {id}")]
    UnknownNoteReference { id: NoteId },

    #[error("could not get any notes from {source_name}")]
    EmptyImport { source_name: String },

    #[error("refusing to set empty {field}")]
    EmptyFieldRejected { field: &'static str },

    #[error("saving a session with no history")]
    SaveWithoutHistory,

    #[error("nothing to play")]
    NoPlaybackTarget,

    /// `NoAudio` and `NeedsSynth` follow from content, not engine reports
    #[error("playback state {state:?} cannot be reported by an engine")]
    NotEngineReported { state: PlaybackState },

    #[error("nothing to undo")]
    NothingToUndo,

    #[error("nothing to redo")]
    NothingToRedo,
}

impl From<EditError> for SessionError {
    fn from(err: EditError) -> Self {
        match err {
            EditError::UnknownNote { id } => Self::UnknownNoteReference { id },
            other => Self::InvalidEvent(other),
        }
    }
}
