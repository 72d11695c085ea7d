//! UI-facing actions and the result of dispatching them.

use crate::{AudioRequest, NoteEvent, PlaybackState};

/// Everything a front end can ask of a session.
///
/// `Submit` takes the event by value: once dispatched, the caller no longer
/// holds it.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Apply a user edit and record it in history
    Submit(NoteEvent),
    Undo,
    Redo,
    /// Mark the current history position as saved
    MarkSaved,
    /// Pause, start or synthesize depending on playback state
    TogglePlayback,
    StopPlayback,
    ResetPlayback,
    RepeatPlayback,
    /// Engine-reported playback state
    AudioStatus(PlaybackState),
}

/// Result of dispatching an action, for the UI layer to act on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DispatchResult {
    /// Note content changed
    pub content_changed: bool,
    /// Request that was sent to the audio engine, if any
    pub audio_request: Option<AudioRequest>,
    /// Message describing why the action was rejected
    pub error: Option<String>,
}

impl DispatchResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_content_changed() -> Self {
        Self {
            content_changed: true,
            ..Self::default()
        }
    }

    pub fn with_request(request: AudioRequest) -> Self {
        Self {
            audio_request: Some(request),
            ..Self::default()
        }
    }

    pub fn with_error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}
