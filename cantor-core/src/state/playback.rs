//! Playback-readiness state machine.

use cantor_types::{AudioRequest, PlaybackState};

use crate::SessionError;

#[derive(Debug, Default)]
pub struct Playback {
    state: PlaybackState,
}

impl Playback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// State after a content change: nothing to synthesize or play back
    /// means `NoAudio`, anything else needs a fresh synthesis.
    pub fn content_target(notes_empty: bool, has_background: bool) -> PlaybackState {
        if notes_empty && !has_background {
            PlaybackState::NoAudio
        } else {
            PlaybackState::NeedsSynth
        }
    }

    /// Move to `next`. Returns false when already there.
    pub fn transition(&mut self, next: PlaybackState) -> bool {
        if self.state == next {
            return false;
        }
        log::debug!(target: "playback", "{:?} -> {:?}", self.state, next);
        self.state = next;
        true
    }

    /// The engine request a play/pause toggle should issue in the current state.
    pub fn toggle_request(&self) -> Result<AudioRequest, SessionError> {
        match self.state {
            PlaybackState::Playing | PlaybackState::Repeating => Ok(AudioRequest::Pause),
            PlaybackState::Paused | PlaybackState::Stopped => Ok(AudioRequest::Start),
            PlaybackState::NeedsSynth => Ok(AudioRequest::Synthesize),
            PlaybackState::NoAudio => Err(SessionError::NoPlaybackTarget),
        }
    }
}
