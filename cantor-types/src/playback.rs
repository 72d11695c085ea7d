//! Playback-readiness types shared with audio engines.

use serde::{Deserialize, Serialize};

/// Where the session is in the synthesize/play cycle.
///
/// `NoAudio` and `NeedsSynth` are derived from document content; the other
/// states are only ever reported by the playback engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlaybackState {
    #[default]
    NoAudio,
    NeedsSynth,
    Stopped,
    Playing,
    Paused,
    Repeating,
}

impl PlaybackState {
    /// States that only the playback engine may report.
    pub fn is_engine_reported(self) -> bool {
        matches!(
            self,
            Self::Stopped | Self::Playing | Self::Paused | Self::Repeating
        )
    }
}

/// One-way requests sent to the synthesis/playback engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioRequest {
    Start,
    Pause,
    Stop,
    Reset,
    Repeat,
    Synthesize,
}
