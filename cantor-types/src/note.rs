use serde::{Deserialize, Serialize};

use crate::NoteId;

/// A single sung note. Timing is in pulses (ticks), pitch is a MIDI-style key number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub lyric: String,
    pub pulse_offset: u32,
    pub pulse_length: u32,
    pub key_number: i32,
}

impl Note {
    pub fn new(
        id: NoteId,
        lyric: impl Into<String>,
        pulse_offset: u32,
        pulse_length: u32,
        key_number: i32,
    ) -> Self {
        Self {
            id,
            lyric: lyric.into(),
            pulse_offset,
            pulse_length,
            key_number,
        }
    }
}

/// Score content exchanged with importers and exporters.
///
/// Exported scores list notes in ordered-view order; imported scores list
/// them in file order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub tempo: f32,
    pub notes: Vec<Note>,
}

impl Score {
    pub fn new(tempo: f32) -> Self {
        Self {
            tempo,
            notes: Vec::new(),
        }
    }

    pub fn with_notes(tempo: f32, notes: Vec<Note>) -> Self {
        Self { tempo, notes }
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

