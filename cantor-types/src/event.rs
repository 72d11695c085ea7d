//! Reversible edit events.
//!
//! Every change record carries the data needed to run in both directions,
//! so undo and redo replay the same event through the same reducer with the
//! direction flipped.

use serde::{Deserialize, Serialize};

use crate::{Note, NoteId};

/// Requested application direction. Undo replays an event `Backward`,
/// submit and redo replay it `Forward`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Forward,
    Backward,
}

/// A complete note to insert (or, run backward, to remove by id).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteAddition {
    pub id: NoteId,
    pub lyric: String,
    pub pulse_offset: u32,
    pub pulse_length: u32,
    pub key_number: i32,
}

impl NoteAddition {
    pub fn to_note(&self) -> Note {
        Note::new(
            self.id,
            self.lyric.clone(),
            self.pulse_offset,
            self.pulse_length,
            self.key_number,
        )
    }
}

impl From<&Note> for NoteAddition {
    fn from(note: &Note) -> Self {
        Self {
            id: note.id,
            lyric: note.lyric.clone(),
            pulse_offset: note.pulse_offset,
            pulse_length: note.pulse_length,
            key_number: note.key_number,
        }
    }
}

/// New and previous placement of a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteResize {
    pub id: NoteId,
    pub offset: u32,
    pub length: u32,
    pub prev_offset: u32,
    pub prev_length: u32,
}

/// Relative time shift plus absolute pitch change.
///
/// The delta is relative, so a move must be applied exactly once per direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteMove {
    pub id: NoteId,
    pub pulse_offset_delta: i64,
    pub key_number: i32,
    pub prev_key_number: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteRetext {
    pub id: NoteId,
    pub text: String,
    pub prev_text: String,
}

/// Reserved for per-note effect data. Carries only the target id for now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteEffect {
    pub id: NoteId,
}

/// The changeset of an event, one variant per edit kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoteChanges {
    /// `delete` inverts the addition: a deletion is an addition applied backward.
    Add {
        notes: Vec<NoteAddition>,
        delete: bool,
    },
    Resize(Vec<NoteResize>),
    Move(Vec<NoteMove>),
    Retext(Vec<NoteRetext>),
    Effect(Vec<NoteEffect>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    Add,
    Resize,
    Move,
    Retext,
    Effect,
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Add => "add",
            Self::Resize => "resize",
            Self::Move => "move",
            Self::Retext => "retext",
            Self::Effect => "effect",
        };
        f.write_str(name)
    }
}

/// A reversible edit as constructed by the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteEvent {
    pub changes: NoteChanges,
    /// Which direction is natural for this event. Freshly created events are forward.
    pub forward: bool,
}

impl NoteEvent {
    pub fn new(changes: NoteChanges) -> Self {
        Self {
            changes,
            forward: true,
        }
    }

    pub fn add(notes: Vec<NoteAddition>) -> Self {
        Self::new(NoteChanges::Add {
            notes,
            delete: false,
        })
    }

    /// Deletion of the listed notes, expressed as an inverted addition so that
    /// undo can restore them from the same records.
    pub fn delete(notes: Vec<NoteAddition>) -> Self {
        Self::new(NoteChanges::Add {
            notes,
            delete: true,
        })
    }

    pub fn resize(changes: Vec<NoteResize>) -> Self {
        Self::new(NoteChanges::Resize(changes))
    }

    pub fn shift(changes: Vec<NoteMove>) -> Self {
        Self::new(NoteChanges::Move(changes))
    }

    pub fn retext(changes: Vec<NoteRetext>) -> Self {
        Self::new(NoteChanges::Retext(changes))
    }

    pub fn effect(changes: Vec<NoteEffect>) -> Self {
        Self::new(NoteChanges::Effect(changes))
    }

    pub fn kind(&self) -> EventKind {
        match &self.changes {
            NoteChanges::Add { .. } => EventKind::Add,
            NoteChanges::Resize(_) => EventKind::Resize,
            NoteChanges::Move(_) => EventKind::Move,
            NoteChanges::Retext(_) => EventKind::Retext,
            NoteChanges::Effect(_) => EventKind::Effect,
        }
    }

    pub fn is_delete_event(&self) -> bool {
        matches!(self.changes, NoteChanges::Add { delete: true, .. })
    }

    /// Number of change records in the changeset.
    pub fn len(&self) -> usize {
        match &self.changes {
            NoteChanges::Add { notes, .. } => notes.len(),
            NoteChanges::Resize(c) => c.len(),
            NoteChanges::Move(c) => c.len(),
            NoteChanges::Retext(c) => c.len(),
            NoteChanges::Effect(c) => c.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the store mutation runs in its "new values" direction.
    ///
    /// Combines the stored `forward` flag with the requested direction, and
    /// for additions also with the `delete` flag: an undone deletion adds,
    /// an undone addition removes.
    pub fn effective_forward(&self, direction: Direction) -> bool {
        let forward = self.forward ^ (direction == Direction::Backward);
        forward ^ self.is_delete_event()
    }
}
