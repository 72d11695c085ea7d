use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{Note, NoteId};

/// Sparse id → note map. Iteration order is unspecified; use
/// [`NoteStore::ordered`] for anything that needs a stable sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteStore {
    notes: HashMap<NoteId, Note>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.get(&id)
    }

    pub(crate) fn get_mut(&mut self, id: NoteId) -> Option<&mut Note> {
        self.notes.get_mut(&id)
    }

    pub fn contains(&self, id: NoteId) -> bool {
        self.notes.contains_key(&id)
    }

    /// Insert a note, replacing any note with the same id.
    pub fn upsert(&mut self, note: Note) {
        self.notes.insert(note.id, note);
    }

    pub fn remove(&mut self, id: NoteId) -> Option<Note> {
        self.notes.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        self.notes.values()
    }

    /// All notes sorted by `pulse_offset`, ties broken by `id`.
    ///
    /// Rebuilt on every call; this is the canonical sequence for export.
    pub fn ordered(&self) -> Vec<Note> {
        let mut notes: Vec<Note> = self.iter().cloned().collect();
        notes.sort_by_key(|n| (n.pulse_offset, n.id));
        notes
    }

    /// One past the largest id in use (1 for an empty store). None once the
    /// largest id is `u64::MAX`.
    pub fn next_id(&self) -> Option<NoteId> {
        let max = self.notes.keys().map(|id| id.get()).max().unwrap_or(0);
        max.checked_add(1).map(NoteId::new)
    }
}
