use cantor_types::reduce::apply_event;
use cantor_types::{Direction, NoteEvent, NoteStore};

use crate::SessionError;

/// A committed event plus the save-point flag only `History` may touch.
#[derive(Debug, Clone)]
struct HistoryEntry {
    event: NoteEvent,
    save_point: bool,
}

/// Derived history status, recomputed on every query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryStatus {
    pub can_undo: bool,
    pub can_redo: bool,
    pub modified: bool,
}

/// Two-stack undo/redo history.
///
/// The note store is always the result of applying every `past` event
/// forward to an empty store. Undo and redo re-run stored events through
/// [`apply_event`] with the direction flipped, never a separate path.
#[derive(Debug, Default)]
pub struct History {
    past: Vec<HistoryEntry>,
    future: Vec<HistoryEntry>,
    /// A save happened at some point, even if every entry was undone since.
    had_save_point: bool,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an event that has already been applied. Clears redo history.
    pub fn commit(&mut self, event: NoteEvent) {
        self.past.push(HistoryEntry {
            event,
            save_point: false,
        });
        self.future.clear();
    }

    /// Revert the newest event. Returns it so callers can republish it.
    pub fn undo(&mut self, store: &mut NoteStore) -> Result<&NoteEvent, SessionError> {
        let entry = self.past.pop().ok_or(SessionError::NothingToUndo)?;
        if let Err(e) = apply_event(&entry.event, Direction::Backward, store) {
            log::error!(target: "history", "undo of {} event failed: {}", entry.event.kind(), e);
            self.past.push(entry);
            return Err(e.into());
        }
        self.future.push(entry);
        Ok(&self.future[self.future.len() - 1].event)
    }

    /// Re-apply the most recently undone event.
    pub fn redo(&mut self, store: &mut NoteStore) -> Result<&NoteEvent, SessionError> {
        let entry = self.future.pop().ok_or(SessionError::NothingToRedo)?;
        if let Err(e) = apply_event(&entry.event, Direction::Forward, store) {
            log::error!(target: "history", "redo of {} event failed: {}", entry.event.kind(), e);
            self.future.push(entry);
            return Err(e.into());
        }
        self.past.push(entry);
        Ok(&self.past[self.past.len() - 1].event)
    }

    /// Make the newest event the only save point.
    pub fn mark_saved(&mut self) -> Result<(), SessionError> {
        if self.past.is_empty() {
            return Err(SessionError::SaveWithoutHistory);
        }
        for entry in self.past.iter_mut().chain(self.future.iter_mut()) {
            entry.save_point = false;
        }
        if let Some(top) = self.past.last_mut() {
            top.save_point = true;
        }
        self.had_save_point = true;
        Ok(())
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Unsaved changes exist unless the newest event is the save point. With
    /// nothing left to undo, a once-saved document counts as modified (it
    /// was saved with content that has since been undone).
    pub fn modified(&self) -> bool {
        match self.past.last() {
            Some(top) => !top.save_point,
            None => self.had_save_point,
        }
    }

    pub fn status(&self) -> HistoryStatus {
        HistoryStatus {
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
            modified: self.modified(),
        }
    }

    /// Forget everything, including whether a save ever happened.
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
        self.had_save_point = false;
    }
}
