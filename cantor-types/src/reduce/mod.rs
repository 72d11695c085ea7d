//! Pure note-store reducers.
//!
//! [`apply_event`] is the single mutation path for note content. Submitting,
//! undoing and redoing an edit all call it; only the direction differs.
//!
//! Reducers mutate the `NoteStore` only. They do NOT:
//! - Record history or save points
//! - Notify observers
//! - Touch playback state

mod notes;

use crate::{Direction, EditError, NoteChanges, NoteEvent, NoteStore};

/// Apply `event` to `store` in the requested direction.
///
/// Either every change record is applied or none is: on error the store is
/// left untouched.
pub fn apply_event(
    event: &NoteEvent,
    direction: Direction,
    store: &mut NoteStore,
) -> Result<(), EditError> {
    if event.is_empty() {
        return Err(EditError::EmptyChangeset { kind: event.kind() });
    }

    let forward = event.effective_forward(direction);
    match &event.changes {
        NoteChanges::Add { notes, .. } => notes::reduce_add(notes, forward, store),
        NoteChanges::Resize(changes) => notes::reduce_resize(changes, forward, store),
        NoteChanges::Move(changes) => notes::reduce_move(changes, forward, store),
        NoteChanges::Retext(changes) => notes::reduce_retext(changes, forward, store),
        // Reserved: validated above, never mutates.
        NoteChanges::Effect(_) => Ok(()),
    }
}
