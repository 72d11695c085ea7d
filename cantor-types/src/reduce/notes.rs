use std::collections::{HashMap, HashSet};

use crate::{EditError, NoteAddition, NoteId, NoteMove, NoteResize, NoteRetext, NoteStore};

/// Records in application order: as given going forward, reversed going
/// backward, so repeated ids unwind to their earliest previous value.
fn in_order<T>(changes: &[T], forward: bool) -> Box<dyn Iterator<Item = &T> + '_> {
    if forward {
        Box::new(changes.iter())
    } else {
        Box::new(changes.iter().rev())
    }
}

fn require(store: &NoteStore, id: NoteId) -> Result<(), EditError> {
    if store.contains(id) {
        Ok(())
    } else {
        Err(EditError::UnknownNote { id })
    }
}

/// Inserting requires every id to be absent; removing requires every id to
/// be present. Each id may appear once per changeset.
pub(super) fn reduce_add(
    notes: &[NoteAddition],
    forward: bool,
    store: &mut NoteStore,
) -> Result<(), EditError> {
    let mut seen = HashSet::with_capacity(notes.len());
    for change in notes {
        if !seen.insert(change.id) || (forward && store.contains(change.id)) {
            return Err(EditError::DuplicateNote { id: change.id });
        }
        if !forward {
            require(store, change.id)?;
        }
    }

    if forward {
        for change in notes {
            store.upsert(change.to_note());
        }
    } else {
        for change in notes {
            store.remove(change.id);
        }
    }
    Ok(())
}

pub(super) fn reduce_resize(
    changes: &[NoteResize],
    forward: bool,
    store: &mut NoteStore,
) -> Result<(), EditError> {
    for change in changes {
        require(store, change.id)?;
    }
    for change in in_order(changes, forward) {
        if let Some(note) = store.get_mut(change.id) {
            if forward {
                note.pulse_offset = change.offset;
                note.pulse_length = change.length;
            } else {
                note.pulse_offset = change.prev_offset;
                note.pulse_length = change.prev_length;
            }
        }
    }
    Ok(())
}

pub(super) fn reduce_move(
    changes: &[NoteMove],
    forward: bool,
    store: &mut NoteStore,
) -> Result<(), EditError> {
    // Offsets are relative, so stage the whole changeset before touching the store.
    let mut staged: HashMap<NoteId, (u32, i32)> = HashMap::new();
    for change in in_order(changes, forward) {
        let (offset, _) = match staged.get(&change.id) {
            Some(placed) => *placed,
            None => {
                let note = store
                    .get(change.id)
                    .ok_or(EditError::UnknownNote { id: change.id })?;
                (note.pulse_offset, note.key_number)
            }
        };
        let out_of_range = EditError::OffsetOutOfRange { id: change.id };
        let delta = if forward {
            change.pulse_offset_delta
        } else {
            change.pulse_offset_delta.checked_neg().ok_or(out_of_range.clone())?
        };
        let offset = i64::from(offset)
            .checked_add(delta)
            .and_then(|o| u32::try_from(o).ok())
            .ok_or(out_of_range)?;
        let key = if forward {
            change.key_number
        } else {
            change.prev_key_number
        };
        staged.insert(change.id, (offset, key));
    }

    for (id, (offset, key)) in staged {
        if let Some(note) = store.get_mut(id) {
            note.pulse_offset = offset;
            note.key_number = key;
        }
    }
    Ok(())
}

pub(super) fn reduce_retext(
    changes: &[NoteRetext],
    forward: bool,
    store: &mut NoteStore,
) -> Result<(), EditError> {
    for change in changes {
        require(store, change.id)?;
    }
    for change in in_order(changes, forward) {
        if let Some(note) = store.get_mut(change.id) {
            let text = if forward {
                &change.text
            } else {
                &change.prev_text
            };
            note.lyric.clone_from(text);
        }
    }
    Ok(())
}
