use thiserror::Error;

use crate::{EventKind, NoteId};

/// Why an event could not be applied to a note store.
///
/// A failed application leaves the store exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("{kind} event has an empty changeset")]
    EmptyChangeset { kind: EventKind },

    #[error("note {id} does not exist")]
    UnknownNote { id: NoteId },

    #[error("note {id} already exists")]
    DuplicateNote { id: NoteId },

    #[error("note {id} would leave the valid pulse range")]
    OffsetOutOfRange { id: NoteId },
}
