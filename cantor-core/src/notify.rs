//! Observer fan-out for session changes.

use crossbeam_channel::{Receiver, Sender};

use cantor_types::{Direction, NoteEvent, PlaybackState};

/// Notifications published by a session, in the order the changes happened.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// A document was loaded and replaced all note content
    DocumentReloaded,
    /// An event was applied to the note store and committed
    EventApplied {
        event: NoteEvent,
        direction: Direction,
    },
    /// Undo availability flipped
    UndoAvailable(bool),
    /// Redo availability flipped
    RedoAvailable(bool),
    /// The modified flag flipped
    ModifiedChanged(bool),
    PlaybackStateChanged(PlaybackState),
    VocalChanged,
    BackgroundChanged,
}

/// Subscriber list. Each observer gets its own unbounded channel; observers
/// whose receiver has been dropped are pruned on the next publish.
#[derive(Default)]
pub struct Notifier {
    subscribers: Vec<Sender<SessionEvent>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self) -> Receiver<SessionEvent> {
        let (tx, rx) = crossbeam_channel::unbounded();
        self.subscribers.push(tx);
        rx
    }

    pub fn publish(&mut self, event: SessionEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}
