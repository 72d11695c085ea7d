pub mod document;
pub mod playback;
pub mod undo;

pub use document::{DocumentMeta, ExportedDocument};
pub use playback::Playback;
pub use undo::{History, HistoryStatus};

use crossbeam_channel::Receiver;

use cantor_types::reduce::apply_event;
use cantor_types::{
    AudioRequest, Direction, NoteAddition, NoteEvent, NoteId, NoteStore, PlaybackState, Score,
};

use crate::audio::{AudioHandle, AudioSource, EngineLink};
use crate::codec::{split_lines, DocumentCodec};
use crate::config::Config;
use crate::notify::{Notifier, SessionEvent};
use crate::SessionError;

/// One open document and everything derived from it.
///
/// All mutation goes through `&mut self`, so an edit and a playback-state
/// update can never interleave. Engine threads report state through the
/// status channel, which is applied by [`Session::drain_audio_feedback`].
pub struct Session {
    notes: NoteStore,
    history: History,
    document: DocumentMeta,
    playback: Playback,
    audio: AudioHandle,
    notifier: Notifier,
    /// History status as last published to observers
    published: HistoryStatus,
    codec: Box<dyn DocumentCodec>,
}

impl Session {
    pub fn new(config: &Config, codec: Box<dyn DocumentCodec>) -> Self {
        let history = History::new();
        Self {
            notes: NoteStore::new(),
            published: history.status(),
            history,
            document: DocumentMeta::new(config.default_doc_name(), config.tempo()),
            playback: Playback::new(),
            audio: AudioHandle::new(),
            notifier: Notifier::new(),
            codec,
        }
    }

    pub fn subscribe(&mut self) -> Receiver<SessionEvent> {
        self.notifier.subscribe()
    }

    pub fn notes(&self) -> &NoteStore {
        &self.notes
    }

    pub fn audio(&self) -> &AudioHandle {
        &self.audio
    }

    pub fn document(&self) -> &DocumentMeta {
        &self.document
    }

    pub fn doc_name(&self) -> &str {
        self.document.name()
    }

    pub fn file_path(&self) -> Option<&str> {
        self.document.file_path()
    }

    pub fn tempo(&self) -> f32 {
        self.document.tempo
    }

    pub fn playback_state(&self) -> PlaybackState {
        self.playback.state()
    }

    pub fn status(&self) -> HistoryStatus {
        self.history.status()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn modified(&self) -> bool {
        self.history.modified()
    }

    /// A fresh id for a note the UI is about to add. None once ids are
    /// exhausted.
    pub fn next_note_id(&self) -> Option<NoteId> {
        self.notes.next_id()
    }

    // ------------------------------------------------------------------
    // Document load / export
    // ------------------------------------------------------------------

    /// Replace the session's content with a parsed score.
    ///
    /// The loaded notes become the first history entry (so the load itself
    /// can be undone) and that entry is the save point. If the codec finds
    /// no notes the session is left untouched.
    pub fn load_document(&mut self, file_path: &str, lines: &[String]) -> Result<(), SessionError> {
        if file_path.is_empty() {
            log::error!(target: "session", "refusing to load a document with an empty file path");
            return Err(SessionError::EmptyFieldRejected { field: "file path" });
        }

        let score = self.codec.parse_document(lines);
        if score.is_empty() {
            log::error!(target: "session", "could not get any notes from {}", file_path);
            return Err(SessionError::EmptyImport {
                source_name: file_path.to_string(),
            });
        }

        let event = load_event(&score);
        let mut notes = NoteStore::new();
        apply_event(&event, Direction::Forward, &mut notes).map_err(|e| {
            log::error!(target: "session", "loaded score from {} is unusable: {}", file_path, e);
            SessionError::from(e)
        })?;

        self.history.clear();
        self.notes = notes;
        self.history.commit(event.clone());
        self.history.mark_saved()?;
        self.document.set_file_path(file_path)?;
        self.document.tempo = score.tempo;
        log::info!(target: "session", "loaded {} notes from {}", self.notes.len(), file_path);

        self.notifier.publish(SessionEvent::DocumentReloaded);
        self.notifier.publish(SessionEvent::EventApplied {
            event,
            direction: Direction::Forward,
        });
        self.stack_changed();
        Ok(())
    }

    /// [`Session::load_document`] for raw file contents.
    pub fn load_document_bytes(&mut self, file_path: &str, bytes: &[u8]) -> Result<(), SessionError> {
        self.load_document(file_path, &split_lines(bytes))
    }

    /// Notes in ordered-view order with the current document metadata.
    pub fn exported_document(&self) -> ExportedDocument {
        ExportedDocument {
            name: self.document.name().to_string(),
            file_path: self.document.file_path().map(str::to_string),
            score: self.exported_score(),
        }
    }

    fn exported_score(&self) -> Score {
        Score::with_notes(self.document.tempo, self.notes.ordered())
    }

    pub fn document_lines(&self) -> Vec<String> {
        self.codec.serialize_document(&self.exported_score())
    }

    pub fn document_bytes(&self) -> Vec<u8> {
        self.codec.serialize_document_bytes(&self.exported_score())
    }

    pub fn set_doc_name(&mut self, name: &str) -> Result<(), SessionError> {
        let result = self.document.set_name(name);
        if let Err(e) = &result {
            log::error!(target: "session", "{}, keeping {:?}", e, self.document.name());
        }
        result
    }

    pub fn set_file_path(&mut self, path: &str) -> Result<(), SessionError> {
        let result = self.document.set_file_path(path);
        if let Err(e) = &result {
            log::error!(target: "session", "{}, keeping {:?}", e, self.document.file_path());
        }
        result
    }

    // ------------------------------------------------------------------
    // Edits and history
    // ------------------------------------------------------------------

    /// Apply a user edit and record it. The session takes ownership of the
    /// event whether or not it is accepted.
    pub fn submit_user_event(&mut self, event: NoteEvent) -> Result<(), SessionError> {
        if let Err(e) = apply_event(&event, Direction::Forward, &mut self.notes) {
            log::error!(target: "session", "rejected {} event: {}", event.kind(), e);
            return Err(e.into());
        }
        log::debug!(target: "session", "applied {} event ({} changes)", event.kind(), event.len());
        self.history.commit(event.clone());
        self.notifier.publish(SessionEvent::EventApplied {
            event,
            direction: Direction::Forward,
        });
        self.stack_changed();
        Ok(())
    }

    pub fn undo(&mut self) -> Result<(), SessionError> {
        let event = match self.history.undo(&mut self.notes) {
            Ok(event) => event.clone(),
            Err(e) => {
                log::error!(target: "session", "undo failed: {}", e);
                return Err(e);
            }
        };
        self.notifier.publish(SessionEvent::EventApplied {
            event,
            direction: Direction::Backward,
        });
        self.stack_changed();
        Ok(())
    }

    pub fn redo(&mut self) -> Result<(), SessionError> {
        let event = match self.history.redo(&mut self.notes) {
            Ok(event) => event.clone(),
            Err(e) => {
                log::error!(target: "session", "redo failed: {}", e);
                return Err(e);
            }
        };
        self.notifier.publish(SessionEvent::EventApplied {
            event,
            direction: Direction::Forward,
        });
        self.stack_changed();
        Ok(())
    }

    /// Record that the current content has been written out.
    pub fn mark_saved(&mut self) -> Result<(), SessionError> {
        if let Err(e) = self.history.mark_saved() {
            log::error!(target: "session", "{}", e);
            return Err(e);
        }
        self.publish_status();
        Ok(())
    }

    /// Drop all undo/redo history. Note content is kept.
    pub fn clear_history(&mut self) {
        self.history.clear();
        self.stack_changed();
    }

    fn stack_changed(&mut self) {
        self.publish_status();
        self.content_changed();
    }

    /// Publish each history flag that differs from what observers last saw.
    fn publish_status(&mut self) {
        let status = self.history.status();
        let last = std::mem::replace(&mut self.published, status);
        if status.can_undo != last.can_undo {
            self.notifier.publish(SessionEvent::UndoAvailable(status.can_undo));
        }
        if status.can_redo != last.can_redo {
            self.notifier.publish(SessionEvent::RedoAvailable(status.can_redo));
        }
        if status.modified != last.modified {
            self.notifier.publish(SessionEvent::ModifiedChanged(status.modified));
        }
    }

    fn content_changed(&mut self) {
        let target = Playback::content_target(self.notes.is_empty(), self.audio.has_background());
        self.transition(target);
    }

    // ------------------------------------------------------------------
    // Audio sources and playback
    // ------------------------------------------------------------------

    pub fn set_synthesized_vocal(&mut self, source: AudioSource) {
        self.audio.replace_vocal(source);
        self.notifier.publish(SessionEvent::VocalChanged);
    }

    pub fn set_background_audio(&mut self, source: AudioSource) {
        self.audio.replace_background(source);
        self.notifier.publish(SessionEvent::BackgroundChanged);
    }

    /// Release the background source and re-derive playback readiness.
    pub fn clear_background_audio(&mut self) {
        if self.audio.clear_background() {
            self.notifier.publish(SessionEvent::BackgroundChanged);
        }
        self.content_changed();
    }

    /// The vocal source's content changed in place.
    pub fn vocal_modified(&mut self) {
        self.notifier.publish(SessionEvent::VocalChanged);
    }

    /// The background source's content changed in place.
    pub fn background_modified(&mut self) {
        self.notifier.publish(SessionEvent::BackgroundChanged);
    }

    /// Hand a synthesis/playback engine its channel ends. Replaces any
    /// engine connected before.
    pub fn connect_engine(&mut self) -> EngineLink {
        self.audio.connect_engine()
    }

    /// Record an engine-reported playback state. Re-entering the current
    /// state is silent. `NoAudio` and `NeedsSynth` are rejected: they are
    /// derived from content.
    pub fn set_playback_state(&mut self, state: PlaybackState) -> Result<(), SessionError> {
        if !state.is_engine_reported() {
            log::error!(target: "playback", "ignoring engine report of derived state {:?}", state);
            return Err(SessionError::NotEngineReported { state });
        }
        self.transition(state);
        Ok(())
    }

    fn transition(&mut self, state: PlaybackState) {
        if self.playback.transition(state) {
            self.notifier.publish(SessionEvent::PlaybackStateChanged(state));
        }
    }

    /// Apply every status report the engine queued since the last drain.
    /// Returns how many were applied; derived states are skipped.
    pub fn drain_audio_feedback(&mut self) -> usize {
        let mut applied = 0;
        for state in self.audio.drain_status() {
            if self.set_playback_state(state).is_ok() {
                applied += 1;
            }
        }
        applied
    }

    /// Pause, start or synthesize depending on the current playback state.
    pub fn request_toggle_playback(&mut self) -> Result<AudioRequest, SessionError> {
        match self.playback.toggle_request() {
            Ok(request) => {
                self.audio.send(request);
                Ok(request)
            }
            Err(e) => {
                log::error!(
                    target: "playback",
                    "asked to start playback when there is nothing to play ({:?})",
                    self.playback.state()
                );
                Err(e)
            }
        }
    }

    pub fn request_stop(&mut self) {
        self.audio.send(AudioRequest::Stop);
    }

    pub fn request_reset(&mut self) {
        self.audio.send(AudioRequest::Reset);
    }

    pub fn request_repeat(&mut self) {
        self.audio.send(AudioRequest::Repeat);
    }
}

/// One addition covering the whole score, with ids `1..=n` in file order.
fn load_event(score: &Score) -> NoteEvent {
    let notes = score
        .notes
        .iter()
        .zip(1u64..)
        .map(|(note, id)| NoteAddition {
            id: NoteId::new(id),
            ..NoteAddition::from(note)
        })
        .collect();
    NoteEvent::add(notes)
}
