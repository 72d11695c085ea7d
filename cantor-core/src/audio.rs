//! Session-side view of the synthesis/playback engine.
//!
//! `AudioHandle` owns the two audio sources and the session's ends of the
//! engine channels: outbound [`AudioRequest`]s and inbound [`PlaybackState`]
//! reports. An engine receives the opposite ends once, as an [`EngineLink`],
//! and runs elsewhere. Until one is connected, requests are dropped.

use std::sync::atomic::{AtomicU64, Ordering};

use crossbeam_channel::{Receiver, Sender};

use cantor_types::{AudioRequest, PlaybackState};

static NEXT_SOURCE_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of an [`AudioSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AudioSourceId(u64);

impl AudioSourceId {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Decoded audio owned by exactly one holder. Not `Clone`: handing a source
/// to the session moves it, and replacing it drops the old one.
#[derive(Debug)]
pub struct AudioSource {
    id: AudioSourceId,
    name: String,
    sample_rate: u32,
    samples: Vec<f32>,
}

impl AudioSource {
    pub fn new(name: impl Into<String>, sample_rate: u32, samples: Vec<f32>) -> Self {
        Self {
            id: AudioSourceId(NEXT_SOURCE_ID.fetch_add(1, Ordering::Relaxed)),
            name: name.into(),
            sample_rate,
            samples,
        }
    }

    pub fn id(&self) -> AudioSourceId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }
}

/// Channel ends held by a synthesis/playback engine.
pub struct EngineLink {
    /// Requests issued by the session, oldest first
    pub requests: Receiver<AudioRequest>,
    /// Engine-reported playback states; clone freely across engine threads
    pub status: Sender<PlaybackState>,
}

#[derive(Default)]
pub struct AudioHandle {
    vocal: Option<AudioSource>,
    background: Option<AudioSource>,
    request_tx: Option<Sender<AudioRequest>>,
    status_rx: Option<Receiver<PlaybackState>>,
}

impl AudioHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open fresh request and status channels and return the engine's ends.
    /// A previously connected engine is disconnected and its unread status
    /// reports are discarded.
    pub fn connect_engine(&mut self) -> EngineLink {
        let (request_tx, requests) = crossbeam_channel::unbounded();
        let (status, status_rx) = crossbeam_channel::unbounded();
        if self.request_tx.replace(request_tx).is_some() {
            log::info!(target: "audio", "replacing connected engine");
        }
        self.status_rx = Some(status_rx);
        EngineLink { requests, status }
    }

    pub fn is_engine_connected(&self) -> bool {
        self.request_tx.is_some()
    }

    /// Fire-and-forget request to the engine. Dropped when no engine is
    /// connected; an engine that hung up is disconnected.
    pub(crate) fn send(&mut self, request: AudioRequest) {
        let Some(tx) = &self.request_tx else {
            log::warn!(target: "audio", "no engine connected, dropped request {:?}", request);
            return;
        };
        log::debug!(target: "audio", "request {:?}", request);
        if let Err(e) = tx.send(request) {
            log::warn!(target: "audio", "engine hung up, dropped request {:?}", e.0);
            self.request_tx = None;
        }
    }

    /// Pending engine status reports, oldest first.
    pub(crate) fn drain_status(&self) -> Vec<PlaybackState> {
        self.status_rx
            .as_ref()
            .map(|rx| rx.try_iter().collect())
            .unwrap_or_default()
    }

    pub fn vocal(&self) -> Option<&AudioSource> {
        self.vocal.as_ref()
    }

    pub fn background(&self) -> Option<&AudioSource> {
        self.background.as_ref()
    }

    pub fn has_background(&self) -> bool {
        self.background.is_some()
    }

    /// Install a new vocal source, releasing the previous one.
    pub(crate) fn replace_vocal(&mut self, source: AudioSource) {
        if let Some(old) = self.vocal.replace(source) {
            log::debug!(target: "audio", "released vocal source {} ({})", old.id.get(), old.name);
        }
    }

    /// Install a new background source, releasing the previous one.
    pub(crate) fn replace_background(&mut self, source: AudioSource) {
        if let Some(old) = self.background.replace(source) {
            log::debug!(target: "audio", "released background source {} ({})", old.id.get(), old.name);
        }
    }

    /// Release the background source. Returns whether one was held.
    pub(crate) fn clear_background(&mut self) -> bool {
        match self.background.take() {
            Some(old) => {
                log::debug!(target: "audio", "released background source {} ({})", old.id.get(), old.name);
                true
            }
            None => false,
        }
    }
}
