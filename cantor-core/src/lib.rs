//! # cantor-core
//!
//! Editing session for vocal scores. Owns the note store, undo/redo history
//! with save-point tracking, document identity, the vocal and background
//! audio sources, and the playback-readiness state machine.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cantor_core::config::Config;
//! use cantor_core::state::Session;
//! use cantor_core::action::{Action, NoteEvent};
//! use cantor_core::dispatch::dispatch_action;
//!
//! // 1. Create a session with defaults from config and a score codec
//! let config = Config::load();
//! let mut session = Session::new(&config, Box::new(my_codec));
//!
//! // 2. Hand the engine its request receiver and status sender
//! let engine = session.connect_engine();
//! spawn_engine(engine.requests, engine.status);
//!
//! // 3. Subscribe for UI notifications
//! let events = session.subscribe();
//!
//! // 4. Dispatch edits; undo/redo replay them through the same reducer
//! let result = dispatch_action(Action::Submit(event), &mut session);
//!
//! // 5. Drain engine status on the owning thread
//! session.drain_audio_feedback();
//! ```
//!
//! ## Module Overview
//!
//! - [`state`] — `Session`, `History` (undo/redo + save points), `Playback`,
//!   `DocumentMeta`
//! - [`action`] — `Action`, `DispatchResult` and the edit event types
//! - [`dispatch`] — `dispatch_action()` and `LocalDispatcher`
//! - [`audio`] — `AudioHandle` and owned `AudioSource`s
//! - [`notify`] — `SessionEvent` fan-out to observers
//! - [`codec`] — `DocumentCodec`, the import/export seam
//! - [`config`] — TOML configuration (embedded defaults + user override)

pub mod action;
pub mod audio;
pub mod codec;
pub mod config;
pub mod dispatch;
mod error;
pub mod notify;
pub mod state;

pub use error::SessionError;
