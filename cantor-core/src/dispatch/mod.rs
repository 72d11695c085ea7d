mod local;

pub use local::LocalDispatcher;

use crate::action::{Action, AudioRequest, DispatchResult};
use crate::state::Session;
use crate::SessionError;

/// Dispatch an action. Returns a DispatchResult describing what the UI
/// layer should react to; failures are reported in `error`, never panics.
///
/// Content-changing actions go through the session's single mutation path,
/// so history, modified status and playback readiness stay consistent.
pub fn dispatch_action(action: Action, session: &mut Session) -> DispatchResult {
    match action {
        Action::Submit(event) => edit_result(session.submit_user_event(event)),
        Action::Undo => edit_result(session.undo()),
        Action::Redo => edit_result(session.redo()),
        Action::MarkSaved => match session.mark_saved() {
            Ok(()) => DispatchResult::none(),
            Err(e) => DispatchResult::with_error(e.to_string()),
        },
        Action::TogglePlayback => match session.request_toggle_playback() {
            Ok(request) => DispatchResult::with_request(request),
            Err(e) => DispatchResult::with_error(e.to_string()),
        },
        Action::StopPlayback => {
            session.request_stop();
            DispatchResult::with_request(AudioRequest::Stop)
        }
        Action::ResetPlayback => {
            session.request_reset();
            DispatchResult::with_request(AudioRequest::Reset)
        }
        Action::RepeatPlayback => {
            session.request_repeat();
            DispatchResult::with_request(AudioRequest::Repeat)
        }
        Action::AudioStatus(state) => match session.set_playback_state(state) {
            Ok(()) => DispatchResult::none(),
            Err(e) => DispatchResult::with_error(e.to_string()),
        },
    }
}

fn edit_result(result: Result<(), SessionError>) -> DispatchResult {
    match result {
        Ok(()) => DispatchResult::with_content_changed(),
        Err(e) => DispatchResult::with_error(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{NoteAddition, NoteEvent, PlaybackState};
    use crate::codec::DocumentCodec;
    use crate::config::Config;
    use cantor_types::{NoteId, Score};

    struct NullCodec;

    impl DocumentCodec for NullCodec {
        fn parse_document(&self, _lines: &[String]) -> Score {
            Score::new(120.0)
        }

        fn serialize_document(&self, _score: &Score) -> Vec<String> {
            Vec::new()
        }
    }

    fn session() -> Session {
        Session::new(&Config::from_toml("").unwrap(), Box::new(NullCodec))
    }

    fn add_one() -> Action {
        Action::Submit(NoteEvent::add(vec![NoteAddition {
            id: NoteId::new(1),
            lyric: "la".into(),
            pulse_offset: 0,
            pulse_length: 480,
            key_number: 60,
        }]))
    }

    #[test]
    fn submit_and_undo_report_content_change() {
        let mut s = session();
        assert!(dispatch_action(add_one(), &mut s).content_changed);
        assert!(dispatch_action(Action::Undo, &mut s).content_changed);
        let r = dispatch_action(Action::Undo, &mut s);
        assert!(!r.content_changed);
        assert_eq!(r.error.as_deref(), Some("nothing to undo"));
    }

    #[test]
    fn toggle_with_nothing_to_play_is_an_error() {
        let mut s = session();
        let r = dispatch_action(Action::TogglePlayback, &mut s);
        assert_eq!(r.audio_request, None);
        assert_eq!(r.error.as_deref(), Some("nothing to play"));
    }

    #[test]
    fn toggle_after_edit_requests_synthesis() {
        let mut s = session();
        dispatch_action(add_one(), &mut s);
        let r = dispatch_action(Action::TogglePlayback, &mut s);
        assert_eq!(r.audio_request, Some(AudioRequest::Synthesize));
        assert!(r.is_ok());
    }

    #[test]
    fn audio_status_sets_state() {
        let mut s = session();
        dispatch_action(Action::AudioStatus(PlaybackState::Paused), &mut s);
        assert_eq!(s.playback_state(), PlaybackState::Paused);
        let r = dispatch_action(Action::TogglePlayback, &mut s);
        assert_eq!(r.audio_request, Some(AudioRequest::Start));
    }

    #[test]
    fn derived_audio_status_is_rejected() {
        let mut s = session();
        dispatch_action(add_one(), &mut s);
        let r = dispatch_action(Action::AudioStatus(PlaybackState::NoAudio), &mut s);
        assert!(!r.is_ok());
        assert_eq!(s.playback_state(), PlaybackState::NeedsSynth);
    }

    #[test]
    fn stop_is_unconditional() {
        let mut s = session();
        let engine = s.connect_engine();
        let r = dispatch_action(Action::StopPlayback, &mut s);
        assert_eq!(r.audio_request, Some(AudioRequest::Stop));
        assert_eq!(engine.requests.try_recv().unwrap(), AudioRequest::Stop);
    }
}
