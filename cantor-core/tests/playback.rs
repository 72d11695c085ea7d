//! Playback readiness, engine feedback and action routing.

mod common;

use std::thread;

use cantor_core::audio::AudioSource;
use cantor_core::dispatch::LocalDispatcher;
use cantor_core::notify::SessionEvent;
use cantor_core::SessionError;
use cantor_types::{Action, AudioRequest, Dispatcher, NoteEvent, PlaybackState};
use common::{addition, session};

#[test]
fn toggle_walks_the_state_machine() {
    let mut s = session();
    assert_eq!(
        s.request_toggle_playback(),
        Err(SessionError::NoPlaybackTarget)
    );

    s.submit_user_event(NoteEvent::add(vec![addition(1, "la", 0, 480, 60)]))
        .unwrap();
    assert_eq!(s.request_toggle_playback(), Ok(AudioRequest::Synthesize));

    s.set_playback_state(PlaybackState::Stopped).unwrap();
    assert_eq!(s.request_toggle_playback(), Ok(AudioRequest::Start));
    s.set_playback_state(PlaybackState::Playing).unwrap();
    assert_eq!(s.request_toggle_playback(), Ok(AudioRequest::Pause));
    s.set_playback_state(PlaybackState::Repeating).unwrap();
    assert_eq!(s.request_toggle_playback(), Ok(AudioRequest::Pause));
    s.set_playback_state(PlaybackState::Paused).unwrap();
    assert_eq!(s.request_toggle_playback(), Ok(AudioRequest::Start));
}

#[test]
fn requests_reach_the_engine_channel() {
    let mut s = session();
    let engine = s.connect_engine();
    s.submit_user_event(NoteEvent::add(vec![addition(1, "la", 0, 480, 60)]))
        .unwrap();
    s.request_toggle_playback().unwrap();
    s.request_repeat();
    s.request_reset();
    s.request_stop();
    let got: Vec<AudioRequest> = engine.requests.try_iter().collect();
    assert_eq!(
        got,
        vec![
            AudioRequest::Synthesize,
            AudioRequest::Repeat,
            AudioRequest::Reset,
            AudioRequest::Stop,
        ]
    );
}

#[test]
fn engine_reports_are_applied_on_drain() {
    let mut s = session();
    let rx = s.subscribe();
    let status = s.connect_engine().status;

    let engine = thread::spawn(move || {
        for state in [
            PlaybackState::Stopped,
            PlaybackState::Playing,
            PlaybackState::Playing,
            PlaybackState::Paused,
        ] {
            status.send(state).unwrap();
        }
    });
    engine.join().unwrap();

    assert_eq!(s.playback_state(), PlaybackState::NoAudio);
    assert_eq!(s.drain_audio_feedback(), 4);
    assert_eq!(s.playback_state(), PlaybackState::Paused);

    let changes: Vec<SessionEvent> = rx.try_iter().collect();
    assert_eq!(
        changes,
        vec![
            SessionEvent::PlaybackStateChanged(PlaybackState::Stopped),
            SessionEvent::PlaybackStateChanged(PlaybackState::Playing),
            SessionEvent::PlaybackStateChanged(PlaybackState::Paused),
        ]
    );
    assert_eq!(s.drain_audio_feedback(), 0);
}

#[test]
fn derived_states_from_the_engine_are_ignored() {
    let mut s = session();
    s.submit_user_event(NoteEvent::add(vec![addition(1, "la", 0, 480, 60)]))
        .unwrap();
    assert_eq!(
        s.set_playback_state(PlaybackState::NoAudio),
        Err(SessionError::NotEngineReported {
            state: PlaybackState::NoAudio
        })
    );

    let status = s.connect_engine().status;
    status.send(PlaybackState::NoAudio).unwrap();
    status.send(PlaybackState::Playing).unwrap();
    status.send(PlaybackState::NeedsSynth).unwrap();
    assert_eq!(s.drain_audio_feedback(), 1);
    assert_eq!(s.playback_state(), PlaybackState::Playing);
}

#[test]
fn requests_without_engine_do_not_accumulate() {
    let mut s = session();
    for _ in 0..1_000 {
        s.request_stop();
    }
    assert!(!s.audio().is_engine_connected());

    let engine = s.connect_engine();
    drop(engine.requests);
    s.request_reset();
    assert!(!s.audio().is_engine_connected());
}

#[test]
fn edit_while_playing_needs_new_synthesis() {
    let mut s = session();
    s.submit_user_event(NoteEvent::add(vec![addition(1, "la", 0, 480, 60)]))
        .unwrap();
    s.set_playback_state(PlaybackState::Playing).unwrap();
    s.submit_user_event(NoteEvent::add(vec![addition(2, "li", 480, 480, 62)]))
        .unwrap();
    assert_eq!(s.playback_state(), PlaybackState::NeedsSynth);
}

#[test]
fn replacing_sources_releases_the_previous_one() {
    let mut s = session();
    let rx = s.subscribe();

    let first = AudioSource::new("take 1", 44_100, vec![0.0; 4]);
    let first_id = first.id();
    s.set_synthesized_vocal(first);
    let second = AudioSource::new("take 2", 44_100, vec![0.0; 4]);
    let second_id = second.id();
    s.set_synthesized_vocal(second);

    assert_ne!(first_id, second_id);
    assert_eq!(s.audio().vocal().map(AudioSource::id), Some(second_id));
    assert_eq!(
        rx.try_iter().collect::<Vec<_>>(),
        vec![SessionEvent::VocalChanged, SessionEvent::VocalChanged]
    );
}

#[test]
fn background_keeps_session_playable_without_notes() {
    let mut s = session();
    s.set_background_audio(AudioSource::new("backing", 48_000, vec![0.0; 48_000]));
    s.submit_user_event(NoteEvent::add(vec![addition(1, "la", 0, 480, 60)]))
        .unwrap();
    s.undo().unwrap();
    assert!(s.notes().is_empty());
    assert_eq!(s.playback_state(), PlaybackState::NeedsSynth);

    s.clear_background_audio();
    assert!(!s.audio().has_background());
    assert_eq!(s.playback_state(), PlaybackState::NoAudio);
}

#[test]
fn local_dispatcher_routes_actions() {
    let mut s = session();
    {
        let mut dispatcher = LocalDispatcher::new(&mut s);
        let r = dispatcher.dispatch(Action::Submit(NoteEvent::add(vec![addition(
            1, "la", 0, 480, 60,
        )])));
        assert!(r.content_changed);
        assert!(r.is_ok());

        let r = dispatcher.dispatch(Action::MarkSaved);
        assert!(r.is_ok());
        assert!(!r.content_changed);

        let r = dispatcher.dispatch(Action::Redo);
        assert_eq!(r.error.as_deref(), Some("nothing to redo"));
    }
    assert!(!s.modified());
    assert_eq!(s.notes().len(), 1);
}
