//! Shared fixtures for session integration tests.

use cantor_core::codec::DocumentCodec;
use cantor_core::config::Config;
use cantor_core::state::Session;
use cantor_types::{Note, NoteAddition, NoteId, Score};

/// Minimal score format: an optional `tempo=<bpm>` line, then one
/// `lyric offset length key` line per note. Malformed lines are skipped.
pub struct LineCodec;

impl DocumentCodec for LineCodec {
    fn parse_document(&self, lines: &[String]) -> Score {
        let mut score = Score::new(120.0);
        for line in lines {
            if let Some(tempo) = line.strip_prefix("tempo=") {
                if let Ok(tempo) = tempo.trim().parse() {
                    score.tempo = tempo;
                }
                continue;
            }
            let fields: Vec<&str> = line.split_whitespace().collect();
            if let [lyric, offset, length, key] = fields[..] {
                if let (Ok(offset), Ok(length), Ok(key)) =
                    (offset.parse(), length.parse(), key.parse())
                {
                    score.notes.push(Note::new(NoteId::new(0), lyric, offset, length, key));
                }
            }
        }
        score
    }

    fn serialize_document(&self, score: &Score) -> Vec<String> {
        let mut lines = vec![format!("tempo={}", score.tempo)];
        for n in &score.notes {
            lines.push(format!(
                "{} {} {} {}",
                n.lyric, n.pulse_offset, n.pulse_length, n.key_number
            ));
        }
        lines
    }
}

pub fn session() -> Session {
    let config = Config::from_toml("[document]\ndefault_name = \"Untitled\"\ntempo = 120.0")
        .expect("test config");
    Session::new(&config, Box::new(LineCodec))
}

pub fn lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

pub fn addition(id: u64, lyric: &str, offset: u32, length: u32, key: i32) -> NoteAddition {
    NoteAddition {
        id: NoteId::new(id),
        lyric: lyric.into(),
        pulse_offset: offset,
        pulse_length: length,
        key_number: key,
    }
}
