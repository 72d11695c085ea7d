//! Import/export seam for the line-oriented score format.
//!
//! The session never parses or writes score text itself; it hands lines to a
//! `DocumentCodec` and gets a [`Score`] back, and vice versa.

use cantor_types::Score;

pub trait DocumentCodec: Send {
    /// Parse score text. Unrecoverable input yields a score with no notes.
    fn parse_document(&self, lines: &[String]) -> Score;

    /// Serialize a score (notes already in ordered-view order) to text lines.
    fn serialize_document(&self, score: &Score) -> Vec<String>;

    /// Serialize a score to bytes. Defaults to newline-joined text lines.
    fn serialize_document_bytes(&self, score: &Score) -> Vec<u8> {
        let mut bytes = Vec::new();
        for line in self.serialize_document(score) {
            bytes.extend_from_slice(line.as_bytes());
            bytes.push(b'\n');
        }
        bytes
    }
}

/// Split raw file bytes into lines for [`DocumentCodec::parse_document`].
/// Invalid UTF-8 is replaced rather than rejected; `\r\n` endings are accepted.
pub fn split_lines(bytes: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(bytes)
        .lines()
        .map(str::to_string)
        .collect()
}
