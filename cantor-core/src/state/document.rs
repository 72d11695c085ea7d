//! Document identity and exported views.

use std::path::Path;

use cantor_types::Score;

use crate::SessionError;

/// Document metadata (name, path, tempo).
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentMeta {
    name: String,
    /// None until the document is loaded from or saved to a file
    file_path: Option<String>,
    pub tempo: f32,
}

impl DocumentMeta {
    pub fn new(name: impl Into<String>, tempo: f32) -> Self {
        Self {
            name: name.into(),
            file_path: None,
            tempo,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn file_path(&self) -> Option<&str> {
        self.file_path.as_deref()
    }

    pub fn set_name(&mut self, name: &str) -> Result<(), SessionError> {
        if name.is_empty() {
            return Err(SessionError::EmptyFieldRejected { field: "document name" });
        }
        self.name = name.to_string();
        Ok(())
    }

    /// Set the file path; the document name follows the file stem.
    pub fn set_file_path(&mut self, path: &str) -> Result<(), SessionError> {
        if path.is_empty() {
            return Err(SessionError::EmptyFieldRejected { field: "file path" });
        }
        self.file_path = Some(path.to_string());
        self.name = name_from_path(path);
        Ok(())
    }
}

/// File name of `path` without its last extension, so `verse.v2.ust` names
/// the document `verse.v2`. The whole string is used when there is no stem.
pub fn name_from_path(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
        .unwrap_or_else(|| path.to_string())
}

/// Ordered note content plus the metadata it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedDocument {
    pub name: String,
    pub file_path: Option<String>,
    pub score: Score,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_is_rejected_and_kept() {
        let mut doc = DocumentMeta::new("Untitled", 120.0);
        assert_eq!(
            doc.set_name(""),
            Err(SessionError::EmptyFieldRejected { field: "document name" })
        );
        assert_eq!(doc.name(), "Untitled");
        doc.set_name("Chorus").unwrap();
        assert_eq!(doc.name(), "Chorus");
    }

    #[test]
    fn file_path_sets_name_from_stem() {
        let mut doc = DocumentMeta::new("Untitled", 120.0);
        doc.set_file_path("/songs/verse one.ust").unwrap();
        assert_eq!(doc.file_path(), Some("/songs/verse one.ust"));
        assert_eq!(doc.name(), "verse one");

        assert!(doc.set_file_path("").is_err());
        assert_eq!(doc.file_path(), Some("/songs/verse one.ust"));
        assert_eq!(doc.name(), "verse one");
    }

    #[test]
    fn name_from_path_strips_last_extension() {
        assert_eq!(name_from_path("take.ust"), "take");
        assert_eq!(name_from_path("/songs/verse.v2.ust"), "verse.v2");
        assert_eq!(name_from_path(".."), "..");
    }
}
