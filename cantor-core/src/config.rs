use std::path::{Path, PathBuf};

use serde::Deserialize;

const DEFAULT_CONFIG: &str = include_str!("../config.toml");

const FALLBACK_DOC_NAME: &str = "Untitled";
const FALLBACK_TEMPO: f32 = 120.0;

#[derive(Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    document: DocumentConfig,
}

#[derive(Deserialize, Default)]
struct DocumentConfig {
    default_name: Option<String>,
    tempo: Option<f32>,
}

pub struct Config {
    document: DocumentConfig,
}

impl Config {
    /// Embedded defaults merged with the user's config file, if present.
    pub fn load() -> Self {
        let mut config = Self::embedded();
        if let Some(path) = user_config_path() {
            if path.exists() {
                config.merge_file(&path);
            }
        }
        config
    }

    /// Embedded defaults merged with the file at `path`.
    pub fn load_from(path: &Path) -> Self {
        let mut config = Self::embedded();
        config.merge_file(path);
        config
    }

    /// Parse a config from TOML text without the embedded defaults.
    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        let file: ConfigFile = toml::from_str(contents)?;
        Ok(Config {
            document: file.document,
        })
    }

    fn embedded() -> Self {
        match Self::from_toml(DEFAULT_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                log::error!(target: "config", "embedded config.toml is malformed: {}", e);
                Config {
                    document: DocumentConfig::default(),
                }
            }
        }
    }

    fn merge_file(&mut self, path: &Path) {
        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<ConfigFile>(&contents) {
                Ok(user) => merge_document(&mut self.document, user.document),
                Err(e) => {
                    log::warn!(target: "config", "ignoring malformed config {}: {}", path.display(), e)
                }
            },
            Err(e) => {
                log::warn!(target: "config", "could not read config {}: {}", path.display(), e)
            }
        }
    }

    /// Name given to new, unsaved documents.
    pub fn default_doc_name(&self) -> String {
        self.document
            .default_name
            .clone()
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| FALLBACK_DOC_NAME.to_string())
    }

    /// Tempo for new documents in beats per minute (clamped to 1..=999).
    pub fn tempo(&self) -> f32 {
        self.document
            .tempo
            .unwrap_or(FALLBACK_TEMPO)
            .clamp(1.0, 999.0)
    }
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("cantor").join("config.toml"))
}

fn merge_document(base: &mut DocumentConfig, user: DocumentConfig) {
    if user.default_name.is_some() {
        base.default_name = user.default_name;
    }
    if user.tempo.is_some() {
        base.tempo = user.tempo;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_embedded_config() {
        let config = Config::embedded();
        assert_eq!(config.default_doc_name(), "Untitled");
        assert!((config.tempo() - 120.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_user_file_overrides_set_keys_only() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[document]\ntempo = 90.0").unwrap();

        let config = Config::load_from(file.path());
        assert!((config.tempo() - 90.0).abs() < f32::EPSILON);
        assert_eq!(config.default_doc_name(), "Untitled");
    }

    #[test]
    fn test_malformed_user_file_is_ignored() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[document\ntempo = ").unwrap();

        let config = Config::load_from(file.path());
        assert!((config.tempo() - 120.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_missing_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml"));
        assert_eq!(config.default_doc_name(), "Untitled");
    }

    #[test]
    fn test_empty_name_and_wild_tempo_fall_back() {
        let config = Config::from_toml("[document]\ndefault_name = \"\"\ntempo = 5000.0").unwrap();
        assert_eq!(config.default_doc_name(), "Untitled");
        assert!((config.tempo() - 999.0).abs() < f32::EPSILON);
    }
}
