// src/infrastructure/config.rs
use crate::constants::DEFAULT_NOTES_DIR;
use crate::infrastructure::search::MatchMode;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// TOML configuration, e.g.
///
/// ```toml
/// [notes]
/// dir = "/home/me/notes"
///
/// [search]
/// literal = true
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub notes: NotesConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NotesConfig {
    #[serde(default = "default_notes_dir")]
    pub dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct SearchConfig {
    /// Match the search term as plain text instead of a regular expression.
    #[serde(default)]
    pub literal: bool,
}

fn default_notes_dir() -> PathBuf {
    PathBuf::from(DEFAULT_NOTES_DIR)
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            dir: default_notes_dir(),
        }
    }
}

impl SearchConfig {
    pub fn match_mode(&self) -> MatchMode {
        if self.literal {
            MatchMode::Literal
        } else {
            MatchMode::Regex
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        toml::from_str(&content).context("Failed to parse TOML config")
    }

    /// Load an explicitly given file, or the default location if it exists, or defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => {
                debug!(?path, "Loading config from default location");
                Self::load(path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// `<config_dir>/bambam/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("bambam").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn given_no_config_when_using_defaults_then_values_match() {
        let config = Config::default();

        assert_eq!(config.notes.dir, PathBuf::from("notes"));
        assert!(!config.search.literal);
        assert_eq!(config.search.match_mode(), MatchMode::Regex);
    }

    #[test]
    fn given_full_toml_when_loading_then_parses_all_fields() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[notes]\ndir = \"/srv/notes\"\n\n[search]\nliteral = true\n").unwrap();

        let config = Config::load(&path).unwrap();

        assert_eq!(config.notes.dir, PathBuf::from("/srv/notes"));
        assert_eq!(config.search.match_mode(), MatchMode::Literal);
    }

    #[test]
    fn given_partial_toml_when_loading_then_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[search]\nliteral = true\n").unwrap();

        let config = Config::load(&path).unwrap();

        assert_eq!(config.notes.dir, PathBuf::from("notes"));
        assert!(config.search.literal);
    }

    #[test]
    fn given_invalid_toml_when_loading_then_returns_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[notes\ndir = ").unwrap();

        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn given_explicit_missing_file_when_resolving_then_returns_error() {
        let temp_dir = TempDir::new().unwrap();

        let result = Config::resolve(Some(&temp_dir.path().join("missing.toml")));

        assert!(result.is_err());
    }
}
