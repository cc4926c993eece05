// src/util/testing.rs

use anyhow::Result;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::env;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::NoteRepository;
use crate::domain::{DomainError, NoteEntry, SearchHit};

/// In-memory repository for testing the edit session without touching disk.
///
/// # Examples
///
/// ```
/// use bambam::application::NoteRepository;
/// use bambam::util::testing::MockNoteRepository;
/// use std::path::Path;
///
/// let mock = MockNoteRepository::builder()
///     .with_note("notes/a.md", "# Hello")
///     .build();
///
/// assert_eq!(mock.read_note(Path::new("notes/a.md")).unwrap(), "# Hello");
/// ```
pub struct MockNoteRepository {
    notes: BTreeMap<PathBuf, String>,
    write_failures: HashSet<PathBuf>,
    search_results: HashMap<String, Vec<SearchHit>>,
}

impl MockNoteRepository {
    pub fn builder() -> MockNoteRepositoryBuilder {
        MockNoteRepositoryBuilder::new()
    }

    /// Current stored content of `path`, if any.
    pub fn content_of(&self, path: impl AsRef<Path>) -> Option<String> {
        self.notes.get(path.as_ref()).cloned()
    }
}

impl NoteRepository for MockNoteRepository {
    fn list_notes(&self) -> Result<Vec<NoteEntry>, DomainError> {
        Ok(self
            .notes
            .keys()
            .map(|path| NoteEntry {
                path: path.clone(),
                modified: SystemTime::UNIX_EPOCH,
            })
            .collect())
    }

    fn read_note(&self, path: &Path) -> Result<String, DomainError> {
        self.notes
            .get(path)
            .cloned()
            .ok_or_else(|| DomainError::NotFound(path.to_path_buf()))
    }

    fn write_note(&mut self, path: &Path, content: &str) -> Result<(), DomainError> {
        if self.write_failures.contains(path) {
            return Err(DomainError::io(
                path,
                io::Error::from(io::ErrorKind::PermissionDenied),
            ));
        }
        self.notes.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn delete_note(&mut self, path: &Path) -> Result<(), DomainError> {
        self.notes
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound(path.to_path_buf()))
    }

    fn search_notes(&self, term: &str) -> Result<Vec<SearchHit>, DomainError> {
        if let Some(results) = self.search_results.get(term) {
            return Ok(results.clone());
        }

        // Default behavior: one hit per note containing the term, snippet is the whole note
        Ok(self
            .notes
            .iter()
            .filter(|(_, content)| !term.is_empty() && content.contains(term))
            .map(|(path, content)| SearchHit {
                path: path.clone(),
                snippet: content.replace('\n', " "),
            })
            .collect())
    }
}

/// Builder for MockNoteRepository
pub struct MockNoteRepositoryBuilder {
    notes: BTreeMap<PathBuf, String>,
    write_failures: HashSet<PathBuf>,
    search_results: HashMap<String, Vec<SearchHit>>,
}

impl MockNoteRepositoryBuilder {
    pub fn new() -> Self {
        Self {
            notes: BTreeMap::new(),
            write_failures: HashSet::new(),
            search_results: HashMap::new(),
        }
    }

    /// Add a note that can be read, listed and deleted
    pub fn with_note(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.notes.insert(path.into(), content.to_string());
        self
    }

    /// Make write_note fail with an I/O error for a specific path
    pub fn with_write_failure(mut self, path: impl Into<PathBuf>) -> Self {
        self.write_failures.insert(path.into());
        self
    }

    /// Configure the result of search_notes for a specific term
    pub fn with_search_result(mut self, term: &str, results: Vec<SearchHit>) -> Self {
        self.search_results.insert(term.to_string(), results);
        self
    }

    pub fn build(self) -> MockNoteRepository {
        MockNoteRepository {
            notes: self.notes,
            write_failures: self.write_failures,
            search_results: self.search_results,
        }
    }
}

impl Default for MockNoteRepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Keep the markdown parser's own tracing out of test output
    let noisy_modules = ["pulldown_cmark", "walkdir"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_note_added_when_reading_then_returns_content() {
        let mock = MockNoteRepository::builder()
            .with_note("notes/a.md", "Test content")
            .build();

        let result = mock.read_note(Path::new("notes/a.md")).expect("Note should exist");
        assert_eq!(result, "Test content");
    }

    #[test]
    fn given_no_note_when_reading_then_returns_not_found() {
        let mock = MockNoteRepository::builder().build();

        let result = mock.read_note(Path::new("notes/none.md"));
        assert!(matches!(result, Err(DomainError::NotFound(_))));
    }

    #[test]
    fn given_note_when_deleting_twice_then_second_delete_fails() {
        let mut mock = MockNoteRepository::builder()
            .with_note("notes/a.md", "x")
            .build();

        mock.delete_note(Path::new("notes/a.md"))
            .expect("First delete should succeed");
        let result = mock.delete_note(Path::new("notes/a.md"));

        assert!(matches!(result, Err(DomainError::NotFound(_))));
        assert!(mock.list_notes().expect("List should succeed").is_empty());
    }

    #[test]
    fn given_custom_search_result_when_searching_then_returns_configured_result() {
        let custom = vec![SearchHit {
            path: PathBuf::from("notes/x.md"),
            snippet: "custom".to_string(),
        }];
        let mock = MockNoteRepository::builder()
            .with_search_result("custom", custom.clone())
            .build();

        let result = mock.search_notes("custom").expect("Search should succeed");
        assert_eq!(result, custom);
    }
}
