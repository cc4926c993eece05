// src/infrastructure/file_store.rs
use crate::application::NoteRepository;
use crate::constants::{ASSETS_DIR, NOTE_EXTENSION};
use crate::domain::{DomainError, NoteEntry, SearchHit};
use crate::infrastructure::search::{self, MatchMode};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};
use walkdir::{DirEntry, WalkDir};

/// Notes stored as plain `.md` files under a root directory.
///
/// The filesystem is the only catalog: every listing and search re-walks the tree.
#[derive(Debug, Clone)]
pub struct FsNoteRepository {
    root: PathBuf,
    match_mode: MatchMode,
}

impl FsNoteRepository {
    /// The root must already exist; creating it is up to the caller.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            match_mode: MatchMode::Regex,
        }
    }

    pub fn with_match_mode(mut self, match_mode: MatchMode) -> Self {
        self.match_mode = match_mode;
        self
    }
}

impl NoteRepository for FsNoteRepository {
    #[instrument(level = "debug", skip(self), fields(root = %self.root.display()))]
    fn list_notes(&self) -> Result<Vec<NoteEntry>, DomainError> {
        let walker = WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !is_assets_dir(entry));

        let mut entries = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| walk_error(&self.root, e))?;
            if !is_note_file(&entry) {
                continue;
            }
            // Symlinked notes sort by their target's mtime
            let modified = fs::metadata(entry.path())
                .and_then(|metadata| metadata.modified())
                .map_err(|e| DomainError::io(entry.path(), e))?;

            entries.push(NoteEntry {
                path: entry.into_path(),
                modified,
            });
        }

        // Stable sort keeps walk order among equal timestamps
        entries.sort_by(|a, b| b.modified.cmp(&a.modified));
        debug!(count = entries.len(), "Listed notes");
        Ok(entries)
    }

    fn read_note(&self, path: &Path) -> Result<String, DomainError> {
        fs::read_to_string(path).map_err(|e| DomainError::from_io(path, e))
    }

    fn write_note(&mut self, path: &Path, content: &str) -> Result<(), DomainError> {
        fs::write(path, content).map_err(|e| DomainError::io(path, e))
    }

    fn delete_note(&mut self, path: &Path) -> Result<(), DomainError> {
        fs::remove_file(path).map_err(|e| DomainError::from_io(path, e))
    }

    fn search_notes(&self, term: &str) -> Result<Vec<SearchHit>, DomainError> {
        search::search_tree(&self.root, term, self.match_mode)
    }
}

fn is_assets_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_type().is_dir() && entry.file_name() == ASSETS_DIR
}

/// Regular `.md` files, following symlinks to files.
pub(crate) fn is_note_file(entry: &DirEntry) -> bool {
    entry.path().extension().is_some_and(|ext| ext == NOTE_EXTENSION) && entry.path().is_file()
}

pub(crate) fn walk_error(root: &Path, err: walkdir::Error) -> DomainError {
    let path = err.path().unwrap_or(root).to_path_buf();
    DomainError::io(path, err.into())
}
