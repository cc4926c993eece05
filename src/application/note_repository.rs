// src/application/note_repository.rs
use crate::domain::{DomainError, NoteEntry, SearchHit};
use std::path::Path;

/// Storage and query seam for a tree of markdown notes.
pub trait NoteRepository {
    /// All notes under the root, most recently modified first.
    fn list_notes(&self) -> Result<Vec<NoteEntry>, DomainError>;

    fn read_note(&self, path: &Path) -> Result<String, DomainError>;

    /// Create or overwrite the note at `path`. Parent directories must already exist.
    fn write_note(&mut self, path: &Path, content: &str) -> Result<(), DomainError>;

    fn delete_note(&mut self, path: &Path) -> Result<(), DomainError>;

    /// One hit per case-insensitive match of `term`, in walk order then match order.
    fn search_notes(&self, term: &str) -> Result<Vec<SearchHit>, DomainError>;
}
