// src/domain/note.rs
use serde::Serialize;
use std::path::PathBuf;
use std::time::SystemTime;

/// One row of a note listing. Listings are recomputed on every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteEntry {
    pub path: PathBuf,
    pub modified: SystemTime,
}

/// A single match occurrence with its surrounding context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub path: PathBuf,
    pub snippet: String,
}
