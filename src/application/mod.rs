// src/application/mod.rs
pub mod edit_session;
pub mod note_repository;

pub use edit_session::{EditOutcome, EditSession};
pub use note_repository::NoteRepository;
