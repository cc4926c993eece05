// src/infrastructure/mod.rs
pub mod config;
pub mod file_store;
pub mod markdown;
pub mod renderer;
pub mod search;

pub use config::Config;
pub use file_store::FsNoteRepository;
pub use markdown::MarkdownRenderer;
