// src/constants.rs
//
// Application-wide constants shared by the store, renderer and search.

/// Directory name holding images referenced by notes as `assets/<name>`.
///
/// Subtrees with this name are skipped when listing notes, but not when searching.
///
/// Used in: `infrastructure/file_store.rs`, `infrastructure/markdown.rs`
pub const ASSETS_DIR: &str = "assets";

/// File extension (without dot) identifying a note.
pub const NOTE_EXTENSION: &str = "md";

/// Characters of context kept on each side of a search match.
///
/// Used in: `infrastructure/search.rs`
pub const SNIPPET_CONTEXT_CHARS: usize = 20;

/// Fixed display width and height, in pixels, of every rendered image.
///
/// Used in: `infrastructure/markdown.rs`
pub const IMAGE_DISPLAY_SIZE_PX: u32 = 500;

/// Application name shown in window titles.
pub const APP_NAME: &str = "Bam Bam";

/// Delay in milliseconds after launching the browser before the preview temp dir
/// may be dropped.
///
/// Used in: `infrastructure/renderer.rs`
pub const BROWSER_LAUNCH_DELAY_MS: u64 = 500;

/// Default notes directory, relative to the working directory.
pub const DEFAULT_NOTES_DIR: &str = "notes";
