// src/application/edit_session.rs
use crate::application::NoteRepository;
use crate::constants::APP_NAME;
use crate::domain::{DomainError, NoteEntry, SearchHit};
use crate::infrastructure::markdown::MarkdownRenderer;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Result of replacing the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOutcome {
    /// Rendered HTML of the new buffer.
    pub html: String,
    /// True only on the edit that moved the session from clean to dirty.
    pub became_dirty: bool,
}

/// The single open-note state of the editor.
///
/// Owns the buffer, the identity of the file it came from and the content last
/// persisted, and mediates every mutating operation against the repository.
/// `current_path == None` means an unsaved new note.
pub struct EditSession<R: NoteRepository> {
    repository: R,
    renderer: MarkdownRenderer,
    current_path: Option<PathBuf>,
    buffer: String,
    baseline: String,
    dirty: bool,
}

impl<R: NoteRepository> EditSession<R> {
    pub fn new(repository: R, renderer: MarkdownRenderer) -> Self {
        Self {
            repository,
            renderer,
            current_path: None,
            buffer: String::new(),
            baseline: String::new(),
            dirty: false,
        }
    }

    pub fn current_path(&self) -> Option<&Path> {
        self.current_path.as_deref()
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Window title in the form `a.md - Bam Bam`, with `*` after the name while dirty.
    pub fn title(&self) -> String {
        let name = self
            .current_path
            .as_deref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned());

        match (name, self.dirty) {
            (Some(name), false) => format!("{name} - {APP_NAME}"),
            (Some(name), true) => format!("{name}* - {APP_NAME}"),
            (None, false) => format!("New File - {APP_NAME}"),
            (None, true) => format!("Untitled* - {APP_NAME}"),
        }
    }

    /// Discard the buffer and start an unsaved note. Unsaved edits are lost.
    pub fn new_note(&mut self) {
        debug!(discarded_dirty = self.dirty, "Starting new note");
        self.buffer.clear();
        self.baseline.clear();
        self.current_path = None;
        self.dirty = false;
    }

    /// Load `path` into the buffer and return its rendered HTML.
    #[instrument(level = "debug", skip(self, path), fields(path = %path.display()))]
    pub fn open(&mut self, path: &Path) -> Result<String, DomainError> {
        let content = self.repository.read_note(path)?;
        info!(bytes = content.len(), "Opened note");

        self.baseline = content.clone();
        self.buffer = content;
        self.current_path = Some(path.to_path_buf());
        self.dirty = false;

        Ok(self.render())
    }

    /// Open a note referenced by a preview link, e.g. `file:///home/me/notes/a.md`.
    pub fn open_link(&mut self, url: &str) -> Result<String, DomainError> {
        let path = url.strip_prefix("file://").unwrap_or(url);
        self.open(Path::new(path))
    }

    /// Replace the buffer and render it.
    pub fn edit(&mut self, text: &str) -> EditOutcome {
        let was_dirty = self.dirty;
        self.buffer.clear();
        self.buffer.push_str(text);
        self.dirty = self.buffer != self.baseline;

        let became_dirty = !was_dirty && self.dirty;
        if became_dirty {
            debug!(title = %self.title(), "Buffer became dirty");
        }

        EditOutcome {
            html: self.render(),
            became_dirty,
        }
    }

    /// Render the current buffer.
    pub fn render(&self) -> String {
        self.renderer.render(&self.buffer)
    }

    /// Write the buffer to `path`, or to the current path when `path` is `None`.
    ///
    /// An explicit path wins over the current one (save-as). Returns the path written.
    #[instrument(level = "debug", skip(self))]
    pub fn save(&mut self, path: Option<&Path>) -> Result<PathBuf, DomainError> {
        let destination = match (path, self.current_path.as_deref()) {
            (Some(explicit), _) => explicit.to_path_buf(),
            (None, Some(current)) => current.to_path_buf(),
            (None, None) => return Err(DomainError::NoDestination),
        };

        self.repository.write_note(&destination, &self.buffer)?;
        info!(path = %destination.display(), bytes = self.buffer.len(), "Saved note");

        self.baseline = self.buffer.clone();
        self.current_path = Some(destination.clone());
        self.dirty = false;
        Ok(destination)
    }

    /// Delete the note at `path`. Deleting the open note resets the session to a new note.
    #[instrument(level = "debug", skip(self, path), fields(path = %path.display()))]
    pub fn delete(&mut self, path: &Path) -> Result<(), DomainError> {
        let is_current = self.is_current(path);
        self.repository.delete_note(path)?;
        info!(is_current, "Deleted note");

        if is_current {
            self.new_note();
        }
        Ok(())
    }

    pub fn list(&self) -> Result<Vec<NoteEntry>, DomainError> {
        self.repository.list_notes()
    }

    pub fn search(&self, term: &str) -> Result<Vec<SearchHit>, DomainError> {
        self.repository.search_notes(term)
    }

    fn is_current(&self, path: &Path) -> bool {
        let Some(current) = self.current_path.as_deref() else {
            return false;
        };
        if current == path {
            return true;
        }
        match (current.canonicalize(), path.canonicalize()) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}
