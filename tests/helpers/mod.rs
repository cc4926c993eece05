use anyhow::{Context, Result};
use bambam::application::EditSession;
use bambam::infrastructure::{Config, FsNoteRepository};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

/// Temporary notes tree, removed on drop
#[allow(dead_code)]
pub struct TestNotes {
    _temp_dir: TempDir,
    pub root: PathBuf,
}

#[allow(dead_code)]
impl TestNotes {
    /// Create an empty `notes/` directory inside a fresh temp dir
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        let root = temp_dir.path().join("notes");
        std::fs::create_dir_all(&root).context("Failed to create notes directory")?;

        Ok(Self {
            _temp_dir: temp_dir,
            root,
        })
    }

    /// Write `content` to `relative`, creating parent directories
    pub fn add(&self, relative: &str, content: &str) -> Result<PathBuf> {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }

    /// Write a note and backdate its modification time by `age_secs`
    pub fn add_aged(&self, relative: &str, content: &str, age_secs: u64) -> Result<PathBuf> {
        let path = self.add(relative, content)?;
        let mtime = SystemTime::now() - Duration::from_secs(age_secs);
        File::options().write(true).open(&path)?.set_modified(mtime)?;
        Ok(path)
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    pub fn session(&self) -> Result<EditSession<FsNoteRepository>> {
        bambam::open_session(&self.root, &Config::default())
    }

    pub fn relative(&self, path: &Path) -> PathBuf {
        path.strip_prefix(&self.root).unwrap_or(path).to_path_buf()
    }
}
