// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use anyhow::{Context, Result};
use application::{EditSession, NoteRepository};
use cli::args::{Args, Command};
use infrastructure::renderer::ContentRenderer;
use infrastructure::{Config, FsNoteRepository, MarkdownRenderer};
use ports::HtmlPresenter;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting bambam with arguments");

    let config = Config::resolve(args.config.as_deref())?;
    let notes_dir = args.notes_dir.clone().unwrap_or(config.notes.dir.clone());
    let mut session = open_session(&notes_dir, &config)?;

    let mut stdout = std::io::stdout().lock();
    match args.command {
        Command::List { json } => list_notes(&session, json, &mut stdout),
        Command::View { path, html } => view_note(&mut session, &path, html, &mut stdout),
        Command::Search { term, json } => search_notes(&session, &term, json, &mut stdout),
        Command::Delete { path } => {
            session
                .delete(&path)
                .with_context(|| format!("Failed to delete {}", path.display()))?;
            writeln!(stdout, "Deleted {}", path.display())?;
            Ok(())
        }
        Command::Write { path } => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read note text from stdin")?;
            let written = write_note(&mut session, Some(&path), &text)?;
            writeln!(stdout, "Saved {}", written.display())?;
            Ok(())
        }
    }
}

/// Build a session over `notes_dir`, rendering assets against its absolute path.
pub fn open_session(notes_dir: &Path, config: &Config) -> Result<EditSession<FsNoteRepository>> {
    let assets_base = std::path::absolute(notes_dir)
        .with_context(|| format!("Failed to resolve notes directory {}", notes_dir.display()))?;
    debug!(?assets_base, "Resolved assets base");

    let repository =
        FsNoteRepository::new(notes_dir).with_match_mode(config.search.match_mode());
    Ok(EditSession::new(repository, MarkdownRenderer::new(assets_base)))
}

pub fn list_notes<R: NoteRepository>(
    session: &EditSession<R>,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let entries = session.list().context("Failed to list notes")?;
    info!(count = entries.len(), "Listing notes");

    if json {
        serde_json::to_writer_pretty(&mut *out, &entries)?;
        writeln!(out)?;
        return Ok(());
    }
    for entry in entries {
        let content = session
            .repository()
            .read_note(&entry.path)
            .unwrap_or_else(|e| {
                warn!(path = %entry.path.display(), error = %e, "Cannot read note, titling by file name");
                String::new()
            });
        let title = util::text::note_title(&content, &entry.path);
        writeln!(out, "{}\t{}", entry.path.display(), title)?;
    }
    Ok(())
}

pub fn view_note<R: NoteRepository>(
    session: &mut EditSession<R>,
    path: &Path,
    html_only: bool,
    out: &mut impl Write,
) -> Result<()> {
    let html = session
        .open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    if html_only {
        writeln!(out, "{html}")?;
        return Ok(());
    }

    let page = HtmlPresenter::new().render(&session.title(), &html);
    let mut renderer = ContentRenderer::new();
    let temp_path = renderer.create_temp_file(&page)?;
    renderer.open_in_browser(&temp_path)?;
    Ok(())
}

pub fn search_notes<R: NoteRepository>(
    session: &EditSession<R>,
    term: &str,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let hits = session
        .search(term)
        .with_context(|| format!("Search for '{term}' failed"))?;
    info!(term, count = hits.len(), "Search complete");

    if json {
        serde_json::to_writer_pretty(&mut *out, &hits)?;
        writeln!(out)?;
        return Ok(());
    }
    if hits.is_empty() {
        writeln!(out, "No matching files found.")?;
    }
    for hit in hits {
        writeln!(out, "{}: {}", hit.path.display(), hit.snippet)?;
    }
    Ok(())
}

/// Replace a note's content with `text`; an existing destination is opened first
/// so the save counts as an edit of that note.
pub fn write_note<R: NoteRepository>(
    session: &mut EditSession<R>,
    path: Option<&Path>,
    text: &str,
) -> Result<PathBuf> {
    match path {
        Some(path) if path.is_file() => {
            session.open(path)?;
        }
        _ => session.new_note(),
    }

    let outcome = session.edit(text);
    debug!(became_dirty = outcome.became_dirty, title = %session.title(), "Buffer updated");

    session.save(path).context("Failed to save note")
}
