// src/infrastructure/search.rs
use crate::constants::SNIPPET_CONTEXT_CHARS;
use crate::domain::{DomainError, SearchHit};
use crate::infrastructure::file_store::{is_note_file, walk_error};
use regex::{Regex, RegexBuilder};
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use tracing::{debug, instrument};
use walkdir::WalkDir;

/// How a search term is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// The term is a regular expression; special characters keep their meaning.
    #[default]
    Regex,
    /// The term is escaped and matched as plain text.
    Literal,
}

/// Case-insensitive search over every `.md` file under `root`, `assets` included.
///
/// Emits one hit per non-overlapping match, ordered by walk order and then by
/// match position. An empty term yields no hits. Any unreadable file aborts the
/// whole search.
#[instrument(level = "debug", skip(root), fields(root = %root.display()))]
pub fn search_tree(root: &Path, term: &str, mode: MatchMode) -> Result<Vec<SearchHit>, DomainError> {
    if term.is_empty() {
        return Ok(Vec::new());
    }
    let regex = compile_term(term, mode)?;

    let mut hits = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| walk_error(root, e))?;
        if !is_note_file(&entry) {
            continue;
        }
        let content =
            fs::read_to_string(entry.path()).map_err(|e| DomainError::io(entry.path(), e))?;

        hits.extend(snippets(&content, &regex).into_iter().map(|snippet| SearchHit {
            path: entry.path().to_path_buf(),
            snippet,
        }));
    }

    debug!(count = hits.len(), "Search finished");
    Ok(hits)
}

pub fn compile_term(term: &str, mode: MatchMode) -> Result<Regex, DomainError> {
    let pattern = match mode {
        MatchMode::Regex => term.to_string(),
        MatchMode::Literal => regex::escape(term),
    };
    RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| DomainError::InvalidPattern {
            pattern: term.to_string(),
            message: e.to_string(),
        })
}

/// Context around each match of `regex` in `content`, newlines collapsed to spaces.
///
/// `\r\n` and lone `\r` count as a single `\n` before matching.
pub fn snippets(content: &str, regex: &Regex) -> Vec<String> {
    let content = normalize_newlines(content);
    let content = content.as_ref();
    regex
        .find_iter(content)
        .map(|m| {
            let (start, end) = snippet_bounds(content, m.start(), m.end());
            content[start..end].replace('\n', " ")
        })
        .collect()
}

fn normalize_newlines(content: &str) -> Cow<'_, str> {
    if content.contains('\r') {
        Cow::Owned(content.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(content)
    }
}

/// Byte range covering up to `SNIPPET_CONTEXT_CHARS` characters on each side of a match.
fn snippet_bounds(content: &str, match_start: usize, match_end: usize) -> (usize, usize) {
    let start = content[..match_start]
        .char_indices()
        .rev()
        .nth(SNIPPET_CONTEXT_CHARS - 1)
        .map_or(0, |(i, _)| i);
    let end = content[match_end..]
        .char_indices()
        .nth(SNIPPET_CONTEXT_CHARS)
        .map_or(content.len(), |(i, _)| match_end + i);
    (start, end)
}
