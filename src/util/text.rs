// src/util/text.rs
use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;

lazy_static! {
    // ATX heading marker or blockquote/list prefix at the start of a line
    static ref LINE_PREFIX_REGEX: Regex =
        Regex::new(r"^\s*(?:#{1,6}\s+|>\s*|[-*+]\s+)").expect("Failed to compile line prefix regex");
}

/// Extract a display title from markdown: the first non-empty line with any
/// heading, quote or bullet marker removed.
///
/// # Examples
///
/// ```
/// use bambam::util::text::extract_title;
///
/// assert_eq!(extract_title("\n# Shopping list\n- eggs"), "Shopping list");
/// ```
pub fn extract_title(markdown: &str) -> String {
    markdown
        .lines()
        .map(|line| LINE_PREFIX_REGEX.replace(line, "").trim().to_string())
        .find(|line| !line.is_empty())
        .unwrap_or_default()
}

/// Title for a listing row, falling back to the file stem for empty notes.
pub fn note_title(markdown: &str, path: &Path) -> String {
    let title = extract_title(markdown);
    if !title.is_empty() {
        return title;
    }
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
