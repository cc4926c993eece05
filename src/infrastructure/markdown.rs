// src/infrastructure/markdown.rs
use crate::constants::{ASSETS_DIR, IMAGE_DISPLAY_SIZE_PX};
use lazy_static::lazy_static;
use pulldown_cmark::{html, Options, Parser};
use regex::{NoExpand, Regex};
use std::path::{Path, PathBuf};
use tracing::instrument;

lazy_static! {
    // src attribute pointing into the shared assets folder
    static ref ASSET_SRC_REGEX: Regex = Regex::new(&format!(r#"\bsrc="{}/"#, ASSETS_DIR))
        .expect("Failed to compile asset src regex");
    static ref IMG_TAG_REGEX: Regex =
        Regex::new(r"<img\s+").expect("Failed to compile img tag regex");
}

/// Markdown to HTML conversion for the live preview.
///
/// Images referenced as `assets/<name>` are rewritten to `<base>/assets/<name>`
/// so notes in any subdirectory share one assets folder, and every image is
/// forced to a fixed square display size.
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    assets_base: PathBuf,
}

impl MarkdownRenderer {
    /// `assets_base` is the directory containing `assets/`, normally the absolute notes root.
    pub fn new(assets_base: impl Into<PathBuf>) -> Self {
        Self {
            assets_base: assets_base.into(),
        }
    }

    #[instrument(level = "trace", skip_all, fields(bytes = text.len()))]
    pub fn render(&self, text: &str) -> String {
        let html = markdown_to_html(text);
        let html = rewrite_asset_paths(&html, &self.assets_base);
        force_image_size(&html)
    }
}

pub fn markdown_to_html(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(text, options);

    let mut html_output = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut html_output, parser);
    html_output
}

fn rewrite_asset_paths(html: &str, assets_base: &Path) -> String {
    let base = assets_base.to_string_lossy();
    let replacement = format!(
        r#"src="{}/{}/"#,
        base.trim_end_matches(['/', '\\']),
        ASSETS_DIR
    );
    ASSET_SRC_REGEX
        .replace_all(html, NoExpand(&replacement))
        .into_owned()
}

fn force_image_size(html: &str) -> String {
    let replacement = format!(
        r#"<img style="width:{size}px; height:{size}px;" "#,
        size = IMAGE_DISPLAY_SIZE_PX
    );
    IMG_TAG_REGEX
        .replace_all(html, NoExpand(&replacement))
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn renderer() -> MarkdownRenderer {
        MarkdownRenderer::new("/home/me/notes")
    }

    #[test]
    fn given_markdown_text_when_rendering_then_produces_html() {
        let html = renderer().render("**bold** and *italic*");

        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<em>italic</em>"));
    }

    #[test]
    fn given_heading_and_paragraph_when_rendering_then_produces_both_blocks() {
        let html = renderer().render("# Hello\nworld");

        assert!(html.contains("<h1>Hello</h1>"));
        assert!(html.contains("<p>world</p>"));
    }

    #[test]
    fn given_asset_image_when_rendering_then_rewrites_to_base_dir() {
        let html = renderer().render("![diagram](assets/x.png)");

        assert!(html.contains(r#"src="/home/me/notes/assets/x.png""#));
        assert!(!html.contains(r#"src="assets/"#));
    }

    #[test]
    fn given_base_with_trailing_slash_when_rendering_then_no_double_slash() {
        let html = MarkdownRenderer::new("/home/me/notes/").render("![a](assets/x.png)");

        assert!(html.contains(r#"src="/home/me/notes/assets/x.png""#));
    }

    #[test]
    fn given_base_with_dollar_sign_when_rendering_then_inserted_verbatim() {
        let html = MarkdownRenderer::new("/tmp/$HOME").render("![a](assets/x.png)");

        assert!(html.contains(r#"src="/tmp/$HOME/assets/x.png""#));
    }

    #[rstest]
    #[case("![a](other/x.png)", r#"src="other/x.png""#)]
    #[case("![a](https://example.com/assets/x.png)", r#"src="https://example.com/assets/x.png""#)]
    #[case("![a](myassets/x.png)", r#"src="myassets/x.png""#)]
    fn test_non_asset_sources_untouched(#[case] markdown: &str, #[case] expected: &str) {
        let html = renderer().render(markdown);
        assert!(html.contains(expected), "{html}");
    }

    #[test]
    fn given_multiple_images_when_rendering_then_every_image_has_fixed_size() {
        let markdown = "![one](assets/a.png)\n\n![two](https://example.com/b.png)\n\n<img src=\"assets/c.png\">";

        let html = renderer().render(markdown);

        assert_eq!(html.matches("<img ").count(), 3);
        assert_eq!(
            html.matches(r#"<img style="width:500px; height:500px;" "#).count(),
            3
        );
        assert!(html.contains(r#"src="/home/me/notes/assets/c.png""#));
    }

    #[test]
    fn given_same_input_when_rendering_twice_then_output_identical() {
        let text = "# T\n\n- a\n- b\n\n![x](assets/x.png)\n\n| a | b |\n|---|---|\n| 1 | 2 |";
        let r = renderer();

        assert_eq!(r.render(text), r.render(text));
    }

    #[test]
    fn given_table_when_rendering_then_uses_table_markup() {
        let html = renderer().render("| a | b |\n|---|---|\n| 1 | 2 |");

        assert!(html.contains("<table>"));
        assert!(html.contains("<td>1</td>"));
    }

    #[test]
    fn given_code_block_when_rendering_then_wraps_with_language_class() {
        let html = renderer().render("```rust\nfn main() {}\n```");

        assert!(html.contains("<pre><code class=\"language-rust\">"));
        assert!(html.contains("fn main() {}"));
    }

    #[rstest]
    #[case("[unclosed link(")]
    #[case("**never closed")]
    #[case("![img](")]
    #[case("")]
    fn test_malformed_markdown_degrades_to_text(#[case] markdown: &str) {
        let html = renderer().render(markdown);
        assert!(!html.contains("<img"));
    }
}
