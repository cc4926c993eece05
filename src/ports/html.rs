// src/ports/html.rs
use html_escape::encode_text;

/// Wraps a rendered note fragment into a standalone HTML page for the browser preview.
#[derive(Debug, Default)]
pub struct HtmlPresenter;

impl HtmlPresenter {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, title: &str, body: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            line-height: 1.6;
            max-width: 800px;
            margin: 2rem auto;
            padding: 0 1rem;
            background-color: #ffffff;
        }}
        pre {{
            white-space: pre-wrap;
            word-wrap: break-word;
            background-color: #f8f9fa;
            padding: 1rem;
            border-radius: 4px;
            overflow-x: auto;
        }}
        code {{
            background-color: #f0f0f0;
            padding: 2px 4px;
            border-radius: 3px;
            font-family: monospace;
        }}
        table {{
            border-collapse: collapse;
        }}
        th, td {{
            border: 1px solid #ddd;
            padding: 4px 8px;
        }}
    </style>
</head>
<body>
    <div class="note">
{body}
    </div>
</body>
</html>"#,
            title = encode_text(title),
            body = body,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn given_fragment_when_rendering_then_embeds_it_unescaped() {
        let presenter = HtmlPresenter::new();

        let page = presenter.render("a.md - Bam Bam", "<h1>Hello</h1>");

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>a.md - Bam Bam</title>"));
        assert!(page.contains("<h1>Hello</h1>"));
    }

    #[rstest]
    #[case("<script>.md", "&lt;script&gt;.md")]
    #[case("R&D.md", "R&amp;D.md")]
    fn test_title_is_escaped(#[case] title: &str, #[case] expected: &str) {
        let page = HtmlPresenter::new().render(title, "");
        assert!(page.contains(&format!("<title>{expected}</title>")));
    }
}
