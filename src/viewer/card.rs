// src/viewer/card.rs
use std::fmt::Write as _;
use std::time::Duration;

use crate::core::sanitize::{escape_html, js_string_literal};
use crate::data::NormalizedQuote;

/// Display model for one quote.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card<'a> {
    pub text: &'a str,
    pub author: &'a str,
    pub tags: &'a [String],
}

impl<'a> From<&'a NormalizedQuote> for Card<'a> {
    fn from(q: &'a NormalizedQuote) -> Self {
        Self { text: &q.text, author: &q.author, tags: &q.tags }
    }
}

const CARD_CSS: &str = r#"
body {
    margin: 0;
    background: transparent;
    color: white;
    font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
}
.card {
    background-color: rgba(255,255,255,0.04);
    padding: 2.5rem;
    border-radius: 24px;
    max-width: 700px;
    margin: 2rem auto;
    box-shadow: 0 10px 30px rgba(0,0,0,0.25);
}
.quote { font-size: 1.25rem; line-height: 1.75; font-weight: 500; min-height: 6rem; }
.author { margin-top: 1.8rem; font-size: 0.9rem; opacity: 0.7; font-weight: 600; }
.tags { margin-top: 1.4rem; text-align: center; }
.tag {
    display: inline-block;
    padding: 0.35rem 0.7rem;
    margin: 0.25rem;
    border-radius: 999px;
    background-color: rgba(255,255,255,0.08);
    font-size: 0.75rem;
}
"#;

impl Card<'_> {
    /// Standalone HTML document with the typewriter reveal.
    ///
    /// Author and tags go in as escaped markup. The quote text goes in as a
    /// JS string literal and is appended as text nodes, so it is never
    /// parsed as HTML.
    pub fn to_html(&self, delay: Duration) -> String {
        let mut tags_html = String::new();
        for tag in self.tags {
            let _ = write!(tags_html, "<span class=\"tag\">{}</span>", escape_html(tag));
        }

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<style>{css}</style>
</head>
<body>
    <div class="card">
        <div id="quote" class="quote"></div>
        <div class="author">— {author}</div>
        <div class="tags">{tags}</div>
    </div>
    <script>
        const text = Array.from({text});
        const el = document.getElementById("quote");
        let i = 0;
        function typeChar() {{
            if (i < text.length) {{
                el.textContent += text[i];
                i++;
                setTimeout(typeChar, {delay});
            }}
        }}
        typeChar();
    </script>
</body>
</html>
"#,
            css = CARD_CSS,
            author = escape_html(self.author),
            tags = tags_html,
            text = js_string_literal(self.text),
            delay = delay.as_millis(),
        )
    }
}
