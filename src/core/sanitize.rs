// src/core/sanitize.rs

use crate::config::consts::QUOTE_CHARS;

/// Collapse whitespace runs to a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Quote text cleanup: newlines → spaces, then trim whitespace and peel
/// surrounding quote marks (straight and curly) until neither end has any.
pub fn clean_text(s: &str) -> String {
    let flat = s.replace(['\r', '\n'], " ");
    let mut cur = flat.as_str();
    loop {
        let next = cur.trim().trim_matches(QUOTE_CHARS);
        if next.len() == cur.len() { break; }
        cur = next;
    }
    cur.to_string()
}

/// Escape for HTML text and attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + s.len() / 8);
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

/// A JS string literal that is safe to drop inside a `<script>` block.
pub fn js_string_literal(s: &str) -> String {
    // serde_json gives us correct JS escaping; `<` is the only char left that
    // can close the surrounding script element.
    serde_json::to_string(s)
        .unwrap_or_else(|_| s!("\"\""))
        .replace('<', "\\u003c")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_text_strips_mixed_quotes_and_newlines() {
        assert_eq!(clean_text("  “Hello.”\n"), "Hello.");
        assert_eq!(clean_text("'a\nb'"), "a b");
        assert_eq!(clean_text("\"\""), "");
        assert_eq!(clean_text("‘It’s fine’"), "It’s fine");
        assert_eq!(clean_text("“ \"nested\" ”"), "nested");
    }

    #[test]
    fn escape_covers_markup_chars() {
        assert_eq!(
            escape_html(r#"<b a="x">&'"#),
            "&lt;b a=&quot;x&quot;&gt;&amp;&#x27;"
        );
    }

    #[test]
    fn js_literal_cannot_close_script() {
        let lit = js_string_literal("</script><script>alert(1)</script>`${x}`");
        assert!(!lit.contains("</script>"));
        assert!(lit.starts_with('"') && lit.ends_with('"'));
    }
}
