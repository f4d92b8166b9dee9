//! Input normalization for note fields.
//!
//! Titles are plain text: they are cut to length and HTML-escaped so they can be
//! rendered anywhere. Content is markup from a trusted rich-text editor: it is cut to
//! length and nothing else. This is a narrow trust boundary, not a sanitizer. Markup
//! in `content` is stored as received, and any renderer that does not trust the
//! editor must sanitize it itself.

/// Cut `s` to at most `max` characters without splitting a code point.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Escape the five HTML-significant characters.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Normalize a title: truncate first, then escape.
pub fn normalize_title(raw: &str, max_chars: usize) -> String {
    escape_html(truncate_chars(raw, max_chars))
}

/// Normalize rich-text content: length limit only.
pub fn normalize_content(raw: &str, max_chars: usize) -> String {
    truncate_chars(raw, max_chars).to_string()
}
