//! Text sanitization
//!
//! Single-line fields are stripped of CR/LF so user input can never smuggle
//! extra lines into generated content, and all user text is HTML-escaped
//! before interpolation into the HTML email body. The plain-text alternative
//! body keeps the unescaped value.

/// Trim whitespace and remove CR/LF from a single-line field.
pub fn sanitize_single_line(value: &str) -> String {
    value.trim().replace(['\r', '\n'], "")
}

/// Trim a multi-line field without touching interior newlines.
pub fn sanitize_multi_line(value: &str) -> String {
    value.trim().to_string()
}

/// Escape the five HTML-significant characters.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
