//! Highlighter
//!
//! Wraps every case-insensitive occurrence of the search term in `<mark>`,
//! preserving the matched text's original casing. Matching runs against the
//! raw text; escaping happens per segment afterwards, so a term like `amp`
//! never matches inside an `&amp;` entity produced by the escaping itself.

use regex::RegexBuilder;

/// Escapes text for HTML and marks every occurrence of `term` in it.
///
/// An empty term or empty text comes back unwrapped.
pub fn highlight(text: &str, term: &str) -> String {
    if term.is_empty() || text.is_empty() {
        return escape_html(text);
    }

    let pattern = regex::escape(term);
    let re = RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .expect("escaped literal is a valid pattern");

    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for found in re.find_iter(text) {
        out.push_str(&escape_html(&text[last..found.start()]));
        out.push_str("<mark>");
        out.push_str(&escape_html(found.as_str()));
        out.push_str("</mark>");
        last = found.end();
    }
    out.push_str(&escape_html(&text[last..]));
    out
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
