//! Text helpers shared by every field extractor.

/// Whitespace for trimming and tokenizing: Unicode `White_Space` plus U+FEFF
pub fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Strips leading and trailing whitespace, U+FEFF included
pub fn trim(text: &str) -> &str {
    text.trim_matches(is_space)
}

/// Returns true if the text has anything left after trimming.
///
/// This is the single "skip if empty" rule applied to link text, headings,
/// paragraphs, list items and table cells.
pub fn is_meaningful(text: &str) -> bool {
    !trim(text).is_empty()
}

/// Trims the text and returns it only if it is meaningful
pub fn meaningful(text: &str) -> Option<String> {
    let trimmed = trim(text);
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_space).filter(|token| !token.is_empty())
}

/// Collapses every run of whitespace into a single space and trims the ends
pub fn collapse_whitespace(text: &str) -> String {
    tokens(text).collect::<Vec<_>>().join(" ")
}

/// Counts whitespace-delimited, non-empty tokens
pub fn word_count(text: &str) -> usize {
    tokens(text).count()
}
