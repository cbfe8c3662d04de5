use regex::Regex;
use std::sync::LazyLock;

/// ASCII word characters, matching `\w` outside Unicode mode
static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9_]+").expect("valid regex"));

/// Splits text into lowercase word tokens
///
/// Runs of ASCII letters, digits and underscores form one token; everything
/// else is a separator.
pub fn tokenize_words(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Length in Unicode scalar values
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Collapses every run of whitespace into a single space
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
