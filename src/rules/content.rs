use crate::document::DocumentQuery;
use crate::document::text::{char_len, tokenize_words};
use crate::error::Result;
use crate::report::{Component, ContentLengthFacts, KeywordEntry, KeywordFacts};
use std::collections::HashMap;

const CONTENT_LENGTH_MAX: f64 = 10.0;
const KEYWORD_DENSITY_MAX: f64 = 5.0;

/// Characters of body text per point
const CHARS_PER_POINT: f64 = 300.0;
/// Densities above this count as keyword stuffing
const STUFFING_DENSITY: f64 = 0.03;
const TOP_KEYWORDS: usize = 5;
/// Words must be longer than this to count as keywords
const MIN_KEYWORD_LEN: usize = 3;

/// One point per 300 characters of body text
pub fn content_length(doc: &dyn DocumentQuery) -> Result<Component<ContentLengthFacts>> {
    let length = char_len(&doc.raw_text_of("body")?);

    let mut recommendations = Vec::new();
    if (length as f64) < CHARS_PER_POINT {
        recommendations.push("Add more content to your page for better SEO.".to_string());
    }

    Ok(Component::new(
        ContentLengthFacts { length },
        length as f64 / CHARS_PER_POINT,
        CONTENT_LENGTH_MAX,
        recommendations,
    ))
}

/// One point per top keyword whose density stays below the stuffing threshold
pub fn keyword_density(doc: &dyn DocumentQuery) -> Result<Component<KeywordFacts>> {
    let words = tokenize_words(&doc.raw_text_of("body")?);
    let top_keywords = top_keywords(&words);

    let score = top_keywords
        .iter()
        .filter(|kw| kw.density < STUFFING_DENSITY)
        .count() as f64;

    let mut recommendations = Vec::new();
    if top_keywords.iter().any(|kw| kw.density > STUFFING_DENSITY) {
        recommendations
            .push("Avoid keyword stuffing. Aim for a natural keyword density.".to_string());
    }

    Ok(Component::new(
        KeywordFacts { top_keywords },
        score,
        KEYWORD_DENSITY_MAX,
        recommendations,
    ))
}

/// Most frequent keywords, ties kept in order of first appearance
pub fn top_keywords(words: &[String]) -> Vec<KeywordEntry> {
    let word_count = words.len();
    if word_count == 0 {
        return Vec::new();
    }

    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for word in words.iter().filter(|w| char_len(w) > MIN_KEYWORD_LEN) {
        let word = word.as_str();
        match index.get(word) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(word, counts.len());
                counts.push((word, 1));
            }
        }
    }

    // Stable sort keeps first-appearance order among equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .take(TOP_KEYWORDS)
        .map(|(word, count)| KeywordEntry {
            word: word.to_string(),
            count,
            density: count as f64 / word_count as f64,
        })
        .collect()
}
