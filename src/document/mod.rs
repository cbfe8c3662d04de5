pub mod html;
pub mod text;

pub use html::HtmlDocument;

use crate::error::Result;

/// Owned snapshot of a matched element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    raw_text: String,
    attrs: Vec<(String, String)>,
}

impl Element {
    /// Creates an element snapshot from its tag name, text and attributes
    pub fn new(
        name: impl Into<String>,
        raw_text: impl Into<String>,
        attrs: Vec<(String, String)>,
    ) -> Self {
        Self {
            name: name.into(),
            raw_text: raw_text.into(),
            attrs,
        }
    }

    /// Lowercase tag name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Text content with leading and trailing whitespace removed
    pub fn text(&self) -> &str {
        self.raw_text.trim()
    }

    /// Concatenated descendant text, untouched
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// Attribute value, if present
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Query surface consumed by the scoring rules
///
/// Selectors use CSS syntax: tag names, attribute equality
/// (`meta[name="description"]`) and attribute prefix (`meta[property^="og:"]`).
pub trait DocumentQuery {
    /// Every element matching the selector, in document order
    fn select(&self, selector: &str) -> Result<Vec<Element>>;

    /// First element matching the selector
    fn select_first(&self, selector: &str) -> Result<Option<Element>> {
        Ok(self.select(selector)?.into_iter().next())
    }

    /// Number of elements matching the selector
    fn count(&self, selector: &str) -> Result<usize> {
        Ok(self.select(selector)?.len())
    }

    /// Concatenated untrimmed text of every match
    fn raw_text_of(&self, selector: &str) -> Result<String> {
        Ok(self
            .select(selector)?
            .iter()
            .map(Element::raw_text)
            .collect())
    }
}
