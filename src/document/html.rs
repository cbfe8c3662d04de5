use crate::document::{DocumentQuery, Element};
use crate::error::{AnalysisError, Result};
use scraper::{ElementRef, Html, Selector};

/// HTML document backed by `scraper`
pub struct HtmlDocument {
    doc: Html,
}

impl HtmlDocument {
    /// Parses an HTML string; malformed markup is recovered, never rejected
    pub fn parse(html: &str) -> Self {
        Self {
            doc: Html::parse_document(html),
        }
    }
}

impl DocumentQuery for HtmlDocument {
    fn select(&self, selector: &str) -> Result<Vec<Element>> {
        let parsed = Selector::parse(selector)
            .map_err(|e| AnalysisError::Parse(format!("invalid selector '{}': {}", selector, e)))?;

        let elements = self
            .doc
            .select(&parsed)
            .map(snapshot)
            .collect::<Vec<_>>();

        ::log::trace!("Selector '{}' matched {} elements", selector, elements.len());
        Ok(elements)
    }
}

fn snapshot(el: ElementRef<'_>) -> Element {
    let value = el.value();
    let attrs = value
        .attrs()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Element::new(value.name(), el.text().collect::<String>(), attrs)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r##"<html><head>
        <title>  Example Title  </title>
        <meta name="description" content="First">
        <meta name="description" content="Second">
        <meta property="og:title" content="OG">
        <meta property="og:type" content="website">
        <meta name="twitter:card" content="summary">
        </head><body>
        <h1>Main <em>heading</em></h1>
        <a href="#top">Top</a>
        <a href="https://example.com/about">About</a>
        </body></html>"##;

    #[test]
    fn test_select_by_tag() {
        let doc = HtmlDocument::parse(PAGE);
        let title = doc.select_first("title").unwrap().unwrap();
        assert_eq!(title.text(), "Example Title");
        assert_eq!(title.raw_text(), "  Example Title  ");
    }

    #[test]
    fn test_nested_text_is_concatenated() {
        let doc = HtmlDocument::parse(PAGE);
        let h1 = doc.select("h1").unwrap();
        assert_eq!(h1.len(), 1);
        assert_eq!(h1[0].text(), "Main heading");
    }

    #[test]
    fn test_attribute_equality_takes_document_order() {
        let doc = HtmlDocument::parse(PAGE);
        let desc = doc.select_first(r#"meta[name="description"]"#).unwrap().unwrap();
        assert_eq!(desc.attr("content"), Some("First"));
        assert_eq!(doc.count(r#"meta[name="description"]"#).unwrap(), 2);
    }

    #[test]
    fn test_attribute_prefix() {
        let doc = HtmlDocument::parse(PAGE);
        assert_eq!(doc.count(r#"meta[property^="og:"]"#).unwrap(), 2);
        assert_eq!(doc.count(r#"meta[name^="twitter:"]"#).unwrap(), 1);
    }

    #[test]
    fn test_missing_elements() {
        let doc = HtmlDocument::parse("<p>nothing here</p>");
        assert!(doc.select("img").unwrap().is_empty());
        assert!(doc.select_first("title").unwrap().is_none());
    }

    #[test]
    fn test_invalid_selector_is_parse_error() {
        let doc = HtmlDocument::parse(PAGE);
        let result = doc.select("a[[");
        assert!(matches!(result, Err(AnalysisError::Parse(_))));
        assert!(matches!(doc.count("a[]"), Err(AnalysisError::Parse(_))));
    }
}
