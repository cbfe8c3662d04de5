mod scenario_tests;
mod url_tests;

use crate::document::HtmlDocument;

/// Wraps head and body markup into a full document
pub(super) fn page(head: &str, body: &str) -> HtmlDocument {
    HtmlDocument::parse(&format!(
        "<html><head>{}</head><body>{}</body></html>",
        head, body
    ))
}
