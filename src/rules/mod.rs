//! Scoring rules
//!
//! Each rule is a pure function of the parsed document and a [`RuleContext`],
//! returning one clamped [`Component`](crate::report::Component). Rules share
//! no state and may run in any order.

pub mod content;
pub mod headings;
pub mod images;
pub mod links;
pub mod meta;
pub mod timing;
pub mod url;

#[cfg(test)]
mod tests;

use crate::document::DocumentQuery;
use crate::error::Result;
use crate::report::{Headers, SeoDetails};
use ::url::Url;

/// Per-page inputs besides the document itself
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    /// Parsed page URL
    pub url: &'a Url,
    /// URL exactly as the caller supplied it
    pub raw_url: &'a str,
    /// Fetch time in milliseconds
    pub load_time_ms: f64,
}

impl<'a> RuleContext<'a> {
    pub fn new(url: &'a Url, raw_url: &'a str, load_time_ms: f64) -> Self {
        Self {
            url,
            raw_url,
            load_time_ms,
        }
    }
}

/// Runs every rule against the document
pub fn score_all(doc: &dyn DocumentQuery, ctx: &RuleContext<'_>) -> Result<SeoDetails> {
    let details = SeoDetails {
        title: meta::title(doc)?,
        description: meta::description(doc)?,
        headers: Headers {
            h1: headings::h1(doc)?,
            h2: headings::h2(doc)?,
            h3: headings::h3(doc)?,
        },
        images: images::images(doc)?,
        links: links::links(doc, ctx)?,
        url: self::url::url_structure(ctx),
        mobile_responsive: meta::viewport(doc)?,
        ssl: self::url::ssl(ctx),
        load_speed: timing::load_speed(ctx),
        content_length: content::content_length(doc)?,
        keyword_density: content::keyword_density(doc)?,
        social_meta: meta::social(doc)?,
    };

    for d in details.dimensions() {
        ::log::debug!("Rule {}: {:.2}/{}", d.category, d.score, d.max_score);
    }

    Ok(details)
}
