use crate::document::DocumentQuery;
use crate::error::Result;
use crate::report::{Component, LinkFacts};
use crate::rules::RuleContext;

const LINKS_MAX: f64 = 10.0;
const INTERNAL_WEIGHT: f64 = 0.5;
const EXTERNAL_WEIGHT: f64 = 0.25;

/// Weighted count of internal and external anchors
///
/// Anchors without an href, with an empty href, or pointing at an in-page
/// fragment are ignored. A link is internal when its href mentions the
/// page's host.
pub fn links(doc: &dyn DocumentQuery, ctx: &RuleContext<'_>) -> Result<Component<LinkFacts>> {
    let host = ctx.url.host_str().unwrap_or_default();

    let (internal, external) = doc
        .select("a")?
        .iter()
        .filter_map(|a| a.attr("href"))
        .filter(|href| !href.is_empty() && !href.starts_with('#'))
        .fold((0usize, 0usize), |(internal, external), href| {
            if !host.is_empty() && href.contains(host) {
                (internal + 1, external)
            } else {
                (internal, external + 1)
            }
        });

    ::log::debug!(
        "Found {} internal and {} external links for host '{}'",
        internal,
        external,
        host
    );

    let mut recommendations = Vec::new();
    if internal == 0 {
        recommendations.push(
            "Add internal links to improve site structure and user navigation.".to_string(),
        );
    }
    if external == 0 {
        recommendations
            .push("Consider adding some external links to authoritative sources.".to_string());
    }

    Ok(Component::new(
        LinkFacts { internal, external },
        internal as f64 * INTERNAL_WEIGHT + external as f64 * EXTERNAL_WEIGHT,
        LINKS_MAX,
        recommendations,
    ))
}
