use crate::document::text::char_len;
use crate::report::{Component, SslFacts, UrlFacts};
use crate::rules::RuleContext;
use regex::Regex;
use std::sync::LazyLock;

const URL_MAX: f64 = 10.0;
const SSL_MAX: f64 = 10.0;

/// Lowercase slug words joined by hyphens
static KEYWORD_SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z0-9]+(?:-[a-z0-9]+)*").expect("valid regex"));

/// URLs up to this length earn the full length half of the score
const IDEAL_URL_LEN: f64 = 50.0;

/// Half for brevity, half for a keyword slug in the path
pub fn url_structure(ctx: &RuleContext<'_>) -> Component<UrlFacts> {
    let length = char_len(ctx.raw_url);
    let includes_keywords = KEYWORD_SLUG_RE.is_match(ctx.url.path());

    let length_score = (5.0 - (length as f64 - IDEAL_URL_LEN) / 10.0).clamp(0.0, 5.0);
    let keyword_score = if includes_keywords { 5.0 } else { 0.0 };

    let mut recommendations = Vec::new();
    if !includes_keywords {
        recommendations.push("Use keywords in your URL for better SEO.".to_string());
    }
    if length > 100 {
        recommendations.push(
            "Consider shortening your URL for better user experience and SEO.".to_string(),
        );
    }

    Component::new(
        UrlFacts {
            length,
            includes_keywords,
        },
        length_score + keyword_score,
        URL_MAX,
        recommendations,
    )
}

/// Full score for pages served over https
pub fn ssl(ctx: &RuleContext<'_>) -> Component<SslFacts> {
    let present = ctx.url.scheme() == "https";

    let mut recommendations = Vec::new();
    if !present {
        recommendations.push("Implement SSL (HTTPS) for improved security and SEO.".to_string());
    }

    Component::new(
        SslFacts { present },
        if present { SSL_MAX } else { 0.0 },
        SSL_MAX,
        recommendations,
    )
}
