use crate::document::text::collapse_whitespace;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Maximum total score of a report
pub const MAX_SCORE: f64 = 100.0;

/// One scored dimension: its facts, score and recommendations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component<F> {
    #[serde(flatten)]
    pub facts: F,
    pub score: f64,
    pub max_score: f64,
    pub recommendations: Vec<String>,
}

impl<F> Component<F> {
    /// Builds a component, clamping the raw score into `[0, max_score]`
    pub fn new(facts: F, raw_score: f64, max_score: f64, recommendations: Vec<String>) -> Self {
        let score = if raw_score.is_nan() {
            0.0
        } else {
            raw_score.clamp(0.0, max_score)
        };
        Self {
            facts,
            score,
            max_score,
            recommendations,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleFacts {
    pub content: String,
    pub length: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptionFacts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub length: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadingFacts {
    pub count: usize,
    pub content: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageFacts {
    pub total: usize,
    pub with_alt: usize,
    pub with_lazy_loading: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkFacts {
    pub internal: usize,
    pub external: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlFacts {
    pub length: usize,
    pub includes_keywords: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportFacts {
    pub has_viewport: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SslFacts {
    pub present: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadSpeedFacts {
    /// Fetch time in milliseconds
    pub time: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentLengthFacts {
    pub length: usize,
}

/// A frequent body word and its share of all words
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordEntry {
    pub word: String,
    pub count: usize,
    pub density: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordFacts {
    pub top_keywords: Vec<KeywordEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialFacts {
    pub og_tags: usize,
    pub twitter_tags: usize,
}

/// Heading components keyed by level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Headers {
    pub h1: Component<HeadingFacts>,
    pub h2: Component<HeadingFacts>,
    pub h3: Component<HeadingFacts>,
}

/// Every scored dimension of one analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoDetails {
    pub title: Component<TitleFacts>,
    pub description: Component<DescriptionFacts>,
    pub headers: Headers,
    pub images: Component<ImageFacts>,
    pub links: Component<LinkFacts>,
    pub url: Component<UrlFacts>,
    pub mobile_responsive: Component<ViewportFacts>,
    pub ssl: Component<SslFacts>,
    pub load_speed: Component<LoadSpeedFacts>,
    pub content_length: Component<ContentLengthFacts>,
    pub keyword_density: Component<KeywordFacts>,
    pub social_meta: Component<SocialFacts>,
}

/// Borrowed view of one dimension, independent of its facts
#[derive(Debug, Clone, Copy)]
pub struct Dimension<'a> {
    pub category: &'static str,
    pub score: f64,
    pub max_score: f64,
    pub recommendations: &'a [String],
}

impl<'a> Dimension<'a> {
    fn of<F>(category: &'static str, component: &'a Component<F>) -> Self {
        Self {
            category,
            score: component.score,
            max_score: component.max_score,
            recommendations: &component.recommendations,
        }
    }
}

impl SeoDetails {
    /// All dimensions in chart order
    pub fn dimensions(&self) -> Vec<Dimension<'_>> {
        vec![
            Dimension::of("title", &self.title),
            Dimension::of("description", &self.description),
            Dimension::of("h1", &self.headers.h1),
            Dimension::of("h2", &self.headers.h2),
            Dimension::of("h3", &self.headers.h3),
            Dimension::of("images", &self.images),
            Dimension::of("links", &self.links),
            Dimension::of("url", &self.url),
            Dimension::of("mobileResponsive", &self.mobile_responsive),
            Dimension::of("ssl", &self.ssl),
            Dimension::of("loadSpeed", &self.load_speed),
            Dimension::of("contentLength", &self.content_length),
            Dimension::of("keywordDensity", &self.keyword_density),
            Dimension::of("socialMeta", &self.social_meta),
        ]
    }

    /// Sum of all component scores, before rounding
    pub fn raw_total(&self) -> f64 {
        self.dimensions().iter().map(|d| d.score).sum()
    }
}

/// Three-tier classification of a score against its maximum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorBand {
    Good,
    Warn,
    Poor,
}

impl ColorBand {
    /// Classifies `score` out of `max`: at least 80% is good, at least 60% warn
    pub fn classify(score: f64, max: f64) -> Self {
        if max <= 0.0 {
            return ColorBand::Poor;
        }
        let percentage = score / max * 100.0;
        if percentage >= 80.0 {
            ColorBand::Good
        } else if percentage >= 60.0 {
            ColorBand::Warn
        } else {
            ColorBand::Poor
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorBand::Good => "good",
            ColorBand::Warn => "warn",
            ColorBand::Poor => "poor",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartEntry {
    pub category: String,
    pub score: f64,
    pub max_score: f64,
    pub color_band: ColorBand,
}

/// Complete result of analyzing one page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoReport {
    pub url: String,
    pub score: f64,
    pub max_score: f64,
    pub details: SeoDetails,
    pub chart_data: Vec<ChartEntry>,
    pub overall_color: ColorBand,
}

impl SeoReport {
    /// Aggregates the components into a report
    pub fn new(url: impl Into<String>, details: SeoDetails) -> Self {
        let score = details.raw_total().round().clamp(0.0, MAX_SCORE);

        let chart_data = details
            .dimensions()
            .iter()
            .map(|d| ChartEntry {
                category: d.category.to_string(),
                score: d.score,
                max_score: d.max_score,
                color_band: ColorBand::classify(d.score, d.max_score),
            })
            .collect();

        Self {
            url: url.into(),
            score,
            max_score: MAX_SCORE,
            details,
            chart_data,
            overall_color: ColorBand::classify(score, MAX_SCORE),
        }
    }

    /// Every recommendation paired with its category, in chart order
    pub fn all_recommendations(&self) -> Vec<(&'static str, &str)> {
        self.details
            .dimensions()
            .into_iter()
            .flat_map(|d| {
                d.recommendations
                    .iter()
                    .map(move |r| (d.category, r.as_str()))
            })
            .collect()
    }

    /// Human-readable summary
    pub fn render_text(&self) -> String {
        let d = &self.details;
        let mut out = String::new();

        // Writing to a String cannot fail
        let _ = writeln!(out, "SEO Analysis Results: {}", self.url);
        let _ = writeln!(
            out,
            "Score: {}/{} ({})",
            self.score,
            self.max_score,
            self.overall_color.as_str()
        );
        let _ = writeln!(out);

        let _ = writeln!(
            out,
            "Title: \"{}\" (length {}) - {:.1}/{}",
            collapse_whitespace(&d.title.facts.content),
            d.title.facts.length,
            d.title.score,
            d.title.max_score
        );
        let _ = writeln!(
            out,
            "Meta description: \"{}\" (length {}) - {:.1}/{}",
            collapse_whitespace(d.description.facts.content.as_deref().unwrap_or("")),
            d.description.facts.length,
            d.description.score,
            d.description.max_score
        );
        for (tag, heading) in [
            ("H1", &d.headers.h1),
            ("H2", &d.headers.h2),
            ("H3", &d.headers.h3),
        ] {
            let _ = writeln!(
                out,
                "{}: {} - {}/{}",
                tag, heading.facts.count, heading.score, heading.max_score
            );
        }
        let _ = writeln!(
            out,
            "Images: {} total, {} with alt, {} lazy - {:.1}/{}",
            d.images.facts.total,
            d.images.facts.with_alt,
            d.images.facts.with_lazy_loading,
            d.images.score,
            d.images.max_score
        );
        let _ = writeln!(
            out,
            "Links: {} internal, {} external - {:.1}/{}",
            d.links.facts.internal, d.links.facts.external, d.links.score, d.links.max_score
        );
        let _ = writeln!(
            out,
            "URL: length {}, includes keywords: {} - {:.1}/{}",
            d.url.facts.length,
            if d.url.facts.includes_keywords { "yes" } else { "no" },
            d.url.score,
            d.url.max_score
        );
        let _ = writeln!(
            out,
            "Mobile: {} - {}/{}",
            if d.mobile_responsive.facts.has_viewport {
                "responsive"
            } else {
                "not responsive"
            },
            d.mobile_responsive.score,
            d.mobile_responsive.max_score
        );
        let _ = writeln!(
            out,
            "SSL: {} - {}/{}",
            if d.ssl.facts.present { "present" } else { "not present" },
            d.ssl.score,
            d.ssl.max_score
        );
        let _ = writeln!(
            out,
            "Load time: {:.2}ms - {:.1}/{}",
            d.load_speed.facts.time, d.load_speed.score, d.load_speed.max_score
        );
        let _ = writeln!(
            out,
            "Content: {} characters - {:.1}/{}",
            d.content_length.facts.length, d.content_length.score, d.content_length.max_score
        );
        let keywords = d
            .keyword_density
            .facts
            .top_keywords
            .iter()
            .map(|kw| format!("{} {:.2}%", kw.word, kw.density * 100.0))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(
            out,
            "Keywords: {} - {}/{}",
            if keywords.is_empty() { "none" } else { &keywords },
            d.keyword_density.score,
            d.keyword_density.max_score
        );
        let _ = writeln!(
            out,
            "Social: {} Open Graph, {} Twitter - {}/{}",
            d.social_meta.facts.og_tags,
            d.social_meta.facts.twitter_tags,
            d.social_meta.score,
            d.social_meta.max_score
        );

        let recommendations = self.all_recommendations();
        if !recommendations.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "Recommendations:");
            for (category, text) in recommendations {
                let _ = writeln!(out, "  - [{}] {}", category, text);
            }
        }

        out
    }
}
