use crate::document::DocumentQuery;
use crate::document::text::char_len;
use crate::error::Result;
use crate::report::{Component, DescriptionFacts, SocialFacts, TitleFacts, ViewportFacts};

const TITLE_MAX: f64 = 10.0;
const DESCRIPTION_MAX: f64 = 10.0;
const VIEWPORT_MAX: f64 = 10.0;
const SOCIAL_MAX: f64 = 5.0;

/// Title length with the highest score
const IDEAL_TITLE_LEN: f64 = 55.0;
/// Meta description length with the highest score
const IDEAL_DESCRIPTION_LEN: f64 = 150.0;

/// Scores the `<title>` text by distance from the ideal length
pub fn title(doc: &dyn DocumentQuery) -> Result<Component<TitleFacts>> {
    let content = doc.raw_text_of("title")?.trim().to_string();
    let length = char_len(&content);

    let mut recommendations = Vec::new();
    let score = if content.is_empty() {
        recommendations.push("Add a title tag to your page.".to_string());
        0.0
    } else {
        if !(30..=60).contains(&length) {
            recommendations.push(
                "Adjust title length to be between 30-60 characters for optimal SEO.".to_string(),
            );
        }
        TITLE_MAX - (IDEAL_TITLE_LEN - length as f64).abs() / 3.0
    };

    Ok(Component::new(
        TitleFacts { content, length },
        score,
        TITLE_MAX,
        recommendations,
    ))
}

/// Scores the first `meta[name="description"]` by distance from the ideal length
pub fn description(doc: &dyn DocumentQuery) -> Result<Component<DescriptionFacts>> {
    let content = first_content(doc, r#"meta[name="description"]"#)?;
    let length = content.as_deref().map(char_len).unwrap_or(0);

    let mut recommendations = Vec::new();
    let score = match &content {
        Some(_) => {
            if !(120..=160).contains(&length) {
                recommendations.push(
                    "Adjust meta description length to be between 120-160 characters.".to_string(),
                );
            }
            DESCRIPTION_MAX - (IDEAL_DESCRIPTION_LEN - length as f64).abs() / 7.0
        }
        None => {
            recommendations.push("Add a meta description to your page.".to_string());
            0.0
        }
    };

    Ok(Component::new(
        DescriptionFacts { content, length },
        score,
        DESCRIPTION_MAX,
        recommendations,
    ))
}

/// Full score when a viewport meta tag with content is present
pub fn viewport(doc: &dyn DocumentQuery) -> Result<Component<ViewportFacts>> {
    let has_viewport = first_content(doc, r#"meta[name="viewport"]"#)?.is_some();

    let mut recommendations = Vec::new();
    if !has_viewport {
        recommendations
            .push("Add a viewport meta tag to ensure mobile responsiveness.".to_string());
    }

    Ok(Component::new(
        ViewportFacts { has_viewport },
        if has_viewport { VIEWPORT_MAX } else { 0.0 },
        VIEWPORT_MAX,
        recommendations,
    ))
}

/// Half a point per Open Graph or Twitter Card meta tag
pub fn social(doc: &dyn DocumentQuery) -> Result<Component<SocialFacts>> {
    let og_tags = doc.count(r#"meta[property^="og:"]"#)?;
    let twitter_tags = doc.count(r#"meta[name^="twitter:"]"#)?;

    let mut recommendations = Vec::new();
    if og_tags == 0 {
        recommendations
            .push("Add Open Graph meta tags for better social media sharing.".to_string());
    }
    if twitter_tags == 0 {
        recommendations.push("Add Twitter Card meta tags for better Twitter sharing.".to_string());
    }

    Ok(Component::new(
        SocialFacts {
            og_tags,
            twitter_tags,
        },
        (og_tags + twitter_tags) as f64 / 2.0,
        SOCIAL_MAX,
        recommendations,
    ))
}

/// Non-empty `content` attribute of the first match
fn first_content(doc: &dyn DocumentQuery, selector: &str) -> Result<Option<String>> {
    Ok(doc
        .select_first(selector)?
        .and_then(|el| el.attr("content").map(str::to_string))
        .filter(|content| !content.is_empty()))
}
