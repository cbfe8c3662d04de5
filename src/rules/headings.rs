use crate::document::DocumentQuery;
use crate::error::Result;
use crate::report::{Component, HeadingFacts};

const H1_MAX: f64 = 10.0;
const SUBHEADING_MAX: f64 = 5.0;

/// Exactly one H1 scores full marks; several score half; none scores zero
pub fn h1(doc: &dyn DocumentQuery) -> Result<Component<HeadingFacts>> {
    let facts = collect(doc, "h1")?;

    let score = match facts.count {
        0 => 0.0,
        1 => H1_MAX,
        _ => H1_MAX / 2.0,
    };

    let mut recommendations = Vec::new();
    if facts.count != 1 {
        recommendations.push("Use exactly one H1 tag on your page.".to_string());
    }

    Ok(Component::new(facts, score, H1_MAX, recommendations))
}

pub fn h2(doc: &dyn DocumentQuery) -> Result<Component<HeadingFacts>> {
    subheading(doc, "h2")
}

pub fn h3(doc: &dyn DocumentQuery) -> Result<Component<HeadingFacts>> {
    subheading(doc, "h3")
}

/// One point per heading, up to the maximum
fn subheading(doc: &dyn DocumentQuery, tag: &str) -> Result<Component<HeadingFacts>> {
    let facts = collect(doc, tag)?;

    let mut recommendations = Vec::new();
    if facts.count == 0 {
        recommendations.push(format!(
            "Consider using {} tags for better content structure.",
            tag
        ));
    }

    let score = facts.count as f64;
    Ok(Component::new(facts, score, SUBHEADING_MAX, recommendations))
}

fn collect(doc: &dyn DocumentQuery, tag: &str) -> Result<HeadingFacts> {
    let content = doc
        .select(tag)?
        .iter()
        .map(|el| el.text().to_string())
        .collect::<Vec<_>>();

    Ok(HeadingFacts {
        count: content.len(),
        content,
    })
}
