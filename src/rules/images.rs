use crate::document::DocumentQuery;
use crate::error::Result;
use crate::report::{Component, ImageFacts};

const IMAGES_MAX: f64 = 10.0;

/// Share of images with alt text and with lazy loading, five points each
pub fn images(doc: &dyn DocumentQuery) -> Result<Component<ImageFacts>> {
    let images = doc.select("img")?;

    let total = images.len();
    let with_alt = images
        .iter()
        .filter(|img| img.attr("alt").is_some_and(|alt| !alt.is_empty()))
        .count();
    let with_lazy_loading = images
        .iter()
        .filter(|img| img.attr("loading") == Some("lazy"))
        .count();

    let score = if total == 0 {
        0.0
    } else {
        let total = total as f64;
        with_alt as f64 / total * 5.0 + with_lazy_loading as f64 / total * 5.0
    };

    let mut recommendations = Vec::new();
    if with_alt < total {
        recommendations
            .push("Add alt text to all images for better accessibility and SEO.".to_string());
    }
    if with_lazy_loading < total {
        recommendations
            .push("Implement lazy loading for images to improve page load speed.".to_string());
    }

    Ok(Component::new(
        ImageFacts {
            total,
            with_alt,
            with_lazy_loading,
        },
        score,
        IMAGES_MAX,
        recommendations,
    ))
}
