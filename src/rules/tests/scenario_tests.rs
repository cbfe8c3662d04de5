use crate::document::HtmlDocument;
use crate::report::SeoReport;
use crate::rules::{RuleContext, score_all};
use url::Url;

fn analyze(raw_url: &str, html: &str, load_time_ms: f64) -> SeoReport {
    let url = Url::parse(raw_url).unwrap();
    let doc = HtmlDocument::parse(html);
    let ctx = RuleContext::new(&url, raw_url, load_time_ms);
    SeoReport::new(raw_url, score_all(&doc, &ctx).unwrap())
}

const RICH_PAGE: &str = r#"<html><head>
<title>Best Running Shoes 2024: Reviews and Buying Guide</title>
<meta name="description" content="Compare the best running shoes of 2024 with hands-on reviews, fit advice, and pricing so you can pick the right pair for road, trail, or track running.">
<meta name="viewport" content="width=device-width, initial-scale=1">
<meta property="og:title" content="Best Running Shoes 2024">
<meta property="og:type" content="article">
<meta property="og:image" content="https://example.co.uk/og.png">
<meta name="twitter:card" content="summary_large_image">
<meta name="twitter:title" content="Best Running Shoes 2024">
<meta name="twitter:image" content="https://example.co.uk/tw.png">
<meta name="twitter:site" content="@example">
</head><body>
<h1>Best Running Shoes 2024</h1>
<h2>Road</h2><h2>Trail</h2><h2>Track</h2><h2>Budget</h2><h2>Premium</h2>
<h3>Cushioning</h3><h3>Weight</h3><h3>Drop</h3><h3>Grip</h3><h3>Durability</h3>
<img src="a.jpg" alt="Road shoe" loading="lazy">
<img src="b.jpg" alt="Trail shoe" loading="lazy">
<a href="https://example.co.uk/reviews">Reviews</a>
<a href="https://example.co.uk/guides">Guides</a>
<a href="https://example.co.uk/sizing">Sizing</a>
<a href="https://other.org/study">Study</a>
<a href="https://another.net/lab">Lab</a>
</body></html>"#;

#[cfg(test)]
mod scenario_tests {
    use super::*;

    #[test]
    fn test_minimal_https_page() {
        let html = "<html><head><title>Example Domain</title></head><body>This domain is for use in illustrative examples ok</body></html>";
        let report = analyze("https://example.com", html, 100.0);
        let d = &report.details;

        assert_eq!(d.title.score, 0.0);
        assert_eq!(d.description.score, 0.0);
        assert_eq!(d.headers.h1.score, 0.0);
        assert_eq!(d.images.score, 0.0);
        assert_eq!(d.links.score, 0.0);
        assert_eq!(d.url.score, 5.0);
        assert_eq!(d.mobile_responsive.score, 0.0);
        assert_eq!(d.ssl.score, 10.0);
        assert_eq!(d.load_speed.score, 8.0);
        assert_eq!(d.content_length.facts.length, 50);
        assert_eq!(d.keyword_density.score, 0.0);
        assert_eq!(d.social_meta.score, 0.0);

        // 5 + 10 + 8 + 50/300
        assert_eq!(report.score, 23.0);
        assert_eq!(report.score, d.raw_total().round());
    }

    #[test]
    fn test_keyword_slug_url() {
        let report = analyze("https://example.co.uk/best-running-shoes-2024", "<p></p>", 0.0);
        assert_eq!(report.details.url.score, 10.0);
    }

    #[test]
    fn test_rich_page_scores_high() {
        let report = analyze(
            "https://example.co.uk/best-running-shoes-2024",
            RICH_PAGE,
            20.0,
        );
        let d = &report.details;
        assert!(d.title.recommendations.is_empty());
        assert!(d.description.recommendations.is_empty());
        assert_eq!(d.headers.h1.score, 10.0);
        assert_eq!(d.headers.h2.score, 5.0);
        assert_eq!(d.headers.h3.score, 5.0);
        assert_eq!(d.images.score, 10.0);
        assert_eq!(d.links.facts.internal, 3);
        assert_eq!(d.links.facts.external, 2);
        assert_eq!(d.links.score, 2.0);
        assert_eq!(d.mobile_responsive.score, 10.0);
        assert_eq!(d.social_meta.score, 3.5);
        assert!(report.score > 60.0);
    }

    #[test]
    fn test_scores_stay_within_bounds() {
        let pages = [
            ("http://x.io", "", 10_000.0),
            ("https://example.com", "<h1>a</h1><h1>b</h1>", 0.0),
            ("https://example.co.uk/best-running-shoes-2024", RICH_PAGE, 20.0),
            ("https://example.com/a", "<<<not html>>>", 0.5),
        ];
        for (url, html, load) in pages {
            let report = analyze(url, html, load);
            for dim in report.details.dimensions() {
                assert!(
                    dim.score >= 0.0 && dim.score <= dim.max_score,
                    "{} out of range for {}: {}",
                    dim.category,
                    url,
                    dim.score
                );
            }
            assert!(report.score >= 0.0 && report.score <= 100.0);
        }
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let url = "https://example.co.uk/best-running-shoes-2024";
        let first = analyze(url, RICH_PAGE, 42.0);
        let second = analyze(url, RICH_PAGE, 42.0);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
