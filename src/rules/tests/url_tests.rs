use crate::rules::{RuleContext, timing, url as url_rule};
use url::Url;

fn with_ctx<T>(raw: &str, load_time_ms: f64, f: impl FnOnce(&RuleContext<'_>) -> T) -> T {
    let url = Url::parse(raw).unwrap();
    let ctx = RuleContext::new(&url, raw, load_time_ms);
    f(&ctx)
}

#[cfg(test)]
mod url_structure_tests {
    use super::*;

    #[test]
    fn test_keyword_slug_scores_full() {
        let raw = "https://example.co.uk/best-running-shoes-2024";
        assert_eq!(raw.len(), 45);
        let result = with_ctx(raw, 0.0, url_rule::url_structure);
        assert!(result.facts.includes_keywords);
        assert_eq!(result.facts.length, 45);
        assert_eq!(result.score, 10.0);
        assert!(result.recommendations.is_empty());
    }

    #[test]
    fn test_root_path_has_no_keywords() {
        let result = with_ctx("https://example.com", 0.0, url_rule::url_structure);
        assert!(!result.facts.includes_keywords);
        assert_eq!(result.score, 5.0);
        assert_eq!(
            result.recommendations,
            vec!["Use keywords in your URL for better SEO."]
        );
    }

    #[test]
    fn test_uppercase_path_has_no_keywords() {
        let result = with_ctx("https://example.com/ABOUT", 0.0, url_rule::url_structure);
        assert!(!result.facts.includes_keywords);
    }

    #[test]
    fn test_length_penalty() {
        // 70 characters: 5 - (70 - 50) / 10 = 3
        let raw = format!("https://example.com/{}", "a".repeat(50));
        assert_eq!(raw.len(), 70);
        let result = with_ctx(&raw, 0.0, url_rule::url_structure);
        assert_eq!(result.score, 8.0);
    }

    #[test]
    fn test_long_url_recommendation() {
        let raw = format!("https://example.com/{}", "long-path".repeat(12));
        let result = with_ctx(&raw, 0.0, url_rule::url_structure);
        assert!(result.facts.length > 100);
        assert_eq!(result.score, 5.0);
        assert_eq!(
            result.recommendations,
            vec!["Consider shortening your URL for better user experience and SEO."]
        );
    }
}

#[cfg(test)]
mod ssl_tests {
    use super::*;

    #[test]
    fn test_https_scores_full() {
        let result = with_ctx("https://example.com", 0.0, url_rule::ssl);
        assert!(result.facts.present);
        assert_eq!(result.score, 10.0);
        assert!(result.recommendations.is_empty());
    }

    #[test]
    fn test_http_scores_zero() {
        let result = with_ctx("http://example.com", 0.0, url_rule::ssl);
        assert!(!result.facts.present);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.recommendations.len(), 1);
    }
}

#[cfg(test)]
mod load_speed_tests {
    use super::*;

    #[test]
    fn test_load_speed_scale() {
        let cases = [(0.0, 10.0), (100.0, 8.0), (250.0, 5.0), (500.0, 0.0), (2000.0, 0.0)];
        for (ms, expected) in cases {
            let result = with_ctx("https://example.com", ms, timing::load_speed);
            assert_eq!(result.score, expected, "{}ms", ms);
            assert_eq!(result.facts.time, ms);
        }
    }

    #[test]
    fn test_slow_load_recommendation() {
        let at_limit = with_ctx("https://example.com", 3000.0, timing::load_speed);
        assert!(at_limit.recommendations.is_empty());

        let slow = with_ctx("https://example.com", 3500.0, timing::load_speed);
        assert_eq!(
            slow.recommendations,
            vec!["Improve page load speed for better user experience and SEO."]
        );
    }
}
