use crate::config::FetchConfig;
use crate::document::HtmlDocument;
use crate::error::{AnalysisError, FetchError, Result};
use crate::fetch::{FetchedPage, Fetcher, HttpFetcher};
use crate::report::SeoReport;
use crate::rules::{self, RuleContext};
use std::sync::Arc;
use url::Url;

/// Fetches a page and scores it
#[derive(Clone)]
pub struct Analyzer {
    fetcher: Arc<dyn Fetcher>,
}

impl Analyzer {
    /// Create an analyzer around the given fetcher
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Self {
        Self { fetcher }
    }

    /// Start building an analyzer backed by [`HttpFetcher`]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::default()
    }

    /// Analyze the page at `url`
    ///
    /// Any failure aborts the whole analysis; there is no partial report.
    pub async fn analyze(&self, url: &str) -> Result<SeoReport> {
        let raw_url = url.trim();
        if raw_url.is_empty() {
            return Err(AnalysisError::Validation("url must not be empty".to_string()));
        }

        let parsed = Url::parse(raw_url).map_err(|source| FetchError::InvalidUrl {
            url: raw_url.to_string(),
            source,
        })?;

        ::log::info!("Analyzing {}", raw_url);
        let page = self.fetcher.fetch(&parsed).await?;

        let report = analyze_page(raw_url, &parsed, &page)?;
        ::log::info!(
            "Analyzed {}: score {}/{} in {:.1}ms",
            raw_url,
            report.score,
            report.max_score,
            page.elapsed_ms
        );
        Ok(report)
    }
}

/// Score an already fetched page
///
/// Pure function of the URL, body and timing.
pub fn analyze_page(raw_url: &str, url: &Url, page: &FetchedPage) -> Result<SeoReport> {
    let doc = HtmlDocument::parse(&page.body);
    let ctx = RuleContext::new(url, raw_url, page.elapsed_ms);
    let details = rules::score_all(&doc, &ctx)?;
    Ok(SeoReport::new(raw_url, details))
}

/// Builder for an [`Analyzer`]
#[derive(Default)]
pub struct AnalyzerBuilder {
    config: FetchConfig,
    fetcher: Option<Arc<dyn Fetcher>>,
}

impl AnalyzerBuilder {
    /// Apply a fetch configuration
    pub fn with_config(mut self, config: FetchConfig) -> Self {
        self.config = config;
        self
    }

    /// Override the fetch timeout
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.config.timeout_secs = timeout_secs;
        self
    }

    /// Override the User-Agent header
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Use a custom fetcher instead of [`HttpFetcher`]
    pub fn with_fetcher(mut self, fetcher: Arc<dyn Fetcher>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    pub fn build(self) -> Result<Analyzer> {
        let fetcher = match self.fetcher {
            Some(fetcher) => fetcher,
            None => Arc::new(HttpFetcher::new(&self.config)?),
        };
        Ok(Analyzer::new(fetcher))
    }
}
