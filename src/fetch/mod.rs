pub mod http;

pub use http::HttpFetcher;

use crate::error::FetchError;
use async_trait::async_trait;
use url::Url;

/// Raw page body plus how long it took to get it
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedPage {
    /// URL after redirects
    pub final_url: String,
    /// HTTP status of the final response
    pub status: u16,
    /// Response body as text
    pub body: String,
    /// Milliseconds from request start until the body was read
    pub elapsed_ms: f64,
}

/// Fetches a single page
///
/// Implementations perform exactly one request with no retries; any failure
/// ends the analysis.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, FetchError>;
}
