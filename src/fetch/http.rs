use crate::config::FetchConfig;
use crate::error::FetchError;
use crate::fetch::{FetchedPage, Fetcher};
use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};
use url::Url;

/// `reqwest`-backed fetcher with a bounded timeout
pub struct HttpFetcher {
    client: Client,
    timeout_secs: u64,
}

impl HttpFetcher {
    /// Builds a fetcher from configuration
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let mut builder = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects));
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }

        let client = builder
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self {
            client,
            timeout_secs: config.timeout_secs,
        })
    }

    fn classify(&self, url: &Url, err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
                timeout_secs: self.timeout_secs,
            }
        } else {
            FetchError::Network {
                url: url.to_string(),
                message: err.to_string(),
            }
        }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, FetchError> {
        ::log::debug!("Fetching {}", url);
        let start = Instant::now();

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| self.classify(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let final_url = response.url().to_string();
        let body = response.text().await.map_err(|e| self.classify(url, e))?;
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

        ::log::debug!(
            "Fetched {} ({} bytes, status {}) in {:.1}ms",
            final_url,
            body.len(),
            status.as_u16(),
            elapsed_ms
        );

        Ok(FetchedPage {
            final_url,
            status: status.as_u16(),
            body,
            elapsed_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::http::StatusCode;
    use axum::response::Html;
    use axum::routing::get;
    use tokio::net::TcpListener;

    async fn spawn_origin() -> String {
        let app = Router::new()
            .route("/ok", get(|| async { Html("<html><title>Hi</title></html>") }))
            .route("/missing", get(|| async { (StatusCode::NOT_FOUND, "gone") }))
            .route(
                "/slow",
                get(|| async {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    "late"
                }),
            );

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn fetcher(timeout_secs: u64) -> HttpFetcher {
        HttpFetcher::new(&FetchConfig {
            timeout_secs,
            use_system_proxy: false,
            ..FetchConfig::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let base = spawn_origin().await;
        let url = Url::parse(&format!("{}/ok", base)).unwrap();

        let page = fetcher(5).fetch(&url).await.unwrap();
        assert_eq!(page.status, 200);
        assert_eq!(page.body, "<html><title>Hi</title></html>");
        assert_eq!(page.final_url, url.to_string());
        assert!(page.elapsed_ms >= 0.0);
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let base = spawn_origin().await;
        let url = Url::parse(&format!("{}/missing", base)).unwrap();

        match fetcher(5).fetch(&url).await {
            Err(FetchError::Status { status, .. }) => assert_eq!(status, 404),
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_timeout() {
        let base = spawn_origin().await;
        let url = Url::parse(&format!("{}/slow", base)).unwrap();

        match fetcher(1).fetch(&url).await {
            Err(FetchError::Timeout { timeout_secs, .. }) => assert_eq!(timeout_secs, 1),
            other => panic!("expected timeout, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unreachable_origin() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let url = Url::parse(&format!("http://{}/", addr)).unwrap();
        let result = fetcher(2).fetch(&url).await;
        assert!(matches!(result, Err(FetchError::Network { .. })));
    }
}
