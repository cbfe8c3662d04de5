use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Configuration for fetching the page under analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Request timeout in seconds (covers connect, headers and body)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with the request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Maximum number of redirects to follow
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,

    /// Whether to honor proxy settings from the environment
    #[serde(default = "default_use_system_proxy")]
    pub use_system_proxy: bool,
}

/// Configuration for the HTTP server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeoConfig {
    #[serde(default)]
    pub fetch: FetchConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

impl SeoConfig {
    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        if config.fetch.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                name: "fetch.timeout_secs".to_string(),
                value: "0".to_string(),
            });
        }
        Ok(config)
    }

    /// Apply overrides from the process environment
    pub fn apply_env(self) -> Result<Self, ConfigError> {
        self.apply_env_from(|name| std::env::var(name).ok())
    }

    /// Apply overrides using the given variable lookup
    ///
    /// Recognized variables are `PORT`, `SEO_CHECK_HOST` and
    /// `SEO_CHECK_TIMEOUT_SECS`. Empty values are ignored.
    pub fn apply_env_from<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(port) = var("PORT") {
            self.server.port = parse_env("PORT", &port)?;
        }
        if let Some(host) = var("SEO_CHECK_HOST") {
            self.server.host = host;
        }
        if let Some(timeout) = var("SEO_CHECK_TIMEOUT_SECS") {
            let timeout_secs = parse_env("SEO_CHECK_TIMEOUT_SECS", &timeout)?;
            if timeout_secs == 0 {
                return Err(ConfigError::InvalidEnv {
                    name: "SEO_CHECK_TIMEOUT_SECS".to_string(),
                    value: timeout,
                });
            }
            self.fetch.timeout_secs = timeout_secs;
        }

        Ok(self)
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
        name: name.to_string(),
        value: value.to_string(),
    })
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            max_redirects: default_max_redirects(),
            use_system_proxy: default_use_system_proxy(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Socket address string for binding
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Default fetch timeout
fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("seo-check/{}", env!("CARGO_PKG_VERSION"))
}

fn default_max_redirects() -> usize {
    10
}

fn default_use_system_proxy() -> bool {
    true
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}
