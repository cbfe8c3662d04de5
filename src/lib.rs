// Re-export modules
pub mod analyzer;
pub mod config;
pub mod document;
pub mod error;
pub mod fetch;
pub mod report;
pub mod rules;
pub mod server;

// Re-export commonly used types for convenience
pub use analyzer::{Analyzer, AnalyzerBuilder, analyze_page};
pub use config::{FetchConfig, SeoConfig, ServerConfig};
pub use error::{AnalysisError, ConfigError, FetchError};
pub use report::{ColorBand, SeoReport};
