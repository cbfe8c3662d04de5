use clap::Parser;
use seo_check::{Analyzer, SeoConfig, server};
use std::process::ExitCode;

mod args;
use args::{Args, Command, OutputFormat};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            ::log::error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let analyzer = match Analyzer::builder().with_config(config.fetch.clone()).build() {
        Ok(analyzer) => analyzer,
        Err(e) => {
            ::log::error!("Failed to create analyzer: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match args.command {
        Command::Check {
            url,
            format,
            pretty,
        } => check(&analyzer, &url, format, pretty).await,
        Command::Serve { host, port } => {
            let mut server_config = config.server;
            if let Some(host) = host {
                server_config.host = host;
            }
            if let Some(port) = port {
                server_config.port = port;
            }

            match server::serve(analyzer, &server_config).await {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    ::log::error!("Server error: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
    }
}

/// Config file, then environment, then command-line flags
fn load_config(args: &Args) -> Result<SeoConfig, seo_check::ConfigError> {
    let config = match &args.config {
        Some(path) => SeoConfig::from_file(path)?,
        None => SeoConfig::default(),
    };
    let mut config = config.apply_env()?;

    if let Some(timeout) = args.timeout {
        config.fetch.timeout_secs = timeout;
    }
    Ok(config)
}

async fn check(analyzer: &Analyzer, url: &str, format: OutputFormat, pretty: bool) -> ExitCode {
    let report = match analyzer.analyze(url).await {
        Ok(report) => report,
        Err(e) => {
            ::log::error!("Error checking SEO for {}: {}", url, e);
            return ExitCode::FAILURE;
        }
    };

    let output = match format {
        OutputFormat::Text => Ok(report.render_text()),
        OutputFormat::Json if pretty => serde_json::to_string_pretty(&report),
        OutputFormat::Json => serde_json::to_string(&report),
    };

    match output {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            ::log::error!("Failed to serialize report: {}", e);
            ExitCode::FAILURE
        }
    }
}
