use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "seo-check")]
#[command(about = "Heuristic SEO scorer for a single web page")]
#[command(version)]
pub struct Args {
    /// JSON configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Fetch timeout in seconds (overrides config and environment)
    #[arg(short, long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze one page and print the report
    Check {
        /// Absolute URL of the page to analyze
        url: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Serve the HTTP API
    Serve {
        /// Address to bind (overrides config and environment)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config and environment)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
