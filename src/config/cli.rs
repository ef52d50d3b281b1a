use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FetchStrategy {
    /// Chrome 120 TLS/HTTP2 emulation with a cookie jar
    Browser,
    /// Bare client with a generic user agent
    Plain,
    /// Read a saved page from --source-file
    File,
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Directory to store output data
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,

    /// How the page is obtained
    #[arg(long, value_enum, default_value_t = FetchStrategy::Browser)]
    pub fetcher: FetchStrategy,

    /// Saved HTML page, used with `--fetcher file`
    #[arg(long)]
    pub source_file: Option<PathBuf>,

    /// Lower bound of the random pause before the request
    #[arg(long, default_value_t = 2000)]
    pub min_delay_ms: u64,

    /// Upper bound of the random pause before the request
    #[arg(long, default_value_t = 5000)]
    pub max_delay_ms: u64,

    /// Request timeout
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, env = "AJA_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}
