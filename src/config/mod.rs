use crate::error::{Result, ScrapeError};
use crate::infrastructure::{
    Fetcher, FileFetcher, FileSystemStore, HttpFetcher, ImpersonatedFetcher, Jitter,
};
use clap::Parser;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

pub mod cli;

pub use cli::{Args, FetchStrategy};

pub struct Config {
    pub args: Args,
    jitter: Jitter,
    timeout: Duration,
}

impl Config {
    pub fn new() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Checks flag combinations before anything touches the network.
    pub fn from_args(args: Args) -> Result<Self> {
        let jitter = Jitter::new(
            Duration::from_millis(args.min_delay_ms),
            Duration::from_millis(args.max_delay_ms),
        )?;

        if args.fetcher == FetchStrategy::File && args.source_file.is_none() {
            return Err(ScrapeError::Config(
                "--fetcher file requires --source-file".to_string(),
            ));
        }

        Ok(Self {
            timeout: Duration::from_secs(args.timeout_secs),
            jitter,
            args,
        })
    }

    pub fn build_fetcher(&self) -> Result<Box<dyn Fetcher>> {
        let fetcher: Box<dyn Fetcher> = match self.args.fetcher {
            FetchStrategy::Browser => {
                Box::new(ImpersonatedFetcher::new(self.jitter, self.timeout)?)
            }
            FetchStrategy::Plain => Box::new(HttpFetcher::new(self.jitter, self.timeout)?),
            FetchStrategy::File => {
                let path = self.args.source_file.clone().ok_or_else(|| {
                    ScrapeError::Config("--fetcher file requires --source-file".to_string())
                })?;
                Box::new(FileFetcher::new(path))
            }
        };
        Ok(fetcher)
    }

    pub fn build_store(&self) -> FileSystemStore {
        FileSystemStore::new(&self.args.data_dir)
    }
}

/// `RUST_LOG` wins over the `--log-level` flag.
pub fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
