use super::Fetcher;
use crate::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::info;

/// Replays a page saved to disk instead of going to the network.
pub struct FileFetcher {
    path: PathBuf,
}

impl FileFetcher {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl Fetcher for FileFetcher {
    fn name(&self) -> &'static str {
        "file"
    }

    async fn fetch(&self, url: &str) -> Result<String> {
        info!("Reading {} from {:?}", url, self.path);
        Ok(tokio::fs::read_to_string(&self.path).await?)
    }
}
