pub(crate) mod file;
pub(crate) mod http;
pub(crate) mod impersonate;

use crate::error::Result;
use async_trait::async_trait;

/// Obtains the raw markup of a page. Any failure is terminal for the run.
#[async_trait]
pub trait Fetcher: Send + Sync {
    fn name(&self) -> &'static str;

    async fn fetch(&self, url: &str) -> Result<String>;
}
