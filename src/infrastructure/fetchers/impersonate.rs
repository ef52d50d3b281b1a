use super::http::{Jitter, ACCEPT_LANGUAGE};
use super::Fetcher;
use crate::error::{Result, ScrapeError};
use async_trait::async_trait;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};
use wreq::header::ACCEPT_LANGUAGE as ACCEPT_LANGUAGE_HEADER;
use wreq::Client;
use wreq_util::Emulation;

/// GET through a transport that presents as Chrome 120: TLS ClientHello,
/// HTTP/2 settings, header order, user agent and client hints. Cookies set by
/// the site persist for the life of the client.
pub struct ImpersonatedFetcher {
    client: Client,
    jitter: Jitter,
}

impl ImpersonatedFetcher {
    pub fn new(jitter: Jitter, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .emulation(Emulation::Chrome120)
            .cookie_store(true)
            .timeout(timeout)
            .build()?;

        Ok(Self { client, jitter })
    }
}

#[async_trait]
impl Fetcher for ImpersonatedFetcher {
    fn name(&self) -> &'static str {
        "chrome120"
    }

    async fn fetch(&self, url: &str) -> Result<String> {
        let delay = self.jitter.sample();
        info!(
            "Fetching {} (chrome120 emulation) after {:.1}s pause",
            url,
            delay.as_secs_f32()
        );
        sleep(delay).await;

        let response = self
            .client
            .get(url)
            .header(ACCEPT_LANGUAGE_HEADER, ACCEPT_LANGUAGE)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            warn!("HTTP {} from {}", status, url);
            return Err(ScrapeError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}
