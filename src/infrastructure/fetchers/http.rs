use super::Fetcher;
use crate::error::{Result, ScrapeError};
use async_trait::async_trait;
use rand::Rng;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::Client;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};

pub(crate) const ACCEPT_LANGUAGE: &str = "fr-FR,fr;q=0.9,en-US;q=0.8,en;q=0.7";

/// Uniform random pause taken before each request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Jitter {
    min: Duration,
    max: Duration,
}

impl Jitter {
    pub fn new(min: Duration, max: Duration) -> Result<Self> {
        if min > max {
            return Err(ScrapeError::Config(format!(
                "minimum delay {min:?} exceeds maximum delay {max:?}"
            )));
        }
        Ok(Self { min, max })
    }

    pub fn none() -> Self {
        Self {
            min: Duration::ZERO,
            max: Duration::ZERO,
        }
    }

    pub fn sample(&self) -> Duration {
        if self.min == self.max {
            return self.min;
        }
        rand::thread_rng().gen_range(self.min..=self.max)
    }
}

const PLAIN_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

fn plain_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCEPT_LANGUAGE,
        HeaderValue::from_static(ACCEPT_LANGUAGE),
    );
    headers
}

/// Single-shot GET over a bare reqwest client with a jittered delay.
pub struct HttpFetcher {
    client: Client,
    jitter: Jitter,
}

impl HttpFetcher {
    pub fn new(jitter: Jitter, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(PLAIN_USER_AGENT)
            .default_headers(plain_headers())
            .build()?;

        Ok(Self { client, jitter })
    }

    pub fn user_agent() -> &'static str {
        PLAIN_USER_AGENT
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    fn name(&self) -> &'static str {
        "plain"
    }

    async fn fetch(&self, url: &str) -> Result<String> {
        let delay = self.jitter.sample();
        info!("Fetching {} (plain) after {:.1}s pause", url, delay.as_secs_f32());
        sleep(delay).await;

        let response = self.client.get(url).send().await?;
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
