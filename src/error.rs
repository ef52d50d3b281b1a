use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Network error (impersonated transport): {0}")]
    Impersonation(#[from] wreq::Error),
    #[error("HTTP {status} from {url}")]
    HttpStatus { url: String, status: u16 },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Selector error: {0}")]
    Selector(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("No usable {kind} data extracted")]
    NoData { kind: &'static str },
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
