use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum WeeklyTrackError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    ConfigFile(#[from] ConfigError),

    #[error("No posts found for \"{0}\"")]
    NoPostFound(String),

    #[error("Scraper error: {0}")]
    Scraper(String),

    #[error("Timed out after {secs}s waiting for `{selector}` on {url}")]
    ScrapeTimeout {
        url: String,
        selector: String,
        secs: u64,
    },

    #[error("Element `{selector}` not found on {url}")]
    ElementNotFound { url: String, selector: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, WeeklyTrackError>;
