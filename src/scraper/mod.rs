//! Browser access to the vehicle catalog.
//!
//! The resolver only sees the [`CatalogPage`] trait: given a page URL, it
//! returns the raw fields read from that page. [`ChromeCatalog`] implements
//! it with headless Chrome via chromiumoxide.
//!
//! # Usage
//!
//! ```rust,ignore
//! use weekly_track::scraper::{CatalogPage, ChromeCatalog, ScraperConfig};
//!
//! let catalog = ChromeCatalog::launch(ScraperConfig::default()).await?;
//! let probe = catalog.probe("https://gtacars.net/gta5/taipan").await?;
//! catalog.close().await?;
//! ```

mod chrome;
mod config;
mod script;

pub use chrome::ChromeCatalog;
pub use config::ScraperConfig;
pub use script::ProbeScript;

use async_trait::async_trait;
use serde::Deserialize;

use crate::app::Result;

/// Raw fields read from one catalog page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageProbe {
    /// `src` attribute of the vehicle image, as written in the page
    pub image_src: Option<String>,
    /// `value` attribute of the price element
    pub price_value: Option<String>,
    /// Visible text of the price element
    pub price_text: Option<String>,
}

impl PageProbe {
    pub fn has_image(&self) -> bool {
        self.image_src.as_deref().is_some_and(|s| !s.trim().is_empty())
    }
}

/// Trait for catalog page loaders
#[async_trait]
pub trait CatalogPage: Send + Sync {
    /// Load `url`, wait for the vehicle image and read the page fields.
    ///
    /// Fails when the image does not appear within the configured timeout.
    async fn probe(&self, url: &str) -> Result<PageProbe>;
}
