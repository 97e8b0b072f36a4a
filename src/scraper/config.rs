use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the catalog scraper
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    /// Catalog site root; pages live at `{catalog_base}/gta5/{slug}`
    pub catalog_base: String,

    /// Whether to run the browser in headless mode (default: true)
    pub headless: bool,

    /// How long to wait for the image element, in seconds (default: 10)
    pub timeout_secs: u64,

    /// Interval between element checks while waiting, in milliseconds (default: 250)
    pub poll_interval_ms: u64,

    /// Pause between vehicles in milliseconds (default: 500)
    pub delay_ms: u64,

    /// CSS selector of the vehicle image
    pub image_selector: String,

    /// CSS selector of the `<data>` element holding the price
    pub price_selector: String,

    /// Discount items containing any of these words are skipped
    pub skip_keywords: Vec<String>,

    /// User agent string to use
    pub user_agent: Option<String>,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            catalog_base: "https://gtacars.net".to_string(),
            headless: true,
            timeout_secs: 10,
            poll_interval_ms: 250,
            delay_ms: 500,
            image_selector: "img.rounded-t-lg".to_string(),
            price_selector: "data.text-lg.text-green-500, data.text-lg.text-green-600"
                .to_string(),
            skip_keywords: vec![
                "Properties".to_string(),
                "Upgrades".to_string(),
                "Modifications".to_string(),
                "Offices".to_string(),
            ],
            user_agent: Some(
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36"
                    .to_string(),
            ),
        }
    }
}

impl ScraperConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Catalog page for a slug.
    pub fn vehicle_url(&self, slug: &str) -> String {
        format!("{}/gta5/{}", self.catalog_base.trim_end_matches('/'), slug)
    }

    /// Rewrite a site-relative path (`/images/...`) to an absolute URL.
    pub fn absolute_url(&self, src: &str) -> String {
        if src.starts_with("//") {
            format!("https:{}", src)
        } else if src.starts_with('/') {
            format!("{}{}", self.catalog_base.trim_end_matches('/'), src)
        } else {
            src.to_string()
        }
    }

    /// Whether a discount item names something other than a vehicle.
    pub fn is_skipped(&self, item: &str) -> bool {
        self.skip_keywords.iter().any(|k| item.contains(k.as_str()))
    }
}
