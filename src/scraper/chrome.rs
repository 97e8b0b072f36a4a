use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::Page;
use futures::StreamExt;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::app::{Result, WeeklyTrackError};
use crate::scraper::config::ScraperConfig;
use crate::scraper::script::ProbeScript;
use crate::scraper::{CatalogPage, PageProbe};

/// Catalog loader backed by a Chrome instance via chromiumoxide
pub struct ChromeCatalog {
    browser: Browser,
    handler: JoinHandle<()>,
    config: ScraperConfig,
    script: ProbeScript,
}

impl ChromeCatalog {
    /// Launch Chrome with the given configuration
    pub async fn launch(config: ScraperConfig) -> Result<Self> {
        let mut builder = BrowserConfig::builder()
            .arg("--no-sandbox")
            .arg("--disable-gpu")
            .arg("--disable-dev-shm-usage")
            .arg("--disable-software-rasterizer");

        if !config.headless {
            builder = builder.with_head();
        }

        let browser_config = builder.build().map_err(|e| {
            WeeklyTrackError::Scraper(format!("Failed to build browser config: {}", e))
        })?;

        let (browser, mut handler) = Browser::launch(browser_config).await.map_err(|e| {
            WeeklyTrackError::Scraper(format!(
                "Failed to launch browser: {}. Is Chrome or Chromium installed and in PATH?",
                e
            ))
        })?;

        let handler = tokio::spawn(async move {
            while let Some(_event) = handler.next().await {}
        });

        let script = ProbeScript::new(&config);

        Ok(Self {
            browser,
            handler,
            config,
            script,
        })
    }

    /// Shut the browser down. Call once all vehicles are done, including on error paths.
    pub async fn close(mut self) -> Result<()> {
        let closed = self
            .browser
            .close()
            .await
            .map_err(|e| WeeklyTrackError::Scraper(format!("Failed to close browser: {}", e)));
        if let Err(e) = self.browser.wait().await {
            debug!("Browser process did not exit cleanly: {}", e);
        }
        self.handler.abort();
        closed.map(|_| ())
    }

    async fn load(&self, url: &str) -> Result<PageProbe> {
        let page = self
            .browser
            .new_page("about:blank")
            .await
            .map_err(|e| WeeklyTrackError::Scraper(format!("Failed to create page: {}", e)))?;

        let result = self.load_into(&page, url).await;

        if let Err(e) = page.close().await {
            debug!("Failed to close page for {}: {}", url, e);
        }

        result
    }

    async fn load_into(&self, page: &Page, url: &str) -> Result<PageProbe> {
        if let Some(ref ua) = self.config.user_agent {
            page.set_user_agent(ua)
                .await
                .map_err(|e| WeeklyTrackError::Scraper(format!("Failed to set user agent: {}", e)))?;
        }

        match tokio::time::timeout(self.config.timeout(), self.navigate(page, url)).await {
            Ok(result) => result,
            Err(_) => Err(WeeklyTrackError::ScrapeTimeout {
                url: url.to_string(),
                selector: self.config.image_selector.clone(),
                secs: self.config.timeout_secs,
            }),
        }
    }

    /// Load `url`, then re-run the probe script until the image element shows up.
    async fn navigate(&self, page: &Page, url: &str) -> Result<PageProbe> {
        page.goto(url)
            .await
            .map_err(|e| WeeklyTrackError::Scraper(format!("Navigation failed: {}", e)))?;

        loop {
            let result: serde_json::Value = page
                .evaluate(self.script.source())
                .await
                .map_err(|e| WeeklyTrackError::Scraper(format!("Script execution failed: {}", e)))?
                .into_value()
                .map_err(|e| WeeklyTrackError::Scraper(format!("Failed to parse result: {:?}", e)))?;

            let probe: PageProbe = serde_json::from_value(result)?;
            if probe.has_image() {
                return Ok(probe);
            }

            tokio::time::sleep(self.config.poll_interval()).await;
        }
    }
}

#[async_trait]
impl CatalogPage for ChromeCatalog {
    async fn probe(&self, url: &str) -> Result<PageProbe> {
        debug!("Loading catalog page {}", url);
        self.load(url).await
    }
}
