use std::sync::Arc;

use crate::app::error::Result;
use crate::config::Config;
use crate::extractor::WeeklyExtractor;
use crate::fetcher::{PostSource, RedditFetcher};
use crate::resolver::SlugOverrides;
use crate::store::JsonStore;

pub struct AppContext {
    pub config: Config,
    pub store: Arc<JsonStore>,
    pub fetcher: Arc<dyn PostSource>,
    pub extractor: WeeklyExtractor,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self> {
        let fetcher: Arc<dyn PostSource> = Arc::new(RedditFetcher::new(config.source.clone())?);
        let store = Arc::new(JsonStore::from_config(&config.output));
        Ok(Self::with_parts(config, fetcher, store))
    }

    pub fn with_parts(config: Config, fetcher: Arc<dyn PostSource>, store: Arc<JsonStore>) -> Self {
        Self {
            config,
            store,
            fetcher,
            extractor: WeeklyExtractor::new(),
        }
    }

    /// Built-in slug table merged with `[slug_overrides]` from the config.
    pub fn slug_overrides(&self) -> SlugOverrides {
        SlugOverrides::with_extra(&self.config.slug_overrides)
    }
}
