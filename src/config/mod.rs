//! Configuration management for weekly-track.
//!
//! Configuration is read from `~/.config/weekly-track/config.toml` unless a
//! path is given on the command line. If the default file doesn't exist, a
//! default configuration with comments is created.

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::scraper::ScraperConfig;

/// Main configuration struct.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source: SourceConfig,
    pub scraper: ScraperConfig,
    pub output: OutputConfig,
    /// Vehicle display name -> catalog slug, for names the
    /// last-word rule gets wrong. Merged over the built-in table.
    pub slug_overrides: HashMap<String, String>,
}

/// Where the weekly post comes from.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub reddit_base: String,
    pub subreddit: String,
    /// Exact phrase the post title must contain
    pub title_phrase: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            reddit_base: "https://www.reddit.com".to_string(),
            subreddit: "gtaonline".to_string(),
            title_phrase: "Weekly Bonuses and Discounts".to_string(),
            user_agent: "GTAWeeklyTrack/1.0".to_string(),
            timeout_secs: 10,
        }
    }
}

impl SourceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Output artifact locations.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub weekly_update: PathBuf,
    pub vehicle_data: PathBuf,
    pub debug_body: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            weekly_update: PathBuf::from("data/weekly-update.json"),
            vehicle_data: PathBuf::from("data/vehicle_data.json"),
            debug_body: PathBuf::from("debug_body.txt"),
        }
    }
}

impl Config {
    /// Load configuration from `path`, or from the default location.
    ///
    /// An explicit path must exist. At the default location a missing file
    /// is created with commented defaults. Missing fields use default values.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                let config_path = Self::default_config_path()?;
                if !config_path.exists() {
                    Self::create_default_config(&config_path)?;
                    return Ok(Self::default());
                }
                Self::load_from(&config_path)
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the default config file path: `~/.config/weekly-track/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("weekly-track").join("config.toml"))
    }

    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        file.write_all(Self::default_config_content().as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    /// Generate the default config file content with comments.
    fn default_config_content() -> String {
        r##"# weekly-track configuration

[source]
reddit_base = "https://www.reddit.com"
subreddit = "gtaonline"
# The newest post whose title contains this phrase is used
title_phrase = "Weekly Bonuses and Discounts"
user_agent = "GTAWeeklyTrack/1.0"
timeout_secs = 10

[scraper]
catalog_base = "https://gtacars.net"
headless = true

# How long to wait for the vehicle image to appear (seconds)
timeout_secs = 10

# How often to re-check the page while waiting (milliseconds)
poll_interval_ms = 250

# Pause between vehicles (milliseconds)
delay_ms = 500

image_selector = "img.rounded-t-lg"
price_selector = "data.text-lg.text-green-500, data.text-lg.text-green-600"

# Discount items containing any of these words are not vehicles
skip_keywords = ["Properties", "Upgrades", "Modifications", "Offices"]

[output]
weekly_update = "data/weekly-update.json"
vehicle_data = "data/vehicle_data.json"
debug_body = "debug_body.txt"

# Catalog slugs for vehicles whose URL isn't the last word of their name.
# Failed vehicles are printed in this format at the end of `resolve`.
[slug_overrides]
# "Rhino Tank" = "rhino"
"##
        .to_string()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
