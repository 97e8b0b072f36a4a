use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static PERCENT_OFF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(\d+)%\s*off$").expect("hardcoded regex pattern is valid"));

/// Catalog data for one vehicle mentioned in the weekly post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleRecord {
    #[serde(rename = "type")]
    pub category: String,
    pub url: String,
    pub slug: String,
    pub image_url: String,
    pub original_price: Option<u64>,
    pub discounted_price: Option<u64>,
    pub discount_percent: Option<u32>,
    pub is_free: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<String>,
}

impl VehicleRecord {
    pub fn display_original_price(&self) -> String {
        format_price(self.original_price)
    }

    pub fn display_discounted_price(&self) -> String {
        if self.is_free {
            "FREE".to_string()
        } else {
            format_price(self.discounted_price)
        }
    }
}

/// A vehicle the resolver could not load, kept for the end-of-run report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleFailure {
    pub name: String,
    pub attempted_slug: String,
    pub category: String,
    pub reason: String,
}

impl VehicleFailure {
    /// Render as a `[slug_overrides]` entry ready to paste into the config.
    pub fn override_hint(&self) -> String {
        format!(
            "\"{}\" = \"correct-slug-here\"  # {} - attempted: {}",
            self.name, self.category, self.attempted_slug
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscountTier {
    Percent(u32),
    Free,
    Other,
}

/// A discount line split into its tier label and item name,
/// e.g. `"30% Off: Cheval Taipan"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscountLine {
    pub label: String,
    pub item: String,
}

impl DiscountLine {
    pub fn parse(line: &str) -> Option<Self> {
        let (label, item) = line.split_once(':')?;
        let label = label.trim();
        let item = item.trim();
        if label.is_empty() || item.is_empty() {
            return None;
        }
        Some(Self {
            label: label.to_string(),
            item: item.to_string(),
        })
    }

    pub fn tier(&self) -> DiscountTier {
        if let Some(caps) = PERCENT_OFF.captures(&self.label) {
            if let Ok(pct) = caps[1].parse::<u32>() {
                return DiscountTier::Percent(pct);
            }
        }
        if self.label.to_lowercase().contains("free") {
            DiscountTier::Free
        } else {
            DiscountTier::Other
        }
    }
}

/// Format a price as `$1,234,567`, or `N/A` when unknown.
pub fn format_price(price: Option<u64>) -> String {
    let Some(price) = price else {
        return "N/A".to_string();
    };

    let digits = price.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
