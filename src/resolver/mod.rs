//! Looks up every vehicle named in a [`WeeklyUpdate`] on the catalog site.
//!
//! Vehicles are visited one at a time with a fixed pause between them. A
//! vehicle whose page does not load is recorded as a [`VehicleFailure`] and
//! the run moves on.

pub mod price;
pub mod slug;
pub mod targets;

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::app::{Result, WeeklyTrackError};
use crate::domain::{VehicleFailure, VehicleRecord, WeeklyUpdate};
use crate::scraper::{CatalogPage, ScraperConfig};

use self::targets::TargetDiscount;

pub use price::{calculate_discounted_price, parse_price};
pub use slug::{normalize_vehicle_name, SlugOverrides};
pub use targets::{collect_targets, Target};

/// Outcome of a resolve run.
#[derive(Debug, Clone, Default)]
pub struct ResolveReport {
    pub vehicles: BTreeMap<String, VehicleRecord>,
    pub failures: Vec<VehicleFailure>,
}

impl ResolveReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

pub struct VehicleResolver {
    catalog: Arc<dyn CatalogPage>,
    config: ScraperConfig,
    overrides: SlugOverrides,
}

impl VehicleResolver {
    pub fn new(catalog: Arc<dyn CatalogPage>, config: ScraperConfig, overrides: SlugOverrides) -> Self {
        Self {
            catalog,
            config,
            overrides,
        }
    }

    pub async fn resolve_all(&self, update: &WeeklyUpdate) -> ResolveReport {
        let targets = collect_targets(update, &self.config);
        info!("Resolving {} vehicles", targets.len());

        let mut report = ResolveReport::default();
        let mut visited = 0;

        for target in &targets {
            // Listed twice (e.g. podium and discount): reuse the page data, later listing wins
            if let Some(existing) = report.vehicles.get(&target.name) {
                debug!(
                    "{} already resolved, updating as {}",
                    target.name, target.category
                );
                let mut record = existing.clone();
                record.category = target.category.clone();
                if let Some(ref discount) = target.discount {
                    apply_discount(&mut record, discount);
                }
                report.vehicles.insert(target.name.clone(), record);
                continue;
            }
            if report.failures.iter().any(|f| f.name == target.name) {
                debug!("Skipping {}, already failed", target.name);
                continue;
            }

            if visited > 0 && !self.config.delay().is_zero() {
                tokio::time::sleep(self.config.delay()).await;
            }
            visited += 1;

            let slug = self.overrides.slug_for(&target.name);
            info!(
                "Fetching data for {}: {} ({})",
                target.category, target.name, slug
            );

            match self.resolve_one(target, &slug).await {
                Ok(record) => {
                    report.vehicles.insert(target.name.clone(), record);
                }
                Err(e) => {
                    warn!("Failed to resolve {}: {}", target.name, e);
                    report.failures.push(VehicleFailure {
                        name: target.name.clone(),
                        attempted_slug: slug,
                        category: target.category.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        info!(
            "Resolved {} vehicles, {} failed",
            report.vehicles.len(),
            report.failures.len()
        );

        report
    }

    pub async fn resolve_one(&self, target: &Target, slug: &str) -> Result<VehicleRecord> {
        let url = self.config.vehicle_url(slug);
        let probe = self.catalog.probe(&url).await?;

        let image_src = match probe.image_src.as_deref().map(str::trim) {
            Some(src) if !src.is_empty() => src,
            _ => {
                return Err(WeeklyTrackError::ElementNotFound {
                    url,
                    selector: self.config.image_selector.clone(),
                })
            }
        };

        let original_price = parse_price(probe.price_value.as_deref(), probe.price_text.as_deref());

        let mut record = VehicleRecord {
            category: target.category.clone(),
            url: url.clone(),
            slug: slug.to_string(),
            image_url: self.config.absolute_url(image_src),
            original_price,
            ..Default::default()
        };

        if let Some(ref discount) = target.discount {
            apply_discount(&mut record, discount);
        }

        Ok(record)
    }
}

fn apply_discount(record: &mut VehicleRecord, discount: &TargetDiscount) {
    record.discount = Some(discount.line.clone());
    record.discount_percent = discount.percent;
    record.is_free = discount.is_free;
    record.discounted_price = if discount.is_free {
        record.original_price.map(|_| 0)
    } else {
        discount
            .percent
            .and_then(|pct| calculate_discounted_price(record.original_price, pct))
    };
}
