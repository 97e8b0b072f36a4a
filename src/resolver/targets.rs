use tracing::{debug, info};

use crate::domain::{DiscountLine, DiscountTier, WeeklyUpdate};
use crate::scraper::ScraperConfig;

pub const PODIUM_VEHICLE: &str = "Podium Vehicle";
pub const PRIZE_RIDE_VEHICLE: &str = "Prize Ride Vehicle";
pub const DISCOUNT: &str = "Discount";

/// Discount attached to a target taken from the discount list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetDiscount {
    /// Full discount line, e.g. `"30% Off: Cheval Taipan"`
    pub line: String,
    pub percent: Option<u32>,
    pub is_free: bool,
}

/// One vehicle to look up in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub name: String,
    pub category: String,
    pub discount: Option<TargetDiscount>,
}

impl Target {
    fn plain(name: &str, category: &str) -> Self {
        Self {
            name: name.to_string(),
            category: category.to_string(),
            discount: None,
        }
    }
}

/// Vehicles named in `update`, in lookup order: podium, prize ride,
/// robberies, then discounted vehicles.
pub fn collect_targets(update: &WeeklyUpdate, config: &ScraperConfig) -> Vec<Target> {
    let mut targets = Vec::new();

    if WeeklyUpdate::is_found(&update.podium_vehicle) {
        targets.push(Target::plain(&update.podium_vehicle, PODIUM_VEHICLE));
    }

    if WeeklyUpdate::is_found(&update.prize_ride_vehicle) {
        targets.push(Target::plain(&update.prize_ride_vehicle, PRIZE_RIDE_VEHICLE));
    }

    for robbery in &update.salvage_yard_robberies {
        if WeeklyUpdate::is_found(&robbery.vehicle) {
            targets.push(Target::plain(&robbery.vehicle, &robbery.kind));
        }
    }

    for line in update.real_discounts() {
        let Some(parsed) = DiscountLine::parse(line) else {
            continue;
        };

        let (percent, is_free) = match parsed.tier() {
            DiscountTier::Percent(pct) => (Some(pct), false),
            DiscountTier::Free => (None, true),
            DiscountTier::Other => {
                debug!("Ignoring discount without a price tier: {}", line);
                continue;
            }
        };

        if config.is_skipped(&parsed.item) {
            info!("Skipping non-vehicle: {}", parsed.item);
            continue;
        }

        targets.push(Target {
            name: parsed.item,
            category: DISCOUNT.to_string(),
            discount: Some(TargetDiscount {
                line: line.to_string(),
                percent,
                is_free,
            }),
        });
    }

    targets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Robbery, NOT_FOUND};

    fn update() -> WeeklyUpdate {
        WeeklyUpdate {
            podium_vehicle: "Cheval Taipan".into(),
            prize_ride_vehicle: NOT_FOUND.into(),
            salvage_yard_robberies: vec![
                Robbery::new("The Cargo Ship Robbery", "Pegassi Toros"),
                Robbery::new("The Duggan Robbery", "Rhino Tank"),
            ],
            discounts: vec![
                "40% Off: Grotti Itali GTO".into(),
                "30% Off: Properties: Nightclubs".into(),
                "Free: Obey Omnis e-GT".into(),
                "Half Price: Hangars".into(),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_target_order_and_categories() {
        let targets = collect_targets(&update(), &ScraperConfig::default());
        let names: Vec<_> = targets.iter().map(|t| t.name.as_str()).collect();

        assert_eq!(
            names,
            vec![
                "Cheval Taipan",
                "Pegassi Toros",
                "Rhino Tank",
                "Grotti Itali GTO",
                "Obey Omnis e-GT",
            ]
        );
        assert_eq!(targets[0].category, PODIUM_VEHICLE);
        assert_eq!(targets[1].category, "The Cargo Ship Robbery");
        assert_eq!(targets[3].category, DISCOUNT);
    }

    #[test]
    fn test_discount_targets_carry_tier() {
        let targets = collect_targets(&update(), &ScraperConfig::default());

        let gto = targets[3].discount.as_ref().unwrap();
        assert_eq!(gto.line, "40% Off: Grotti Itali GTO");
        assert_eq!(gto.percent, Some(40));
        assert!(!gto.is_free);

        let omnis = targets[4].discount.as_ref().unwrap();
        assert_eq!(omnis.percent, None);
        assert!(omnis.is_free);
    }

    #[test]
    fn test_placeholder_discounts_yield_nothing() {
        let update = WeeklyUpdate::default();
        assert!(collect_targets(&update, &ScraperConfig::default()).is_empty());
    }
}
