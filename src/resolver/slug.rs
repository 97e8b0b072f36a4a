use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

static PERCENT_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\d+%\s+Off:\s+").expect("hardcoded regex pattern is valid")
});

static BUILTIN: LazyLock<SlugOverrides> = LazyLock::new(SlugOverrides::default);

/// Vehicles whose catalog slug is not the last word of their name.
pub const DEFAULT_OVERRIDES: &[(&str, &str)] = &[
    ("Rhino Tank", "rhino"),
    ("Dashound", "coach"),
    ("Declasse Vigero ZX", "vigero2"),
    ("Obey Omnis e-GT", "omnisegt"),
    ("Albany Cavalcade XL", "cavalcade3"),
    ("Vapid Dominator FX", "dominator10"),
];

/// Display name -> catalog slug lookup.
#[derive(Debug, Clone)]
pub struct SlugOverrides {
    table: HashMap<String, String>,
}

impl Default for SlugOverrides {
    fn default() -> Self {
        let table = DEFAULT_OVERRIDES
            .iter()
            .map(|(name, slug)| (name.to_string(), slug.to_string()))
            .collect();
        Self { table }
    }
}

impl SlugOverrides {
    /// Built-in table with `extra` entries layered on top.
    pub fn with_extra(extra: &HashMap<String, String>) -> Self {
        let mut overrides = Self::default();
        for (name, slug) in extra {
            overrides.table.insert(name.trim().to_string(), slug.clone());
        }
        overrides
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn slug_for(&self, name: &str) -> String {
        let name = name.trim();
        if let Some(slug) = self.table.get(name) {
            return slug.clone();
        }

        let stripped = PERCENT_PREFIX.replace_all(name, "");
        let stripped = stripped.trim();
        if let Some(slug) = self.table.get(stripped) {
            return slug.clone();
        }

        stripped
            .split_whitespace()
            .last()
            .unwrap_or(stripped)
            .to_lowercase()
    }
}

/// Catalog slug for a vehicle name using the built-in override table.
pub fn normalize_vehicle_name(name: &str) -> String {
    BUILTIN.slug_for(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_overrides() {
        assert_eq!(normalize_vehicle_name("Rhino Tank"), "rhino");
        assert_eq!(normalize_vehicle_name("Declasse Vigero ZX"), "vigero2");
        assert_eq!(normalize_vehicle_name("Dashound"), "coach");
    }

    #[test]
    fn test_last_word_rule() {
        assert_eq!(normalize_vehicle_name("Cheval Taipan"), "taipan");
        assert_eq!(normalize_vehicle_name("Pfister Comet S2 Cabrio"), "cabrio");
        assert_eq!(normalize_vehicle_name("  Pegassi Toros "), "toros");
    }

    #[test]
    fn test_single_word_name() {
        assert_eq!(normalize_vehicle_name("Deluxo"), "deluxo");
    }

    #[test]
    fn test_percent_prefix_is_stripped() {
        assert_eq!(normalize_vehicle_name("30% Off: Cheval Taipan"), "taipan");
        assert_eq!(normalize_vehicle_name("40% Off: Rhino Tank"), "rhino");
    }

    #[test]
    fn test_config_overrides_layer_on_builtin() {
        let mut extra = HashMap::new();
        extra.insert("Karin Hotring Everon".to_string(), "everon2".to_string());
        extra.insert("Rhino Tank".to_string(), "rhino2".to_string());

        let overrides = SlugOverrides::with_extra(&extra);
        assert_eq!(overrides.len(), DEFAULT_OVERRIDES.len() + 1);
        assert_eq!(overrides.slug_for("Karin Hotring Everon"), "everon2");
        assert_eq!(overrides.slug_for("Rhino Tank"), "rhino2");
        assert_eq!(overrides.slug_for("Obey Omnis e-GT"), "omnisegt");
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(normalize_vehicle_name(""), "");
    }
}
