use crate::domain::NOT_FOUND;
use crate::extractor::clean::{clean_value, strip_links};

/// A `Key Phrase: value` field looked up by its phrase.
#[derive(Debug, Clone, Copy)]
pub struct FieldKey {
    pub phrase: &'static str,
    /// Longer phrases that contain `phrase`; lines carrying them belong to
    /// the longer key.
    pub shadowed_by: &'static [&'static str],
}

impl FieldKey {
    pub const fn new(phrase: &'static str) -> Self {
        Self {
            phrase,
            shadowed_by: &[],
        }
    }

    pub const fn shadowed(phrase: &'static str, shadowed_by: &'static [&'static str]) -> Self {
        Self {
            phrase,
            shadowed_by,
        }
    }
}

pub const PODIUM_VEHICLE: FieldKey = FieldKey::new("Podium Vehicle");
pub const PRIZE_RIDE_VEHICLE: FieldKey = FieldKey::new("Prize Ride Vehicle");
pub const PRIZE_RIDE_CHALLENGE: FieldKey = FieldKey::new("Prize Ride Challenge");
pub const TIME_TRIAL: FieldKey = FieldKey::shadowed("Time Trial", &["HSW Time Trial"]);
pub const PREMIUM_RACE: FieldKey = FieldKey::new("Premium Race");
pub const HSW_TIME_TRIAL: FieldKey = FieldKey::new("HSW Time Trial");

/// Value of the first line that carries `key` followed by a `:`.
///
/// Links are resolved to their text before the separator is located, so a
/// colon inside a URL never splits the line. Returns [`NOT_FOUND`] when no
/// line yields a non-empty value.
pub fn key_value(body: &str, key: &FieldKey) -> String {
    for line in body.lines() {
        if !line.contains(key.phrase) || !line.contains(':') {
            continue;
        }
        if key.shadowed_by.iter().any(|longer| line.contains(longer)) {
            continue;
        }

        let line = strip_links(line);
        let Some(start) = line.find(key.phrase) else {
            continue;
        };
        let after_key = &line[start + key.phrase.len()..];
        let Some((_, value)) = after_key.split_once(':') else {
            continue;
        };

        let value = clean_value(value);
        if !value.is_empty() {
            return value;
        }
    }

    NOT_FOUND.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_podium_vehicle_with_link_and_note() {
        let body = "intro\n**Podium Vehicle:** [Taipan](url) (some note)\nmore";
        assert_eq!(key_value(body, &PODIUM_VEHICLE), "Taipan");
    }

    #[test]
    fn test_value_with_real_url_link() {
        let body = "* **Prize Ride Vehicle:** [Pfister Comet S2 Cabrio](https://gta.fandom.com/wiki/Comet_S2_Cabrio)";
        assert_eq!(key_value(body, &PRIZE_RIDE_VEHICLE), "Pfister Comet S2 Cabrio");
    }

    #[test]
    fn test_value_keeps_inner_colons() {
        let body = "**Prize Ride Challenge:** Place Top 3 in the LS Car Meet Series: 3 days in a row";
        assert_eq!(
            key_value(body, &PRIZE_RIDE_CHALLENGE),
            "Place Top 3 in the LS Car Meet Series: 3 days in a row"
        );
    }

    #[test]
    fn test_missing_key_is_not_found() {
        let body = "# Bonuses\n* nothing relevant";
        assert_eq!(key_value(body, &PREMIUM_RACE), NOT_FOUND);
    }

    #[test]
    fn test_key_without_separator_is_skipped() {
        let body = "The Podium Vehicle rotates weekly\n**Podium Vehicle:** Ocelot Pariah";
        assert_eq!(key_value(body, &PODIUM_VEHICLE), "Ocelot Pariah");
    }

    #[test]
    fn test_shadowed_key_skips_longer_phrase() {
        let body = "**HSW Time Trial:** Mount Chiliad\n**Time Trial:** Del Perro Pier";
        assert_eq!(key_value(body, &TIME_TRIAL), "Del Perro Pier");
        assert_eq!(key_value(body, &HSW_TIME_TRIAL), "Mount Chiliad");
    }

    #[test]
    fn test_empty_value_keeps_scanning() {
        let body = "**Premium Race:**\n**Premium Race:** Stunt - Double Loop";
        assert_eq!(key_value(body, &PREMIUM_RACE), "Stunt - Double Loop");
    }
}
