use serde::{Deserialize, Serialize};

/// Value used when a single-valued field is missing from the post.
pub const NOT_FOUND: &str = "Not found";

/// Placeholder list entry when the bonus or discount section yields nothing.
pub const SEE_FULL_POST: &str = "See full post for details";

/// Structured contents of one weekly post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WeeklyUpdate {
    pub week_of: String,
    pub intro_messages: Vec<String>,
    pub podium_vehicle: String,
    pub prize_ride_vehicle: String,
    pub prize_ride_challenge: String,
    pub time_trial: String,
    pub premium_race: String,
    pub hsw_time_trial: String,
    pub salvage_yard_robberies: Vec<Robbery>,
    pub weekly_challenge: String,
    pub bonuses: Vec<String>,
    pub discounts: Vec<String>,
}

impl Default for WeeklyUpdate {
    fn default() -> Self {
        Self {
            week_of: "Unknown Date".to_string(),
            intro_messages: Vec::new(),
            podium_vehicle: NOT_FOUND.to_string(),
            prize_ride_vehicle: NOT_FOUND.to_string(),
            prize_ride_challenge: NOT_FOUND.to_string(),
            time_trial: NOT_FOUND.to_string(),
            premium_race: NOT_FOUND.to_string(),
            hsw_time_trial: NOT_FOUND.to_string(),
            salvage_yard_robberies: Vec::new(),
            weekly_challenge: NOT_FOUND.to_string(),
            bonuses: vec![SEE_FULL_POST.to_string()],
            discounts: vec![SEE_FULL_POST.to_string()],
        }
    }
}

impl WeeklyUpdate {
    /// Whether a single-valued field holds real data rather than the sentinel.
    pub fn is_found(value: &str) -> bool {
        !value.is_empty() && value != NOT_FOUND
    }

    /// Bonus lines, excluding the placeholder.
    pub fn real_bonuses(&self) -> impl Iterator<Item = &str> {
        self.bonuses
            .iter()
            .map(String::as_str)
            .filter(|b| *b != SEE_FULL_POST)
    }

    /// Discount lines, excluding the placeholder.
    pub fn real_discounts(&self) -> impl Iterator<Item = &str> {
        self.discounts
            .iter()
            .map(String::as_str)
            .filter(|d| *d != SEE_FULL_POST)
    }
}

/// A salvage yard robbery and the vehicle it pays out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Robbery {
    #[serde(rename = "type")]
    pub kind: String,
    pub vehicle: String,
}

impl Robbery {
    pub fn new(kind: impl Into<String>, vehicle: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            vehicle: vehicle.into(),
        }
    }
}
