//! Turns the markdown body of a weekly post into a [`WeeklyUpdate`].
//!
//! Every field is found with a single forward pass over the body's lines;
//! a field that cannot be found gets its sentinel value instead of an error.

pub mod clean;
pub mod fields;
pub mod lines;
pub mod sections;

use tracing::debug;

use crate::domain::{RedditPost, WeeklyUpdate};

use self::fields::{
    key_value, HSW_TIME_TRIAL, PODIUM_VEHICLE, PREMIUM_RACE, PRIZE_RIDE_CHALLENGE,
    PRIZE_RIDE_VEHICLE, TIME_TRIAL,
};

#[derive(Debug, Clone, Default)]
pub struct WeeklyExtractor;

impl WeeklyExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, post: &RedditPost) -> WeeklyUpdate {
        self.extract_body(&post.title, &post.selftext)
    }

    pub fn extract_body(&self, title: &str, body: &str) -> WeeklyUpdate {
        let update = WeeklyUpdate {
            week_of: clean::clean_title(title),
            intro_messages: sections::intro_messages(body),
            podium_vehicle: key_value(body, &PODIUM_VEHICLE),
            prize_ride_vehicle: key_value(body, &PRIZE_RIDE_VEHICLE),
            prize_ride_challenge: key_value(body, &PRIZE_RIDE_CHALLENGE),
            time_trial: key_value(body, &TIME_TRIAL),
            premium_race: key_value(body, &PREMIUM_RACE),
            hsw_time_trial: key_value(body, &HSW_TIME_TRIAL),
            salvage_yard_robberies: sections::salvage_yard_robberies(body),
            weekly_challenge: sections::weekly_challenge(body),
            bonuses: sections::bonuses(body),
            discounts: sections::discounts(body),
        };

        debug!(
            "Extracted week {}: {} intro, {} robberies, {} bonuses, {} discounts",
            update.week_of,
            update.intro_messages.len(),
            update.salvage_yard_robberies.len(),
            update.bonuses.len(),
            update.discounts.len()
        );

        update
    }
}
