use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single post as returned by the subreddit search endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RedditPost {
    pub title: String,
    pub selftext: String,
    pub author: String,
    pub score: i64,
    pub permalink: String,
    pub created_utc: Option<f64>,
}

impl RedditPost {
    pub fn new(title: impl Into<String>, selftext: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            selftext: selftext.into(),
            ..Default::default()
        }
    }

    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            "Unknown"
        } else {
            &self.title
        }
    }

    pub fn permalink_url(&self) -> String {
        format!("https://reddit.com{}", self.permalink)
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_utc
            .and_then(|secs| DateTime::from_timestamp(secs as i64, 0))
    }
}

/// Search response envelope: `{data: {children: [{data: post}]}}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Listing {
    pub data: ListingData,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListingData {
    pub children: Vec<ListingChild>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListingChild {
    pub data: RedditPost,
}

impl Listing {
    /// The first (newest, given `sort=new`) post in the listing.
    pub fn into_first_post(self) -> Option<RedditPost> {
        self.data.children.into_iter().next().map(|c| c.data)
    }
}
