pub mod http_fetcher;

pub use http_fetcher::RedditFetcher;

use async_trait::async_trait;
use url::Url;

use crate::app::{Result, WeeklyTrackError};
use crate::config::SourceConfig;
use crate::domain::{Listing, RedditPost};

#[async_trait]
pub trait PostSource: Send + Sync {
    /// Newest post whose title contains the configured phrase.
    async fn latest_post(&self) -> Result<RedditPost>;
}

/// Subreddit search URL for the newest post titled with `title_phrase`.
pub fn search_url(config: &SourceConfig) -> Result<Url> {
    let mut url = Url::parse(config.reddit_base.trim_end_matches('/'))?;
    url.path_segments_mut()
        .map_err(|_| {
            WeeklyTrackError::Config(format!("Invalid reddit_base: {}", config.reddit_base))
        })?
        .pop_if_empty()
        .extend(["r", config.subreddit.as_str(), "search.json"]);

    url.query_pairs_mut()
        .append_pair("q", &format!("title:\"{}\"", config.title_phrase))
        .append_pair("restrict_sr", "1")
        .append_pair("sort", "new")
        .append_pair("limit", "1");

    Ok(url)
}

/// Decode a search response and take its first post.
pub fn parse_listing(body: &[u8], title_phrase: &str) -> Result<RedditPost> {
    let listing: Listing = serde_json::from_slice(body)?;
    listing
        .into_first_post()
        .ok_or_else(|| WeeklyTrackError::NoPostFound(title_phrase.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url_default() {
        let url = search_url(&SourceConfig::default()).unwrap();

        assert_eq!(url.host_str(), Some("www.reddit.com"));
        assert_eq!(url.path(), "/r/gtaonline/search.json");

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("q".to_string(), "title:\"Weekly Bonuses and Discounts\"".to_string()),
                ("restrict_sr".to_string(), "1".to_string()),
                ("sort".to_string(), "new".to_string()),
                ("limit".to_string(), "1".to_string()),
            ]
        );
    }

    #[test]
    fn test_search_url_trailing_slash_base() {
        let config = SourceConfig {
            reddit_base: "http://localhost:9000/".to_string(),
            subreddit: "test".to_string(),
            ..Default::default()
        };
        let url = search_url(&config).unwrap();
        assert_eq!(url.path(), "/r/test/search.json");
        assert_eq!(url.port(), Some(9000));
    }

    #[test]
    fn test_search_url_rejects_bad_base() {
        let config = SourceConfig {
            reddit_base: "not a url".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            search_url(&config),
            Err(WeeklyTrackError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_parse_listing_first_post() {
        let body = br#"{"data": {"children": [
            {"data": {"title": "Weekly Bonuses and Discounts - Jan 2", "selftext": "body", "author": "a", "score": 3, "permalink": "/r/x/1"}},
            {"data": {"title": "older", "selftext": ""}}
        ]}}"#;

        let post = parse_listing(body, "Weekly Bonuses and Discounts").unwrap();
        assert_eq!(post.title, "Weekly Bonuses and Discounts - Jan 2");
        assert_eq!(post.selftext, "body");
        assert_eq!(post.score, 3);
    }

    #[test]
    fn test_parse_listing_empty_is_no_post() {
        let body = br#"{"kind": "Listing", "data": {"children": []}}"#;
        let err = parse_listing(body, "Weekly Bonuses and Discounts").unwrap_err();
        assert!(matches!(err, WeeklyTrackError::NoPostFound(ref p) if p == "Weekly Bonuses and Discounts"));
    }

    #[test]
    fn test_parse_listing_invalid_json() {
        let err = parse_listing(b"<html>blocked</html>", "x").unwrap_err();
        assert!(matches!(err, WeeklyTrackError::Json(_)));
    }
}
