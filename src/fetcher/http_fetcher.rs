use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use crate::app::Result;
use crate::config::SourceConfig;
use crate::domain::RedditPost;
use crate::fetcher::{parse_listing, search_url, PostSource};

/// Fetches the weekly post from the subreddit search endpoint.
pub struct RedditFetcher {
    client: Client,
    config: SourceConfig,
}

impl RedditFetcher {
    pub fn new(config: SourceConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .gzip(true)
            .brotli(true)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl PostSource for RedditFetcher {
    async fn latest_post(&self) -> Result<RedditPost> {
        let url = search_url(&self.config)?;
        info!("Searching r/{} for \"{}\"", self.config.subreddit, self.config.title_phrase);
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        response.error_for_status_ref()?;

        let body = response.bytes().await?;
        let post = parse_listing(&body, &self.config.title_phrase)?;

        info!("Found post: {}", post.display_title());
        Ok(post)
    }
}
