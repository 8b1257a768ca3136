use crate::traits::FeedSource;
use crate::types::{FetchConfig, RawEntry, Result, Source};
use crate::{FeedParser, Fetcher};
use async_trait::async_trait;
use tracing::debug;

/// Fetches a source over HTTP and parses whatever comes back.
pub struct RssFeedSource {
    fetcher: Fetcher,
}

impl RssFeedSource {
    pub fn new(config: &FetchConfig) -> Result<Self> {
        Ok(Self {
            fetcher: Fetcher::new(config)?,
        })
    }
}

#[async_trait]
impl FeedSource for RssFeedSource {
    async fn pull(&self, source: &Source) -> Result<Vec<RawEntry>> {
        debug!("Pulling RSS feed {} from {}", source.name, source.url);

        let content = self.fetcher.fetch_feed(&source.url).await?;
        FeedParser::parse_feed(&content)
    }
}
