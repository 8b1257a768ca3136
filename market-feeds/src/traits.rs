use crate::types::{RawEntry, Result, Source};
use async_trait::async_trait;

/// Anything that can turn a configured source into raw feed entries.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// One attempt, no retries. An error means the source contributes nothing this run.
    async fn pull(&self, source: &Source) -> Result<Vec<RawEntry>>;
}
