use crate::aggregator::SnapshotAggregator;
use crate::config::PipelineConfig;
use crate::normalizer::Normalizer;
use crate::traits::FeedSource;
use crate::types::{Snapshot, Source, SourceOutcome};
use chrono::Utc;
use tracing::{info, warn};

/// What one run produced, plus how each source fared.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub snapshot: Snapshot,
    pub outcomes: Vec<SourceOutcome>,
}

impl RunReport {
    pub fn failed_sources(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| !matches!(o, SourceOutcome::Fetched { .. }))
            .count()
    }
}

/// Sequential fetch → normalize → merge over the configured sources.
pub struct SnapshotPipeline<S: FeedSource> {
    feed_source: S,
    config: PipelineConfig,
}

impl<S: FeedSource> SnapshotPipeline<S> {
    pub fn new(feed_source: S, config: PipelineConfig) -> Self {
        Self { feed_source, config }
    }

    pub async fn run(&self, sources: &[Source]) -> RunReport {
        let normalizer = Normalizer::new(&self.config.matcher);
        let mut aggregator = SnapshotAggregator::new();
        let mut outcomes = Vec::with_capacity(sources.len());

        info!("Fetching {} sources", sources.len());

        for source in sources {
            let outcome = match self.feed_source.pull(source).await {
                Ok(entries) if entries.is_empty() => {
                    warn!("No entries from {} ({})", source.name, source.url);
                    SourceOutcome::Empty {
                        source: source.name.clone(),
                    }
                }
                Ok(entries) => {
                    let replaced = aggregator.merge_all(normalizer.normalize_all(&source.name, &entries));
                    info!(
                        "{}: {} entries ({} replaced earlier items)",
                        source.name,
                        entries.len(),
                        replaced
                    );
                    SourceOutcome::Fetched {
                        source: source.name.clone(),
                        entries: entries.len(),
                    }
                }
                Err(e) => {
                    warn!("Failed to fetch {} ({}): {}", source.name, source.url, e);
                    SourceOutcome::Failed {
                        source: source.name.clone(),
                        error: e.to_string(),
                    }
                }
            };
            outcomes.push(outcome);

            // Courtesy delay after every source, success or not.
            if !self.config.fetch.request_delay.is_zero() {
                tokio::time::sleep(self.config.fetch.request_delay).await;
            }
        }

        let snapshot = aggregator.into_snapshot(Utc::now());
        info!("Collected {} unique items", snapshot.count);

        RunReport { snapshot, outcomes }
    }
}
