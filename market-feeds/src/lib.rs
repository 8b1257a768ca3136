pub mod types;
pub mod config;
pub mod relevance;
pub mod rss_utils;
pub mod fetcher;
pub mod parser;
pub mod traits;
pub mod sources;
pub mod normalizer;
pub mod aggregator;
pub mod pipeline;
pub mod snapshot;

pub use types::*;
pub use config::{FeedsConfig, PipelineConfig};
pub use relevance::TickerMatcher;
pub use fetcher::Fetcher;
pub use parser::FeedParser;
pub use traits::FeedSource;
pub use sources::RssFeedSource;
pub use normalizer::Normalizer;
pub use aggregator::SnapshotAggregator;
pub use pipeline::{RunReport, SnapshotPipeline};
