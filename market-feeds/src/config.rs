use crate::relevance::{TickerMatcher, DEFAULT_TICKER_HINTS};
use crate::types::{FeedError, FetchConfig, Result, Source, DEFAULT_REQUEST_DELAY_MS, DEFAULT_USER_AGENT};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// On-disk shape of `feeds.yml`.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedsConfig {
    pub sources: Vec<Source>,
    #[serde(default)]
    pub user_agent: Option<String>,
    #[serde(default)]
    pub request_delay_ms: Option<u64>,
    #[serde(default)]
    pub ticker_hints: Option<Vec<String>>,
}

impl FeedsConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading feed config from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::from_str(&contents)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(contents: &str) -> Result<Self> {
        let config: FeedsConfig = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        for (index, source) in self.sources.iter().enumerate() {
            if source.name.trim().is_empty() {
                return Err(FeedError::InvalidConfig(format!("source #{} has an empty name", index + 1)));
            }
            if source.url.trim().is_empty() {
                return Err(FeedError::InvalidConfig(format!("source '{}' has an empty url", source.name)));
            }
        }
        Ok(())
    }

    /// Resolve the optional tuning keys against the built-in defaults.
    pub fn pipeline_config(&self) -> Result<PipelineConfig> {
        let hints: Vec<String> = match &self.ticker_hints {
            Some(hints) => hints.clone(),
            None => DEFAULT_TICKER_HINTS.iter().map(|h| h.to_string()).collect(),
        };

        Ok(PipelineConfig {
            fetch: FetchConfig {
                user_agent: self
                    .user_agent
                    .clone()
                    .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
                request_delay: Duration::from_millis(self.request_delay_ms.unwrap_or(DEFAULT_REQUEST_DELAY_MS)),
            },
            matcher: TickerMatcher::new(&hints)?,
        })
    }
}

/// Everything the pipeline needs besides the source list.
#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    pub fetch: FetchConfig,
    pub matcher: TickerMatcher,
}

impl PipelineConfig {
    pub fn with_request_delay(mut self, delay: Duration) -> Self {
        self.fetch.request_delay = delay;
        self
    }
}
