use crate::relevance::TickerMatcher;
use crate::rss_utils::{feed, time};
use crate::types::{Item, RawEntry, SUMMARY_MAX_CHARS};
use chrono::{DateTime, Utc};
use sha1::{Digest, Sha1};

/// Turns parser output into canonical `Item`s for one source.
pub struct Normalizer<'a> {
    matcher: &'a TickerMatcher,
}

impl<'a> Normalizer<'a> {
    pub fn new(matcher: &'a TickerMatcher) -> Self {
        Self { matcher }
    }

    pub fn normalize(&self, source_name: &str, entry: &RawEntry) -> Item {
        let title = entry.title.as_deref().unwrap_or("").trim().to_string();
        let link = entry.link.as_deref().unwrap_or("").trim().to_string();
        let summary = feed::clean_summary(entry.summary.as_deref(), SUMMARY_MAX_CHARS);

        let published_utc = entry_timestamp(entry);
        let published_raw = entry
            .published_raw
            .clone()
            .or_else(|| entry.updated_raw.clone())
            .filter(|raw| !raw.trim().is_empty());

        Item {
            id: item_id(source_name, &title, &link),
            likely_india_equity: self.matcher.matches_entry(&title, summary.as_deref()),
            link,
            published_ist: published_utc.as_ref().map(time::format_ist),
            published_raw,
            published_utc: published_utc.as_ref().map(time::format_utc),
            source: source_name.to_string(),
            summary,
            title,
        }
    }

    pub fn normalize_all(&self, source_name: &str, entries: &[RawEntry]) -> Vec<Item> {
        entries
            .iter()
            .map(|entry| self.normalize(source_name, entry))
            .collect()
    }
}

/// Structured published, then structured updated, then the raw strings in the same order.
pub fn entry_timestamp(entry: &RawEntry) -> Option<DateTime<Utc>> {
    entry
        .published
        .or(entry.updated)
        .or_else(|| entry.published_raw.as_deref().and_then(time::parse_timestamp))
        .or_else(|| entry.updated_raw.as_deref().and_then(time::parse_timestamp))
}

/// First 16 hex characters of a SHA-1 over the concatenated parts.
pub fn item_id(source_name: &str, title: &str, link: &str) -> String {
    let mut hasher = Sha1::new();
    for part in [source_name, title, link] {
        hasher.update(part.as_bytes());
    }
    hex::encode(&hasher.finalize()[..8])
}
