use crate::rss_utils::time;
use crate::types::{Item, Snapshot};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tracing::debug;

/// Merges items from every source of a run, keyed by `Item::dedup_key`.
///
/// A later item with a key already present replaces the earlier one in place,
/// so the first-seen position is kept while the content is last-write-wins.
#[derive(Debug, Default)]
pub struct SnapshotAggregator {
    positions: HashMap<String, usize>,
    items: Vec<Item>,
}

impl SnapshotAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the item replaced an earlier one.
    pub fn merge(&mut self, item: Item) -> bool {
        let key = item.dedup_key().to_string();
        match self.positions.get(&key) {
            Some(&position) => {
                debug!("Replacing duplicate item {} ({})", key, item.source);
                self.items[position] = item;
                true
            }
            None => {
                self.positions.insert(key, self.items.len());
                self.items.push(item);
                false
            }
        }
    }

    /// Merge a batch in order; returns how many replaced earlier items.
    pub fn merge_all(&mut self, items: impl IntoIterator<Item = Item>) -> usize {
        let mut replaced = 0;
        for item in items {
            if self.merge(item) {
                replaced += 1;
            }
        }
        replaced
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Newest first, then title descending. Items without a timestamp sort last.
    pub fn into_sorted(self) -> Vec<Item> {
        let mut items = self.items;
        items.sort_by(|a, b| recency_key(b).cmp(&recency_key(a)));
        items
    }

    pub fn into_snapshot(self, generated_at: DateTime<Utc>) -> Snapshot {
        let items = self.into_sorted();
        Snapshot {
            count: items.len(),
            generated_utc: time::format_utc(&generated_at),
            items,
        }
    }
}

fn recency_key(item: &Item) -> (&str, &str) {
    (item.published_utc.as_deref().unwrap_or(""), item.title.as_str())
}
