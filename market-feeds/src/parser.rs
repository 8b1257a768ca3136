use crate::types::{FeedError, RawEntry, Result};
use tracing::debug;

/// Reads RSS 2.0 with the `rss` crate so raw date strings survive,
/// and hands every other format to `feed-rs`.
pub struct FeedParser;

impl FeedParser {
    pub fn parse_feed(content: &[u8]) -> Result<Vec<RawEntry>> {
        debug!("Parsing feed content ({} bytes)", content.len());

        match rss::Channel::read_from(content) {
            Ok(channel) => Ok(Self::entries_from_channel(&channel)),
            Err(rss_error) => {
                debug!("Not an RSS 2.0 channel ({}), trying feed-rs", rss_error);
                let feed = feed_rs::parser::parse(content)
                    .map_err(|e| FeedError::Parse(format!("Failed to parse feed: {}", e)))?;
                Ok(feed.entries.into_iter().map(Self::entry_from_feed_rs).collect())
            }
        }
    }

    fn entries_from_channel(channel: &rss::Channel) -> Vec<RawEntry> {
        channel
            .items()
            .iter()
            .map(|item| {
                let link = item.link().map(str::to_string).or_else(|| {
                    item.guid()
                        .filter(|guid| guid.is_permalink())
                        .map(|guid| guid.value().to_string())
                });
                let updated_raw = item
                    .dublin_core_ext()
                    .and_then(|dc| dc.dates().first())
                    .cloned();

                RawEntry {
                    title: item.title().map(str::to_string),
                    link,
                    summary: item
                        .description()
                        .or_else(|| item.content())
                        .map(str::to_string),
                    published: None,
                    updated: None,
                    published_raw: item.pub_date().map(str::to_string),
                    updated_raw,
                }
            })
            .collect()
    }

    fn entry_from_feed_rs(entry: feed_rs::model::Entry) -> RawEntry {
        let summary = entry
            .summary
            .map(|s| s.content)
            .or_else(|| entry.content.and_then(|c| c.body));

        RawEntry {
            title: entry.title.map(|t| t.content),
            link: entry.links.first().map(|l| l.href.clone()),
            summary,
            published: entry.published,
            updated: entry.updated,
            published_raw: entry.published.map(|dt| dt.to_rfc3339()),
            updated_raw: entry.updated.map(|dt| dt.to_rfc3339()),
        }
    }
}
