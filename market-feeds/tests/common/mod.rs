#![allow(dead_code)]

use async_trait::async_trait;
use market_feeds::normalizer::item_id;
use market_feeds::{FeedError, FeedSource, Item, RawEntry, Result, Snapshot, Source};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Mutex, Once};

static INIT: Once = Once::new();

pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

pub const RSS_SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:dc="http://purl.org/dc/elements/1.1/">
  <channel>
    <title>Markets</title>
    <link>http://example.com/</link>
    <description>Indian markets</description>
    <item>
      <title>RBI hikes rates</title>
      <link>http://x/1</link>
      <description><![CDATA[<p>The <b>central bank</b> moved.</p>]]></description>
      <pubDate>2024-01-01T00:00:00Z</pubDate>
    </item>
    <item>
      <title>  Global cues mixed  </title>
      <link>http://x/2</link>
      <description>Asian markets traded flat.</description>
      <pubDate>Tue, 02 Jan 2024 09:30:00 +0530</pubDate>
    </item>
    <item>
      <title>Sensex ends week higher</title>
      <guid isPermaLink="true">http://x/3</guid>
      <dc:date>2024-03-05T09:15:00+05:30</dc:date>
    </item>
    <item>
      <title>Untimed note</title>
      <link>http://x/4</link>
      <pubDate>sometime last week</pubDate>
    </item>
  </channel>
</rss>"#;

pub const ATOM_SAMPLE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Market wire</title>
  <id>urn:example:wire</id>
  <updated>2024-01-02T10:00:00Z</updated>
  <entry>
    <title>Nifty closes at record</title>
    <link href="http://example.com/a/1"/>
    <id>urn:example:1</id>
    <updated>2024-01-02T10:00:00Z</updated>
    <summary>Benchmarks rallied into the close.</summary>
  </entry>
</feed>"#;

pub const EMPTY_RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Quiet</title>
    <link>http://example.com/</link>
    <description>Nothing today</description>
  </channel>
</rss>"#;

pub fn source(name: &str, url: &str) -> Source {
    Source {
        name: name.to_string(),
        url: url.to_string(),
    }
}

pub fn raw_entry(title: &str, link: &str, published_raw: Option<&str>) -> RawEntry {
    RawEntry {
        title: Some(title.to_string()),
        link: Some(link.to_string()),
        published_raw: published_raw.map(str::to_string),
        ..Default::default()
    }
}

pub fn make_item(source: &str, title: &str, link: &str, published_utc: Option<&str>) -> Item {
    Item {
        id: item_id(source, title, link),
        likely_india_equity: false,
        link: link.to_string(),
        published_ist: None,
        published_raw: None,
        published_utc: published_utc.map(str::to_string),
        source: source.to_string(),
        summary: None,
        title: title.to_string(),
    }
}

/// Snapshot order: newest `published_utc` first, then title, both descending.
pub fn is_recency_ordered(items: &[Item]) -> bool {
    items.windows(2).all(|pair| {
        let key = |item: &Item| (item.published_utc.clone().unwrap_or_default(), item.title.clone());
        key(&pair[0]) >= key(&pair[1])
    })
}

pub fn read_snapshot(path: impl AsRef<Path>) -> Snapshot {
    let contents = std::fs::read_to_string(path).unwrap();
    serde_json::from_str(&contents).unwrap()
}

pub enum StubFeed {
    Entries(Vec<RawEntry>),
    Fail(String),
}

/// Serves canned entries keyed by URL and records the order it was called in.
pub struct StubSource {
    feeds: HashMap<String, StubFeed>,
    pub calls: Mutex<Vec<String>>,
}

impl StubSource {
    pub fn new() -> Self {
        Self {
            feeds: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_entries(mut self, url: &str, entries: Vec<RawEntry>) -> Self {
        self.feeds.insert(url.to_string(), StubFeed::Entries(entries));
        self
    }

    pub fn with_failure(mut self, url: &str, error: &str) -> Self {
        self.feeds.insert(url.to_string(), StubFeed::Fail(error.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl FeedSource for StubSource {
    async fn pull(&self, source: &Source) -> Result<Vec<RawEntry>> {
        self.calls.lock().unwrap().push(source.url.clone());
        match self.feeds.get(&source.url) {
            Some(StubFeed::Entries(entries)) => Ok(entries.clone()),
            Some(StubFeed::Fail(error)) => Err(FeedError::Parse(error.clone())),
            None => Err(FeedError::HttpStatus {
                status: 404,
                url: source.url.clone(),
            }),
        }
    }
}
