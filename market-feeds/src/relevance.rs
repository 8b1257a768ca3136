use regex::{Regex, RegexBuilder};

/// Index names, market bodies and large-cap tickers that mark an item as Indian equity news.
pub const DEFAULT_TICKER_HINTS: &[&str] = &[
    r"\bNIFTY\b",
    r"\bSENSEX\b",
    r"\bBANK NIFTY\b",
    r"\bNSE\b",
    r"\bBSE\b",
    r"\bIPO\b",
    r"\bFII\b",
    r"\bDII\b",
    r"\bRBI\b",
    r"\bRELIANCE\b",
    r"\bTCS\b",
    r"\bINFY\b",
    r"\bHDFCBANK\b",
    r"\bICICIBANK\b",
    r"\bLT\b",
    r"\bSBIN\b",
    r"\bBHARTI\b",
    r"\bITC\b",
];

/// Case-insensitive alternation over the configured hint patterns.
#[derive(Debug, Clone)]
pub struct TickerMatcher {
    pattern: Option<Regex>,
}

impl TickerMatcher {
    /// An empty hint list yields a matcher that never fires.
    pub fn new<S: AsRef<str>>(hints: &[S]) -> Result<Self, regex::Error> {
        let hints: Vec<&str> = hints
            .iter()
            .map(|h| h.as_ref())
            .filter(|h| !h.is_empty())
            .collect();
        if hints.is_empty() {
            return Ok(Self { pattern: None });
        }

        let pattern = RegexBuilder::new(&hints.join("|"))
            .case_insensitive(true)
            .build()?;
        Ok(Self { pattern: Some(pattern) })
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.as_ref().is_some_and(|re| re.is_match(text))
    }

    pub fn matches_entry(&self, title: &str, summary: Option<&str>) -> bool {
        self.is_match(title) || summary.is_some_and(|s| self.is_match(s))
    }
}

impl Default for TickerMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_TICKER_HINTS).expect("built-in ticker hints are valid regexes")
    }
}
