//! Feed-level helpers shared by the parser and the normalizer

/// Timestamp parsing and rendering
pub mod time {
    use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};

    /// India Standard Time is a fixed UTC+5:30 with no DST.
    pub const IST_OFFSET_SECS: i64 = 5 * 3600 + 30 * 60;

    // Trailing zone names rewritten to numeric offsets before any layout is tried.
    // GMT, UT and the US zones are left to chrono's RFC 2822 parser.
    const ZONE_ABBREVIATIONS: &[(&str, &str)] = &[
        ("IST", "+0530"),
        ("UTC", "+0000"),
        ("Z", "+0000"),
    ];

    const OFFSET_DATETIME_FORMATS: &[&str] = &[
        "%Y-%m-%d %H:%M:%S %z",
        "%Y-%m-%dT%H:%M:%S%z",
        "%Y-%m-%dT%H:%M:%S%.f%z",
        "%d %b %Y %H:%M:%S %z",
    ];

    const NAIVE_DATETIME_FORMATS: &[&str] = &[
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%d %b %Y %H:%M:%S",
    ];

    /// Best-effort parse of a timestamp string as found in the wild.
    /// Returns `None` when no known layout fits.
    pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        let normalized = rewrite_zone_abbreviation(raw);
        let candidates = [normalized.as_str(), strip_weekday(&normalized)];

        for candidate in candidates {
            if let Ok(dt) = DateTime::parse_from_rfc2822(candidate) {
                return Some(dt.with_timezone(&Utc));
            }
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(&normalized) {
            return Some(dt.with_timezone(&Utc));
        }

        for candidate in candidates {
            for format in OFFSET_DATETIME_FORMATS {
                if let Ok(dt) = DateTime::parse_from_str(candidate, format) {
                    return Some(dt.with_timezone(&Utc));
                }
            }
            for format in NAIVE_DATETIME_FORMATS {
                if let Ok(naive) = NaiveDateTime::parse_from_str(candidate, format) {
                    return Some(naive.and_utc());
                }
            }
        }

        NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
    }

    fn rewrite_zone_abbreviation(raw: &str) -> String {
        let Some((head, zone)) = raw.rsplit_once(' ') else {
            return raw.to_string();
        };
        match ZONE_ABBREVIATIONS
            .iter()
            .find(|(abbr, _)| abbr.eq_ignore_ascii_case(zone))
        {
            Some((_, offset)) => format!("{} {}", head, offset),
            None => raw.to_string(),
        }
    }

    /// Drops a leading `Tue,` or `Tuesday,` so a wrong or long weekday does not sink the date.
    fn strip_weekday(raw: &str) -> &str {
        match raw.split_once(',') {
            Some((day, rest)) if !day.is_empty() && day.chars().all(|c| c.is_ascii_alphabetic()) => {
                rest.trim_start()
            }
            _ => raw,
        }
    }

    /// `2024-01-01T00:00:00Z`
    pub fn format_utc(dt: &DateTime<Utc>) -> String {
        dt.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }

    /// `01-Jan-2024 05:30 IST`
    pub fn format_ist(dt: &DateTime<Utc>) -> String {
        let shifted = *dt + Duration::seconds(IST_OFFSET_SECS);
        shifted.format("%d-%b-%Y %H:%M IST").to_string()
    }
}

/// Summary text cleanup
pub mod feed {
    use regex::Regex;
    use std::sync::LazyLock;

    static TAG_PATTERN: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"<[^>]+>").expect("tag pattern is a valid regex"));

    /// Remove anything that looks like markup.
    pub fn strip_html(html: &str) -> String {
        TAG_PATTERN.replace_all(html, "").into_owned()
    }

    /// Truncate on character boundaries, not bytes.
    pub fn truncate_chars(text: &str, max_chars: usize) -> String {
        match text.char_indices().nth(max_chars) {
            Some((byte_index, _)) => text[..byte_index].to_string(),
            None => text.to_string(),
        }
    }

    /// Strip, trim and cap a summary; an empty result is reported as absent.
    pub fn clean_summary(raw: Option<&str>, max_chars: usize) -> Option<String> {
        let stripped = strip_html(raw?);
        let trimmed = stripped.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(truncate_chars(trimmed, max_chars))
    }
}
