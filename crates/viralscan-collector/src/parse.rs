//! Field normalization shared by the backend response types.

use chrono::{DateTime, Utc};

/// Format used by the classic Twitter API, e.g. `Wed Oct 10 20:19:24 +0000 2018`.
const TWITTER_DATE_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

/// Parse an RFC 3339 or classic Twitter timestamp. Anything else is `None`.
pub(crate) fn parse_timestamp(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = raw?.trim();
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_str(raw, TWITTER_DATE_FORMAT))
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Missing or negative counts become zero.
pub(crate) fn count(raw: Option<i64>) -> u64 {
    raw.and_then(|n| u64::try_from(n).ok()).unwrap_or(0)
}
