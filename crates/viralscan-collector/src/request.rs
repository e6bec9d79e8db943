use chrono::{DateTime, NaiveDate, TimeDelta, Utc};

/// Constraints shared by every query of one scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub min_engagement: u64,
    pub since: NaiveDate,
    pub max_results: usize,
    pub language: String,
}

impl SearchParams {
    #[must_use]
    pub fn request(&self, query: &str) -> SearchRequest {
        SearchRequest {
            query: query.to_string(),
            min_engagement: self.min_engagement,
            since: self.since,
            max_results: self.max_results,
            language: self.language.clone(),
        }
    }
}

/// One query handed to a [`crate::Collector`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub min_engagement: u64,
    pub since: NaiveDate,
    pub max_results: usize,
    pub language: String,
}

impl SearchRequest {
    /// The query text with X search operators for the engagement floor,
    /// recency window and language appended.
    #[must_use]
    pub fn search_string(&self) -> String {
        format!(
            "{} min_faves:{} since:{} lang:{}",
            self.query,
            self.min_engagement,
            self.since.format("%Y-%m-%d"),
            self.language
        )
    }
}

/// The calendar date `days_back` days before `now`, or `None` when that
/// falls outside the representable date range.
#[must_use]
pub fn since_date(now: DateTime<Utc>, days_back: u32) -> Option<NaiveDate> {
    now.checked_sub_signed(TimeDelta::days(i64::from(days_back)))
        .map(|since| since.date_naive())
}
