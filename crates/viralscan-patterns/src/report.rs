//! The JSON-shaped result of one scan.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use viralscan_core::PostRecord;

use crate::rank::RankedEntry;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub success: bool,
    pub stats: ReportStats,
    pub patterns: PatternSummary,
    pub sample_tweets: Vec<PostRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportStats {
    pub total_tweets: usize,
    pub total_engagement: u64,
    /// Mean engagement per post, rounded to two decimals. `0.0` with no posts.
    pub avg_engagement: f64,
    pub queries: Vec<String>,
    /// Human-readable lookback, e.g. `Last 7 days`.
    pub date_range: String,
    pub scraped_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternSummary {
    pub top_keywords: Vec<KeywordCount>,
    pub top_hashtags: Vec<HashtagCount>,
    pub top_phrases: Vec<PhraseCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCount {
    pub word: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashtagCount {
    pub tag: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseCount {
    pub phrase: String,
    pub count: usize,
}

impl From<RankedEntry> for KeywordCount {
    fn from(entry: RankedEntry) -> Self {
        Self {
            word: entry.value,
            count: entry.count,
        }
    }
}

impl From<RankedEntry> for HashtagCount {
    fn from(entry: RankedEntry) -> Self {
        Self {
            tag: entry.value,
            count: entry.count,
        }
    }
}

impl From<RankedEntry> for PhraseCount {
    fn from(entry: RankedEntry) -> Self {
        Self {
            phrase: entry.value,
            count: entry.count,
        }
    }
}

/// Run-level facts the aggregator cannot derive from posts alone.
#[derive(Debug, Clone)]
pub struct ReportMeta {
    pub queries: Vec<String>,
    pub days_back: u32,
    pub scraped_at: DateTime<Utc>,
}

impl ReportMeta {
    #[must_use]
    pub fn date_range(&self) -> String {
        format!("Last {} days", self.days_back)
    }
}
