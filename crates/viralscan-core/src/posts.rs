use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single post returned by a collector backend.
///
/// Serializes with the short field names used in the report's
/// `sample_tweets` list (`likes`, `retweets`, `replies`, `date`, `user`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRecord {
    pub text: String,
    #[serde(rename = "likes")]
    pub like_count: u64,
    #[serde(rename = "retweets")]
    pub retweet_count: u64,
    #[serde(rename = "replies")]
    pub reply_count: u64,
    #[serde(rename = "date")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(rename = "user")]
    pub author: Option<String>,
}

impl PostRecord {
    /// Likes + retweets + replies.
    #[must_use]
    pub fn engagement(&self) -> u64 {
        self.like_count
            .saturating_add(self.retweet_count)
            .saturating_add(self.reply_count)
    }
}
