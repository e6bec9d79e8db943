//! Lexical pattern extraction and frequency aggregation for viral posts.
//!
//! Splits each post into keyword, hashtag and phrase token streams, counts
//! them across the whole result set, and ranks the most frequent entries of
//! each category into a [`Report`] alongside engagement totals.

pub mod aggregate;
pub mod context;
pub mod extract;
pub mod rank;
pub mod report;
pub mod stopwords;

pub use aggregate::{Aggregator, ReportLimits};
pub use context::{is_stale, viral_context, ContextOptions};
pub use extract::{hashtags, PatternExtractor};
pub use rank::{FrequencyTable, RankedEntry};
pub use report::{
    HashtagCount, KeywordCount, PatternSummary, PhraseCount, Report, ReportMeta, ReportStats,
};
pub use stopwords::DEFAULT_STOP_WORDS;
