//! Folds post records into frequency tables and engagement totals.

use viralscan_core::PostRecord;

use crate::extract::{hashtags, PatternExtractor};
use crate::rank::{FrequencyTable, RankedEntry};
use crate::report::{PatternSummary, Report, ReportMeta, ReportStats};

/// How many entries each report section keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportLimits {
    pub keywords: usize,
    pub hashtags: usize,
    pub phrases: usize,
    pub samples: usize,
}

impl Default for ReportLimits {
    fn default() -> Self {
        Self {
            keywords: 50,
            hashtags: 30,
            phrases: 40,
            samples: 20,
        }
    }
}

/// Single-writer accumulator for one scan.
///
/// Posts are folded in collection order; the first-seen order of every token
/// is the tie-break when ranking.
#[derive(Debug)]
pub struct Aggregator {
    extractor: PatternExtractor,
    limits: ReportLimits,
    keywords: FrequencyTable,
    hashtags: FrequencyTable,
    phrases: FrequencyTable,
    post_count: usize,
    total_engagement: u64,
    samples: Vec<PostRecord>,
}

impl Aggregator {
    #[must_use]
    pub fn new(extractor: PatternExtractor, limits: ReportLimits) -> Self {
        Self {
            extractor,
            limits,
            keywords: FrequencyTable::new(),
            hashtags: FrequencyTable::new(),
            phrases: FrequencyTable::new(),
            post_count: 0,
            total_engagement: 0,
            samples: Vec::new(),
        }
    }

    pub fn add_post(&mut self, post: &PostRecord) {
        self.keywords.record_all(self.extractor.keywords(&post.text));
        self.hashtags.record_all(hashtags(&post.text));
        self.phrases.record_all(self.extractor.phrases(&post.text));

        self.post_count += 1;
        self.total_engagement = self.total_engagement.saturating_add(post.engagement());

        if self.samples.len() < self.limits.samples {
            self.samples.push(post.clone());
        }
    }

    pub fn add_posts<'a, I>(&mut self, posts: I)
    where
        I: IntoIterator<Item = &'a PostRecord>,
    {
        for post in posts {
            self.add_post(post);
        }
    }

    #[must_use]
    pub fn post_count(&self) -> usize {
        self.post_count
    }

    #[must_use]
    pub fn keyword_table(&self) -> &FrequencyTable {
        &self.keywords
    }

    #[must_use]
    pub fn hashtag_table(&self) -> &FrequencyTable {
        &self.hashtags
    }

    #[must_use]
    pub fn phrase_table(&self) -> &FrequencyTable {
        &self.phrases
    }

    /// Mean engagement rounded to two decimals, exact halves to even;
    /// `0.0` when no posts were added.
    #[must_use]
    pub fn avg_engagement(&self) -> f64 {
        if self.post_count == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let avg = self.total_engagement as f64 / self.post_count as f64;
        (avg * 100.0).round_ties_even() / 100.0
    }

    /// Rank every table and assemble the final report.
    #[must_use]
    pub fn finish(self, meta: ReportMeta) -> Report {
        let date_range = meta.date_range();
        let avg_engagement = self.avg_engagement();

        let patterns = PatternSummary {
            top_keywords: into_counts(self.keywords.top(self.limits.keywords)),
            top_hashtags: into_counts(self.hashtags.top(self.limits.hashtags)),
            top_phrases: into_counts(self.phrases.top(self.limits.phrases)),
        };

        Report {
            success: true,
            stats: ReportStats {
                total_tweets: self.post_count,
                total_engagement: self.total_engagement,
                avg_engagement,
                queries: meta.queries,
                date_range,
                scraped_at: meta.scraped_at,
            },
            patterns,
            sample_tweets: self.samples,
        }
    }
}

fn into_counts<T: From<RankedEntry>>(entries: Vec<RankedEntry>) -> Vec<T> {
    entries.into_iter().map(T::from).collect()
}

#[cfg(test)]
#[path = "aggregate_test.rs"]
mod tests;
