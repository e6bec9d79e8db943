//! Turns a finished report into a short "trending topics" prompt block.
//!
//! Consumers feed this to content generation, so each call draws a fresh
//! random subset of the ranked patterns instead of always the top entries.

use chrono::{DateTime, TimeDelta, Utc};
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::report::PatternSummary;

const CONTEXT_FOOTER: &str = "Your post should feel natural and authentic. Only use trending topics \
if they genuinely fit your personality and interests. Don't force trends into your content.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextOptions {
    pub keywords: usize,
    pub phrases: usize,
    pub hashtags: usize,
}

impl Default for ContextOptions {
    fn default() -> Self {
        Self {
            keywords: 8,
            phrases: 5,
            hashtags: 0,
        }
    }
}

/// `true` when the report was scraped more than `max_age` before `now`.
#[must_use]
pub fn is_stale(scraped_at: DateTime<Utc>, now: DateTime<Utc>, max_age: TimeDelta) -> bool {
    now.signed_duration_since(scraped_at) > max_age
}

/// Pick up to `count` distinct values at random.
pub fn sample_values<R>(values: &[&str], count: usize, rng: &mut R) -> Vec<String>
where
    R: Rng + ?Sized,
{
    values
        .choose_multiple(rng, count)
        .map(|v| (*v).to_string())
        .collect()
}

/// Render the prompt block. Sections with nothing sampled are omitted.
pub fn viral_context<R>(patterns: &PatternSummary, options: &ContextOptions, rng: &mut R) -> String
where
    R: Rng + ?Sized,
{
    let keywords: Vec<&str> = patterns.top_keywords.iter().map(|k| k.word.as_str()).collect();
    let phrases: Vec<&str> = patterns.top_phrases.iter().map(|p| p.phrase.as_str()).collect();
    let hashtags: Vec<&str> = patterns.top_hashtags.iter().map(|h| h.tag.as_str()).collect();

    let keywords = sample_values(&keywords, options.keywords, rng);
    let phrases = sample_values(&phrases, options.phrases, rng);
    let hashtags: Vec<String> = sample_values(&hashtags, options.hashtags, rng)
        .into_iter()
        .map(|t| format!("#{t}"))
        .collect();

    let mut out =
        String::from("CURRENT TRENDING TOPICS (use these for inspiration - don't force them):\n");
    if !keywords.is_empty() {
        out.push_str(&format!("- Trending keywords: {}\n", keywords.join(", ")));
    }
    if !phrases.is_empty() {
        out.push_str(&format!("- Viral phrases: {}\n", phrases.join(", ")));
    }
    if !hashtags.is_empty() {
        out.push_str(&format!("- Trending hashtags: {}\n", hashtags.join(", ")));
    }
    out.push('\n');
    out.push_str(CONTEXT_FOOTER);
    out
}
