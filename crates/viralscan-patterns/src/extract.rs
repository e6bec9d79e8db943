//! Keyword, hashtag and phrase extraction from raw post text.
//!
//! All passes are total: any string input produces a (possibly empty) token
//! list, never an error.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::stopwords::DEFAULT_STOP_WORDS;

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"http\S+|www\S+").expect("valid url regex"));
static MENTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@\w+").expect("valid mention regex"));
static HASHTAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#(\w+)").expect("valid hashtag regex"));
static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w{3,}\b").expect("valid word regex"));

/// Two-word phrases must be longer than this many characters.
pub const BIGRAM_MIN_CHARS: usize = 6;
/// Three-word phrases must be longer than this many characters.
pub const TRIGRAM_MIN_CHARS: usize = 10;

/// Turns post text into keyword and phrase token streams.
///
/// The stop-word set and phrase length thresholds are fixed at construction
/// so alternate vocabularies can be used side by side.
#[derive(Debug, Clone)]
pub struct PatternExtractor {
    stop_words: HashSet<String>,
    bigram_min_chars: usize,
    trigram_min_chars: usize,
}

impl Default for PatternExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_STOP_WORDS.iter().copied())
    }
}

impl PatternExtractor {
    /// Build an extractor with a custom stop-word set and default phrase
    /// thresholds. Stop words are matched against lower-cased tokens.
    pub fn new<'a, I>(stop_words: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self {
            stop_words: stop_words.into_iter().map(str::to_lowercase).collect(),
            bigram_min_chars: BIGRAM_MIN_CHARS,
            trigram_min_chars: TRIGRAM_MIN_CHARS,
        }
    }

    /// Override the exclusive minimum character lengths for 2- and 3-word phrases.
    #[must_use]
    pub fn with_phrase_thresholds(mut self, bigram: usize, trigram: usize) -> Self {
        self.bigram_min_chars = bigram;
        self.trigram_min_chars = trigram;
        self
    }

    #[must_use]
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Lower-cased words of 3+ characters with URLs, mentions, hashtags and
    /// stop words removed, in order of occurrence.
    #[must_use]
    pub fn keywords(&self, text: &str) -> Vec<String> {
        let cleaned = strip_urls_and_mentions(text);
        let cleaned = HASHTAG_RE.replace_all(&cleaned, "").to_lowercase();

        WORD_RE
            .find_iter(&cleaned)
            .map(|m| m.as_str())
            .filter(|w| !self.is_stop_word(w))
            .map(str::to_string)
            .collect()
    }

    /// Lower-cased 2-word then 3-word sliding-window phrases over the
    /// whitespace-split text, filtered by character length.
    #[must_use]
    pub fn phrases(&self, text: &str) -> Vec<String> {
        let cleaned = strip_urls_and_mentions(text);
        let words: Vec<&str> = cleaned.split_whitespace().collect();

        let bigrams = words
            .windows(2)
            .map(|w| w.join(" ").to_lowercase())
            .filter(|p| p.chars().count() > self.bigram_min_chars);
        let trigrams = words
            .windows(3)
            .map(|w| w.join(" ").to_lowercase())
            .filter(|p| p.chars().count() > self.trigram_min_chars);

        bigrams.chain(trigrams).collect()
    }
}

/// Text following each `#`, case preserved, left to right with duplicates.
#[must_use]
pub fn hashtags(text: &str) -> Vec<String> {
    HASHTAG_RE
        .captures_iter(text)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

fn strip_urls_and_mentions(text: &str) -> String {
    let without_urls = URL_RE.replace_all(text, "");
    MENTION_RE.replace_all(&without_urls, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn empty_text_yields_nothing() {
        let ex = PatternExtractor::default();
        assert!(ex.keywords("").is_empty());
        assert!(hashtags("").is_empty());
        assert!(ex.phrases("").is_empty());
    }

    #[test]
    fn keywords_are_lowercased_in_order_with_duplicates() {
        let ex = PatternExtractor::default();
        assert_eq!(
            ex.keywords("Breakthrough AI Breakthrough today"),
            strings(&["breakthrough", "breakthrough", "today"])
        );
    }

    #[test]
    fn keywords_drop_short_words_and_stop_words() {
        let ex = PatternExtractor::default();
        let words = ex.keywords("This is the best GPU we can get for the money");
        assert_eq!(words, strings(&["best", "gpu", "money"]));
        for w in &words {
            assert!(w.chars().count() >= 3);
            assert!(!DEFAULT_STOP_WORDS.contains(&w.as_str()));
        }
    }

    #[test]
    fn keywords_strip_urls_mentions_and_hashtags() {
        let ex = PatternExtractor::default();
        let words = ex.keywords(
            "Launching https://example.com/launch today @openai_dev #Launch www.site.io rocket",
        );
        assert_eq!(words, strings(&["launching", "today", "rocket"]));
    }

    #[test]
    fn keywords_split_on_punctuation() {
        let ex = PatternExtractor::default();
        assert_eq!(
            ex.keywords("model-weights, released!"),
            strings(&["model", "weights", "released"])
        );
    }

    #[test]
    fn keywords_keep_unicode_word_characters() {
        let ex = PatternExtractor::default();
        assert_eq!(ex.keywords("Café résumé ok"), strings(&["café", "résumé"]));
    }

    #[test]
    fn stop_words_apply_after_lowercasing() {
        let ex = PatternExtractor::default();
        assert!(ex.keywords("THE AND With").is_empty());
    }

    #[test]
    fn custom_stop_words_replace_defaults() {
        let ex = PatternExtractor::new(["rust"]);
        assert_eq!(
            ex.keywords("Rust and the borrow checker"),
            strings(&["and", "the", "borrow", "checker"])
        );
    }

    #[test]
    fn hashtags_preserve_case_order_and_multiplicity() {
        assert_eq!(
            hashtags("#AI beats #ai and #AI again"),
            strings(&["AI", "ai", "AI"])
        );
    }

    #[test]
    fn adjacent_hashtags_counted_independently() {
        assert_eq!(hashtags("#rust#go #zig"), strings(&["rust", "go", "zig"]));
    }

    #[test]
    fn lone_hash_is_not_a_hashtag() {
        assert!(hashtags("# nothing here #").is_empty());
    }

    #[test]
    fn phrases_emit_bigrams_before_trigrams() {
        let ex = PatternExtractor::default();
        assert_eq!(
            ex.phrases("Large Language Models"),
            strings(&["large language", "language models", "large language models"])
        );
    }

    #[test]
    fn bigram_length_boundary() {
        let ex = PatternExtractor::default();
        // "abc def" is 7 chars, "ab cde" is 6.
        assert_eq!(ex.phrases("abc def"), strings(&["abc def"]));
        assert!(ex.phrases("ab cde").is_empty());
    }

    #[test]
    fn trigram_length_boundary() {
        let ex = PatternExtractor::default();
        // "aaa bb cccc" is 11 chars, "aa bb cccc" is 10.
        let kept = ex.phrases("aaa bb cccc");
        assert!(kept.contains(&"aaa bb cccc".to_string()));
        let dropped = ex.phrases("aa bb cccc");
        assert!(!dropped.contains(&"aa bb cccc".to_string()));
    }

    #[test]
    fn phrases_example_from_short_words() {
        let ex = PatternExtractor::default();
        // "a bb" (4) dropped, "bb ccccccc" (10) kept, "a bb ccccccc" (12) kept.
        assert_eq!(
            ex.phrases("a bb ccccccc"),
            strings(&["bb ccccccc", "a bb ccccccc"])
        );
    }

    #[test]
    fn phrases_keep_hashtags_but_strip_urls_and_mentions() {
        let ex = PatternExtractor::default();
        assert_eq!(
            ex.phrases("@someone Shipping #Rust https://t.co/x now"),
            strings(&["shipping #rust", "#rust now", "shipping #rust now"])
        );
    }

    #[test]
    fn single_word_yields_no_phrases() {
        let ex = PatternExtractor::default();
        assert!(ex.phrases("supercalifragilistic").is_empty());
    }

    #[test]
    fn two_words_yield_no_trigrams() {
        let ex = PatternExtractor::default();
        assert_eq!(ex.phrases("quantum computing"), strings(&["quantum computing"]));
    }

    #[test]
    fn phrase_length_counts_characters_not_bytes() {
        let ex = PatternExtractor::default();
        // 6 chars, 11 bytes.
        assert!(ex.phrases("ééé üü").is_empty());
    }

    #[test]
    fn custom_phrase_thresholds() {
        let ex = PatternExtractor::default().with_phrase_thresholds(0, 0);
        assert_eq!(
            ex.phrases("a b c"),
            strings(&["a b", "b c", "a b c"])
        );
    }
}
