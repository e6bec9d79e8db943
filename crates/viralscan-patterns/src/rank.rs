//! Occurrence counting with first-seen ordering and stable top-N ranking.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A token and how many times it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub value: String,
    pub count: usize,
}

/// Token counts that remember the order in which tokens were first seen.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    index: HashMap<String, usize>,
    entries: Vec<RankedEntry>,
}

impl FrequencyTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `token`.
    pub fn record(&mut self, token: String) {
        if let Some(&slot) = self.index.get(&token) {
            self.entries[slot].count += 1;
            return;
        }
        self.index.insert(token.clone(), self.entries.len());
        self.entries.push(RankedEntry {
            value: token,
            count: 1,
        });
    }

    pub fn record_all<I>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = String>,
    {
        for token in tokens {
            self.record(token);
        }
    }

    #[must_use]
    pub fn count(&self, token: &str) -> usize {
        self.index
            .get(token)
            .map_or(0, |&slot| self.entries[slot].count)
    }

    /// Number of distinct tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `n` most frequent tokens, highest count first. Equal counts keep
    /// first-seen order.
    #[must_use]
    pub fn top(&self, n: usize) -> Vec<RankedEntry> {
        let mut ranked = self.entries.clone();
        // `sort_by` is stable, which is what keeps ties in first-seen order.
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(n);
        ranked
    }
}
