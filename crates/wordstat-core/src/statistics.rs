//! Word-frequency statistics.
//!
//! [`WordStatistics`] accumulates occurrence counts per normalized word and
//! produces a deterministic ranking on demand. Normalization folds case and
//! keeps at most [`MAX_KEY_CHARS`] characters, so `"Hello"` and `"HELLO"` land
//! on the same key, as do any two words sharing their first ten folded
//! characters.
//!
//! Ranking order is count ascending, then word ascending. Two snapshots taken
//! without an intervening [`record`](WordsStatistics::record) are identical.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{StatisticsError, StatisticsResult};

/// Maximum number of characters kept from a word after case folding.
pub const MAX_KEY_CHARS: usize = 10;

/// A single ranked entry: a normalized word and how often it was recorded.
///
/// Field order matters: the derived [`Ord`] compares `count` first and `word`
/// second, which is exactly the snapshot order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WordCount {
    /// Number of accepted records for this word.
    pub count: usize,
    /// The normalized word.
    pub word: String,
}

impl WordCount {
    /// Build an entry from a count and a word.
    pub fn new(count: usize, word: impl Into<String>) -> Self {
        Self {
            count,
            word: word.into(),
        }
    }
}

/// Anything that can accumulate words and report a ranked snapshot.
pub trait WordsStatistics {
    /// Record one occurrence of `word`.
    ///
    /// # Errors
    ///
    /// Returns [`StatisticsError::InvalidArgument`] when `word` is `None`.
    /// Empty and whitespace-only words are accepted and ignored.
    fn record(&mut self, word: Option<&str>) -> StatisticsResult<()>;

    /// Return every recorded word with its count, ordered by count ascending
    /// and then by word ascending.
    fn snapshot(&self) -> Vec<WordCount>;
}

/// Normalize a word into its statistics key.
///
/// Returns `None` for empty or whitespace-only input. Whitespace is judged on
/// the whole input, so `"          a"` is kept and becomes ten spaces.
pub fn normalize_word(word: &str) -> Option<String> {
    if word.trim().is_empty() {
        return None;
    }
    Some(
        word.chars()
            .flat_map(char::to_lowercase)
            .take(MAX_KEY_CHARS)
            .collect(),
    )
}

/// Hash-map backed [`WordsStatistics`] implementation.
#[derive(Debug, Clone, Default)]
pub struct WordStatistics {
    counts: HashMap<String, usize>,
    total: usize,
}

impl WordStatistics {
    /// Create an empty engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record every word yielded by `words`.
    ///
    /// Items are always present, so this cannot fail; no-op words are
    /// skipped exactly as in [`record`](WordsStatistics::record).
    pub fn record_all<'a, I>(&mut self, words: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        for word in words {
            self.accumulate(word);
        }
    }

    /// Number of distinct normalized words.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Number of accepted (non no-op) records.
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    fn accumulate(&mut self, word: &str) {
        let Some(key) = normalize_word(word) else {
            tracing::trace!(len = word.len(), "skipping blank word");
            return;
        };
        tracing::trace!(key = %key, "recording word");
        *self.counts.entry(key).or_insert(0) += 1;
        self.total += 1;
    }
}

impl WordsStatistics for WordStatistics {
    fn record(&mut self, word: Option<&str>) -> StatisticsResult<()> {
        let word = word.ok_or(StatisticsError::InvalidArgument)?;
        self.accumulate(word);
        Ok(())
    }

    #[tracing::instrument(skip(self), fields(distinct = self.counts.len()))]
    fn snapshot(&self) -> Vec<WordCount> {
        let mut entries: Vec<WordCount> = self
            .counts
            .iter()
            .map(|(word, &count)| WordCount::new(count, word.as_str()))
            .collect();
        // Keys are unique, so an unstable sort is still a total order.
        entries.sort_unstable();
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(pairs: &[(usize, &str)]) -> Vec<WordCount> {
        pairs.iter().map(|&(c, w)| WordCount::new(c, w)).collect()
    }

    // Contract checks, written against the trait so any implementation can
    // be plugged in.

    fn contains_many_items_after_different_words<S: WordsStatistics + Default>() {
        let mut stats = S::default();
        stats.record(Some("abc")).unwrap();
        stats.record(Some("def")).unwrap();
        assert_eq!(stats.snapshot().len(), 2);
        stats.record(Some("gfd")).unwrap();
        assert_eq!(stats.snapshot().len(), 3);
    }

    fn absent_word_is_rejected<S: WordsStatistics + Default>() {
        let mut stats = S::default();
        stats.record(Some("kept")).unwrap();
        let before = stats.snapshot();

        assert_eq!(stats.record(None), Err(StatisticsError::InvalidArgument));
        assert_eq!(stats.snapshot(), before);
    }

    fn blank_words_are_ignored<S: WordsStatistics + Default>() {
        let mut stats = S::default();
        stats.record(Some("   ")).unwrap();
        stats.record(Some("")).unwrap();
        stats.record(Some("\t\n ")).unwrap();
        assert!(stats.snapshot().is_empty());
    }

    fn blank_words_leave_existing_counts_alone<S: WordsStatistics + Default>() {
        let mut stats = S::default();
        stats.record(Some("word")).unwrap();
        stats.record(Some("word")).unwrap();
        stats.record(Some("other")).unwrap();
        let before = stats.snapshot();

        stats.record(Some("")).unwrap();
        stats.record(Some("   ")).unwrap();
        stats.record(Some("\t\n ")).unwrap();
        assert_eq!(stats.snapshot(), before);
        assert_eq!(before, entries(&[(1, "other"), (2, "word")]));
    }

    fn folds_case<S: WordsStatistics + Default>() {
        let mut stats = S::default();
        stats.record(Some("qw")).unwrap();
        stats.record(Some("QW")).unwrap();
        assert_eq!(stats.snapshot(), entries(&[(2, "qw")]));
    }

    fn keeps_words_up_to_ten_chars<S: WordsStatistics + Default>() {
        let mut stats = S::default();
        stats.record(Some("aaaaaa")).unwrap();
        assert_eq!(stats.snapshot(), entries(&[(1, "aaaaaa")]));
    }

    fn truncates_to_ten_chars<S: WordsStatistics + Default>() {
        let mut stats = S::default();
        stats.record(Some("          a")).unwrap();
        assert_eq!(stats.snapshot(), entries(&[(1, "          ")]));
    }

    fn orders_ties_by_word<S: WordsStatistics + Default>() {
        let mut stats = S::default();
        for w in ["c", "b", "a"] {
            stats.record(Some(w)).unwrap();
        }
        assert_eq!(stats.snapshot(), entries(&[(1, "a"), (1, "b"), (1, "c")]));
    }

    fn orders_by_count_ascending<S: WordsStatistics + Default>() {
        let mut stats = S::default();
        for w in ["a", "aa", "aaa", "aaa", "aaa"] {
            stats.record(Some(w)).unwrap();
        }
        assert_eq!(
            stats.snapshot(),
            entries(&[(1, "a"), (1, "aa"), (3, "aaa")])
        );
    }

    fn handles_many_distinct_words<S: WordsStatistics + Default>() {
        let mut stats = S::default();
        for i in 0..2000 {
            stats.record(Some(&format!("{i}fhd"))).unwrap();
        }
        let snapshot = stats.snapshot();
        assert_eq!(snapshot.len(), 2000);
        assert!(snapshot.iter().all(|e| e.count == 1));
        assert!(snapshot.windows(2).all(|w| w[0].word < w[1].word));
    }

    fn handles_many_repeats<S: WordsStatistics + Default>() {
        let mut stats = S::default();
        for i in 0..100_000 {
            stats.record(Some(&format!("{}fhd", i % 10))).unwrap();
        }
        let expected: Vec<WordCount> = (0..10)
            .map(|i| WordCount::new(10_000, format!("{i}fhd")))
            .collect();
        assert_eq!(stats.snapshot(), expected);
    }

    fn snapshot_is_idempotent<S: WordsStatistics + Default>() {
        let mut stats = S::default();
        for w in ["Zeta", "alpha", "ALPHA", "beta", "zeta", "zeta"] {
            stats.record(Some(w)).unwrap();
        }
        let first = stats.snapshot();
        let second = stats.snapshot();
        assert_eq!(first, second);
        assert_eq!(
            first,
            entries(&[(1, "beta"), (2, "alpha"), (3, "zeta")])
        );
    }

    fn run_contract<S: WordsStatistics + Default>() {
        contains_many_items_after_different_words::<S>();
        absent_word_is_rejected::<S>();
        blank_words_are_ignored::<S>();
        blank_words_leave_existing_counts_alone::<S>();
        folds_case::<S>();
        keeps_words_up_to_ten_chars::<S>();
        truncates_to_ten_chars::<S>();
        orders_ties_by_word::<S>();
        orders_by_count_ascending::<S>();
        handles_many_distinct_words::<S>();
        handles_many_repeats::<S>();
        snapshot_is_idempotent::<S>();
    }

    #[test]
    fn word_statistics_satisfies_contract() {
        run_contract::<WordStatistics>();
    }

    #[test]
    fn usable_as_trait_object() {
        let mut stats: Box<dyn WordsStatistics> = Box::new(WordStatistics::new());
        stats.record(Some("dyn")).unwrap();
        assert!(stats.record(None).is_err());
        assert_eq!(stats.snapshot(), entries(&[(1, "dyn")]));
    }

    #[test]
    fn normalize_blank_is_none() {
        assert_eq!(normalize_word(""), None);
        assert_eq!(normalize_word("    "), None);
        assert_eq!(normalize_word("\u{a0}\t"), None);
    }

    #[test]
    fn normalize_keeps_surrounding_spaces_when_short() {
        assert_eq!(normalize_word(" Ab "), Some(" ab ".to_string()));
    }

    #[test]
    fn normalize_counts_chars_not_bytes() {
        assert_eq!(
            normalize_word("ПРИВЕТСТВУЮ всех"),
            Some("приветству".to_string())
        );
    }

    #[test]
    fn long_words_sharing_a_prefix_collide() {
        let mut stats = WordStatistics::new();
        stats.record(Some("internationalization")).unwrap();
        stats.record(Some("Internationally")).unwrap();
        assert_eq!(stats.snapshot(), entries(&[(2, "internatio")]));
    }

    #[test]
    fn whitespace_prefix_with_content_is_recorded() {
        let mut stats = WordStatistics::new();
        stats.record(Some("            tail")).unwrap();
        assert_eq!(stats.snapshot(), entries(&[(1, "          ")]));
    }

    #[test]
    fn counters_track_accepted_records() {
        let mut stats = WordStatistics::new();
        assert!(stats.is_empty());
        stats.record_all(["one", "two", "One", "  ", ""]);
        assert_eq!(stats.total(), 3);
        assert_eq!(stats.distinct(), 2);
        assert!(!stats.is_empty());
    }

    #[test]
    fn rejected_record_does_not_touch_counters() {
        let mut stats = WordStatistics::new();
        stats.record(Some("x")).unwrap();
        let _ = stats.record(None);
        assert_eq!(stats.total(), 1);
        assert_eq!(stats.distinct(), 1);
    }

    #[test]
    fn instances_are_independent() {
        let mut a = WordStatistics::new();
        let b = WordStatistics::new();
        a.record(Some("only-a")).unwrap();
        assert_eq!(a.snapshot().len(), 1);
        assert!(b.snapshot().is_empty());
    }

    #[test]
    fn word_count_orders_by_count_then_word() {
        assert!(WordCount::new(1, "z") < WordCount::new(2, "a"));
        assert!(WordCount::new(2, "a") < WordCount::new(2, "b"));
    }
}
