//! Frequency reports built from a statistics snapshot.

use serde::{Deserialize, Serialize};

use crate::statistics::{WordCount, WordStatistics, WordsStatistics};

/// A filtered view of a [`WordStatistics`] snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyReport {
    /// Accepted words recorded, before any filtering.
    pub total_words: usize,
    /// Distinct normalized words, before any filtering.
    pub distinct_words: usize,
    /// Ranked entries, count ascending then word ascending.
    pub entries: Vec<WordCount>,
}

impl FrequencyReport {
    /// Build a report.
    ///
    /// * `min_count` drops entries recorded fewer times.
    /// * `top` keeps only the `n` highest-ranked entries. Since the ranking is
    ///   ascending these are the last `n`, and they stay in ranking order.
    #[tracing::instrument(skip(stats), fields(distinct = stats.distinct()))]
    pub fn build(stats: &WordStatistics, min_count: Option<usize>, top: Option<usize>) -> Self {
        let mut entries = stats.snapshot();
        if let Some(min) = min_count {
            entries.retain(|e| e.count >= min);
        }
        if let Some(n) = top {
            let skip = entries.len().saturating_sub(n);
            entries.drain(..skip);
        }
        Self {
            total_words: stats.total(),
            distinct_words: stats.distinct(),
            entries,
        }
    }
}
