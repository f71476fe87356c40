//! Word-length aggregation.
//!
//! This module accumulates word-length statistics across any number of
//! text chunks and answers queries over the running totals.

use super::error::StatsError;
use super::tokenizer::words;
use crate::models::LengthStats;
use std::collections::BTreeMap;
use tracing::trace;

/// Running word-length statistics.
///
/// Use it as a builder: create it, call [`ingest`](Self::ingest) once per
/// chunk of text, then query. Counts only ever grow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordAggregator {
    word_count: usize,
    total_length: usize,
    length_counts: BTreeMap<usize, usize>,
}

impl WordAggregator {
    /// Creates an empty aggregator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every word of `chunk` to the statistics.
    pub fn ingest(&mut self, chunk: &str) {
        for word in words(chunk) {
            let len = word.chars().count();
            self.word_count += 1;
            self.total_length += len;
            *self.length_counts.entry(len).or_insert(0) += 1;
        }
        trace!("Ingested chunk of {} bytes", chunk.len());
    }

    /// Total number of words counted so far.
    pub fn count(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Sum of the lengths of all counted words.
    pub fn total_length(&self) -> usize {
        self.total_length
    }

    /// Mean word length.
    ///
    /// Fails with [`StatsError::NoWordsCounted`] when nothing has been counted.
    pub fn average_length(&self) -> Result<f64, StatsError> {
        if self.word_count == 0 {
            return Err(StatsError::NoWordsCounted);
        }
        Ok(self.total_length as f64 / self.word_count as f64)
    }

    /// Distinct word lengths seen, ascending.
    pub fn lengths(&self) -> Vec<usize> {
        self.length_counts.keys().copied().collect()
    }

    /// Number of words of the given length, zero if none.
    pub fn length_count(&self, length: usize) -> usize {
        self.length_counts.get(&length).copied().unwrap_or(0)
    }

    /// The full length table, ascending by length.
    pub fn length_counts(&self) -> &BTreeMap<usize, usize> {
        &self.length_counts
    }

    /// Highest frequency of any single length, zero if nothing was counted.
    pub fn max_length_count(&self) -> usize {
        self.length_counts.values().copied().max().unwrap_or(0)
    }

    /// Every length whose frequency equals [`max_length_count`](Self::max_length_count), ascending.
    pub fn most_frequent_lengths(&self) -> Vec<usize> {
        let max = self.max_length_count();
        self.length_counts
            .iter()
            .filter(|(_, &count)| count == max)
            .map(|(&len, _)| len)
            .collect()
    }

    /// Snapshot the current statistics.
    pub fn stats(&self) -> LengthStats {
        LengthStats {
            word_count: self.word_count,
            total_length: self.total_length,
            average_length: self.average_length().ok(),
            length_counts: self.length_counts.clone(),
            max_length_count: self.max_length_count(),
            most_frequent_lengths: self.most_frequent_lengths(),
        }
    }
}

impl<'a> Extend<&'a str> for WordAggregator {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, chunks: I) {
        for chunk in chunks {
            self.ingest(chunk);
        }
    }
}

impl<'a> FromIterator<&'a str> for WordAggregator {
    fn from_iter<I: IntoIterator<Item = &'a str>>(chunks: I) -> Self {
        let mut aggregator = Self::new();
        aggregator.extend(chunks);
        aggregator
    }
}
