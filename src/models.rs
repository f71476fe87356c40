//! Data models for word-length reports.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Snapshot of the word-length statistics, suitable for serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LengthStats {
    /// Total number of words counted.
    pub word_count: usize,
    /// Sum of all word lengths.
    pub total_length: usize,
    /// Mean word length, absent when no words were counted.
    pub average_length: Option<f64>,
    /// Number of words per length, ascending by length.
    pub length_counts: BTreeMap<usize, usize>,
    /// Highest frequency of any single length.
    pub max_length_count: usize,
    /// Lengths sharing the highest frequency, ascending.
    pub most_frequent_lengths: Vec<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_stats() {
        let json = r#"{
            "word_count": 3,
            "total_length": 9,
            "average_length": 3.0,
            "length_counts": { "3": 3 },
            "max_length_count": 3,
            "most_frequent_lengths": [3]
        }"#;

        let stats: LengthStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.word_count, 3);
        assert_eq!(stats.length_counts.get(&3), Some(&3));
        assert_eq!(stats.most_frequent_lengths, vec![3]);
    }
}
