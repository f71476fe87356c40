//! Word-length analysis.
//!
//! Tokenization plus the incremental aggregation it feeds. Nothing in here
//! performs I/O.

pub mod aggregator;
pub mod error;
pub mod tokenizer;

pub use aggregator::WordAggregator;
pub use error::StatsError;
