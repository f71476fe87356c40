use thiserror::Error;

/// Errors raised when querying word statistics.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsError {
    #[error("Average cannot be calculated when no words have been found")]
    NoWordsCounted,
}
