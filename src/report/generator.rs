//! Report generation.
//!
//! This module renders word-length statistics either as the plain text
//! report or as JSON.

use crate::analysis::WordAggregator;
use crate::cli::LineEnding;
use crate::models::LengthStats;
use anyhow::Result;

/// Message emitted when nothing was counted.
pub const NO_WORDS_MESSAGE: &str = "No words have been found";

/// Generate the plain text report.
///
/// Every line, including the last, ends with `line_ending`.
pub fn generate_text_report(aggregator: &WordAggregator, line_ending: LineEnding) -> String {
    let eol = line_ending.as_str();

    if aggregator.is_empty() {
        return format!("{}{}", NO_WORDS_MESSAGE, eol);
    }

    let mut output = String::new();

    output.push_str(&format!("Word count = {}{}", aggregator.count(), eol));
    output.push_str(&format!(
        "Average word length = {}{}",
        format_average(aggregator.total_length(), aggregator.count()),
        eol
    ));
    output.push_str(&generate_length_lines(aggregator, eol));
    output.push_str(&format!(
        "The most frequently occurring word length is {}, for word lengths of {}{}",
        aggregator.max_length_count(),
        join_lengths(&aggregator.most_frequent_lengths()),
        eol
    ));

    output
}

/// One line per distinct length, ascending.
fn generate_length_lines(aggregator: &WordAggregator, eol: &str) -> String {
    let mut section = String::new();

    for (len, count) in aggregator.length_counts() {
        section.push_str(&format!(
            "Number of words of length {} is {}{}",
            len, count, eol
        ));
    }

    section
}

/// Render `total / count` with three decimals, rounding half up.
///
/// Works on the exact ratio in integer arithmetic so that the output does
/// not depend on float formatting. `count` must be non-zero.
pub fn format_average(total: usize, count: usize) -> String {
    let total = total as u128;
    let count = count as u128;
    let scaled = (total * 2000 + count) / (count * 2);
    format!("{}.{:03}", scaled / 1000, scaled % 1000)
}

/// Join lengths as `"4"`, `"4 & 5"` or `"2, 4 & 7"`.
pub fn join_lengths(lengths: &[usize]) -> String {
    match lengths.split_last() {
        None => String::new(),
        Some((last, [])) => last.to_string(),
        Some((last, rest)) => {
            let head: Vec<String> = rest.iter().map(|l| l.to_string()).collect();
            format!("{} & {}", head.join(", "), last)
        }
    }
}

/// Generate a JSON report.
pub fn generate_json_report(stats: &LengthStats) -> Result<String> {
    serde_json::to_string_pretty(stats).map_err(Into::into)
}
