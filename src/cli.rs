//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use clap::{CommandFactory, Parser};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// wordlen - word-length statistics for text files
///
/// Counts the words of a text file and reports the average word length,
/// how many words there are of each length, and the most common lengths.
///
/// Examples:
///   wordlen notes.txt
///   wordlen notes.txt --format json
///   wordlen notes.txt --line-ending crlf
///   wordlen --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Text file to analyze
    #[arg(value_name = "FILE", required_unless_present = "init_config")]
    pub file: Option<PathBuf>,

    /// Output format (text, json)
    ///
    /// Overrides `report.format` from the configuration file.
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Line terminator used in the text report (lf, crlf)
    ///
    /// Overrides `report.line_ending` from the configuration file.
    #[arg(long, value_name = "ENDING")]
    pub line_ending: Option<LineEnding>,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate a default .wordlen.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

/// Output format for the report.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text (default)
    #[default]
    Text,
    /// JSON
    Json,
}

/// Line terminator for the text report.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    /// `\n` (default)
    #[default]
    Lf,
    /// `\r\n`
    Crlf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::Crlf => "\r\n",
        }
    }
}

impl Args {
    /// One-line usage message, as printed on argument errors.
    pub fn usage() -> String {
        Self::command().render_usage().to_string()
    }

    /// Get the source file path (should be validated first).
    pub fn source(&self) -> Option<&PathBuf> {
        self.file.as_ref()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        if !self.init_config && self.file.is_none() {
            return Err("A text file must be provided".to_string());
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self, verbose_by_default: bool) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose || verbose_by_default {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_args() -> Args {
        Args {
            file: Some(PathBuf::from("input.txt")),
            format: None,
            line_ending: None,
            config: None,
            verbose: false,
            quiet: false,
            init_config: false,
        }
    }

    #[test]
    fn test_parse_single_file() {
        let args = Args::try_parse_from(["wordlen", "input.txt"]).unwrap();
        assert_eq!(args.source(), Some(&PathBuf::from("input.txt")));
        assert_eq!(args.format, None);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_wrong_argument_count() {
        assert!(Args::try_parse_from(["wordlen"]).is_err());
        assert!(Args::try_parse_from(["wordlen", "a.txt", "b.txt"]).is_err());
    }

    #[test]
    fn test_init_config_needs_no_file() {
        let args = Args::try_parse_from(["wordlen", "--init-config"]).unwrap();
        assert!(args.init_config);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_parse_value_enums() {
        let args = Args::try_parse_from([
            "wordlen",
            "input.txt",
            "--format",
            "json",
            "--line-ending",
            "crlf",
        ])
        .unwrap();
        assert_eq!(args.format, Some(OutputFormat::Json));
        assert_eq!(args.line_ending, Some(LineEnding::Crlf));
    }

    #[test]
    fn test_validation_conflicting_options() {
        let mut args = make_args();
        args.verbose = true;
        args.quiet = true;
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_usage_names_file() {
        assert!(Args::usage().contains("FILE"));
    }

    #[test]
    fn test_log_level() {
        let mut args = make_args();
        assert_eq!(args.log_level(false), tracing::Level::WARN);
        assert_eq!(args.log_level(true), tracing::Level::DEBUG);

        args.verbose = true;
        assert_eq!(args.log_level(false), tracing::Level::DEBUG);

        args.verbose = false;
        args.quiet = true;
        assert_eq!(args.log_level(true), tracing::Level::ERROR);
    }

    #[test]
    fn test_line_ending_str() {
        assert_eq!(LineEnding::Lf.as_str(), "\n");
        assert_eq!(LineEnding::Crlf.as_str(), "\r\n");
    }
}
