//! Reading text sources into an aggregator.

use crate::analysis::WordAggregator;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// A text source that could not be read.
#[derive(Error, Debug)]
#[error("{}: {source}", .path.display())]
pub struct SourceError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Feed every line of `reader` to the aggregator. Returns the number of lines read.
pub fn ingest_reader<R: BufRead>(reader: R, aggregator: &mut WordAggregator) -> io::Result<usize> {
    let mut lines = 0;
    for line in reader.lines() {
        aggregator.ingest(&line?);
        lines += 1;
    }
    Ok(lines)
}

/// Feed the file at `path` to the aggregator line by line.
pub fn ingest_file(path: &Path, aggregator: &mut WordAggregator) -> Result<usize, SourceError> {
    let wrap = |source| SourceError {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(wrap)?;
    let lines = ingest_reader(BufReader::new(file), aggregator).map_err(wrap)?;
    debug!("Read {} lines from {}", lines, path.display());
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    #[test]
    fn test_ingest_reader_by_line() {
        let mut aggregator = WordAggregator::new();
        let text = "'Twas brillig -> and the --sl?thy-- toves,\r\nDid: gyre & \"gamble\" in-the **!*.";
        let lines = ingest_reader(Cursor::new(text), &mut aggregator).unwrap();

        assert_eq!(lines, 2);
        assert_eq!(aggregator.count(), 12);
    }

    #[test]
    fn test_ingest_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Hello world & good morning.\nThe date is 18/05/2016\n").unwrap();

        let mut aggregator = WordAggregator::new();
        let lines = ingest_file(file.path(), &mut aggregator).unwrap();

        assert_eq!(lines, 2);
        assert_eq!(aggregator.count(), 9);
        assert_eq!(aggregator.most_frequent_lengths(), vec![4, 5]);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let mut aggregator = WordAggregator::new();
        let err = ingest_file(&path, &mut aggregator).unwrap_err();

        assert_eq!(err.source.kind(), io::ErrorKind::NotFound);
        assert!(err.to_string().contains("missing.txt"));
        assert!(aggregator.is_empty());
    }

    #[test]
    fn test_invalid_utf8() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"fine line\n\xff\xfe broken\n").unwrap();

        let mut aggregator = WordAggregator::new();
        let err = ingest_file(file.path(), &mut aggregator).unwrap_err();
        assert_eq!(err.source.kind(), io::ErrorKind::InvalidData);
    }
}
