//! Latency sample loading
//!
//! One floating-point value per line, surrounding whitespace ignored.
//! Blank lines are skipped; any other line that does not parse is fatal.

use crate::error::{CdfError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Load every latency sample from the file at `path`, in file order
pub fn load_samples(path: &Path) -> Result<Vec<f64>> {
    let io_err = |source| CdfError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_err)?;
    let samples = parse_samples(BufReader::new(file), path)?;

    tracing::debug!(
        path = %path.display(),
        count = samples.len(),
        "loaded latency samples"
    );
    Ok(samples)
}

/// Parse samples from any buffered reader
///
/// `origin` is only used to label errors.
pub fn parse_samples<R: BufRead>(reader: R, origin: &Path) -> Result<Vec<f64>> {
    let mut samples = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| CdfError::Io {
            path: origin.to_path_buf(),
            source,
        })?;

        let trimmed = line.trim();
        if trimmed.is_empty() {
            tracing::trace!(line = idx + 1, "skipping blank line");
            continue;
        }

        let value = trimmed.parse::<f64>().map_err(|source| CdfError::Parse {
            path: origin.to_path_buf(),
            line: idx + 1,
            content: trimmed.to_string(),
            source,
        })?;
        samples.push(value);
    }

    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    fn parse(text: &str) -> Result<Vec<f64>> {
        parse_samples(Cursor::new(text), Path::new("test.txt"))
    }

    #[test]
    fn test_parse_one_value_per_line() {
        let samples = parse("3.0\n1.0\n2.0\n").unwrap();
        assert_eq!(samples, vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_parse_strips_whitespace() {
        let samples = parse("  0.5\t\n\t1e-3  \r\n").unwrap();
        assert_eq!(samples, vec![0.5, 0.001]);
    }

    #[test]
    fn test_parse_without_trailing_newline() {
        assert_eq!(parse("7.25").unwrap(), vec![7.25]);
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let samples = parse("1.0\n\n   \n2.0\n").unwrap();
        assert_eq!(samples, vec![1.0, 2.0]);
    }

    #[test]
    fn test_parse_keeps_duplicates_zero_and_negative() {
        let samples = parse("0\n-1.5\n-1.5\n").unwrap();
        assert_eq!(samples, vec![0.0, -1.5, -1.5]);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_error_reports_line_number() {
        let err = parse("1.0\n2.0\nabc\n4.0\n").unwrap_err();
        match err {
            CdfError::Parse { line, content, .. } => {
                assert_eq!(line, 3);
                assert_eq!(content, "abc");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_trailing_garbage() {
        assert!(matches!(parse("1.0s\n"), Err(CdfError::Parse { .. })));
    }

    #[test]
    fn test_load_samples_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "0.002").unwrap();
        writeln!(file, "0.001").unwrap();

        let samples = load_samples(file.path()).unwrap();
        assert_eq!(samples, vec![0.002, 0.001]);
    }

    #[test]
    fn test_load_samples_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");

        let err = load_samples(&missing).unwrap_err();
        match err {
            CdfError::Io { path, source } => {
                assert_eq!(path, missing);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
