// Shared helpers for the CLI integration tests

use std::io::Write;
use tempfile::NamedTempFile;

/// Write `lines` to a fresh temp file, one per line
pub fn sample_file(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp sample file");
    for line in lines {
        writeln!(file, "{}", line).expect("write sample line");
    }
    file.flush().expect("flush sample file");
    file
}
