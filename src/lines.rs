//! Streaming line reader for permissively-decoded text files
//!
//! Reads newline-delimited bytes and decodes each line as UTF-8 with invalid
//! byte sequences dropped - not replaced - so garbage bytes inside a record
//! never abort the file.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

const READ_BUFFER_SIZE: usize = 64 * 1024;

/// Iterator over the lines of a file, trailing `\n`/`\r` stripped.
pub struct LineReader {
    reader: BufReader<File>,
    buffer: Vec<u8>,
}

impl LineReader {
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)
            .map_err(|e| anyhow::anyhow!("cannot open {}: {}", path.display(), e))?;

        Ok(Self {
            reader: BufReader::with_capacity(READ_BUFFER_SIZE, file),
            buffer: Vec::with_capacity(4096),
        })
    }
}

impl Iterator for LineReader {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buffer.clear();

        match self.reader.read_until(b'\n', &mut self.buffer) {
            Ok(0) => None, // EOF
            Ok(_) => {
                while self.buffer.last() == Some(&b'\n') || self.buffer.last() == Some(&b'\r') {
                    self.buffer.pop();
                }
                Some(Ok(decode_dropping_invalid(&self.buffer)))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

/// Decode bytes as UTF-8, silently dropping invalid sequences.
pub fn decode_dropping_invalid(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        // Fast path: valid UTF-8, one copy
        Ok(s) => s.to_string(),
        Err(_) => {
            let mut out = String::with_capacity(bytes.len());
            for chunk in bytes.utf8_chunks() {
                out.push_str(chunk.valid());
            }
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_reads_lines_without_terminators() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "first\nsecond\r\nthird").unwrap();

        let lines: Vec<_> = LineReader::open(file.path())
            .unwrap()
            .filter_map(|r| r.ok())
            .collect();
        assert_eq!(lines, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_invalid_bytes_dropped() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"user\xff\xfe:pass\nclean:line\n").unwrap();

        let lines: Vec<_> = LineReader::open(file.path())
            .unwrap()
            .filter_map(|r| r.ok())
            .collect();
        assert_eq!(lines, vec!["user:pass", "clean:line"]);
    }

    #[test]
    fn test_decode_dropping_invalid() {
        assert_eq!(decode_dropping_invalid(b"hello"), "hello");
        assert_eq!(decode_dropping_invalid(b"a\xffb"), "ab");
        assert_eq!(decode_dropping_invalid(b"\xff\xfe"), "");
        assert_eq!(
            decode_dropping_invalid("Привет".as_bytes()),
            "Привет"
        );
    }

    #[test]
    fn test_empty_file() {
        let file = NamedTempFile::new().unwrap();
        let mut reader = LineReader::open(file.path()).unwrap();
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_open_missing_file_errors() {
        assert!(LineReader::open(Path::new("/nonexistent/input.txt")).is_err());
    }
}
