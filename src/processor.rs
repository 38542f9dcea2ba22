//! Per-file processing
//!
//! Streams one source file through the line transformer, writes survivors to
//! the destination file, and collects size/skip statistics.

use crate::blacklist::Blacklist;
use crate::lines::LineReader;
use crate::transform::{classify, TransformResult};

use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

const GIB: f64 = (1024u64 * 1024 * 1024) as f64;
const WRITE_BUFFER_SIZE: usize = 4 * 1024 * 1024;

/// Statistics for one processed file, immutable once produced.
#[derive(Debug, Clone, PartialEq)]
pub struct FileStats {
    pub filename: String,
    pub orig_gib: f64,
    pub new_gib: f64,
    pub skipped: u64,
    pub percent_saved: f64,
}

/// File size in gibibytes; `0.0` when the metadata query fails.
pub fn size_gib(path: &Path) -> f64 {
    fs::metadata(path).map(|m| m.len() as f64 / GIB).unwrap_or(0.0)
}

/// Percent saved between an original and a rewritten size.
/// Defined as `0.0` for an empty original, never a division error.
pub fn percent_saved(orig: f64, new: f64) -> f64 {
    if orig > 0.0 {
        100.0 * (orig - new) / orig
    } else {
        0.0
    }
}

/// Streams files one at a time through [`classify`].
pub struct FileProcessor {
    // Output flush granularity in lines; tuning knob, not a correctness one.
    chunk_size: u64,
}

impl FileProcessor {
    pub fn new(chunk_size: u64) -> Self {
        Self {
            chunk_size: chunk_size.max(1),
        }
    }

    /// Rewrite `src` into `dest`, returning the per-file statistics.
    ///
    /// Creates or truncates `dest`. An unopenable source or destination is
    /// fatal for this file only; the caller decides whether the batch goes on.
    pub fn process(
        &self,
        src: &Path,
        dest: &Path,
        blacklist: &Blacklist,
    ) -> anyhow::Result<FileStats> {
        let reader = LineReader::open(src)?;

        let out_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(dest)
            .map_err(|e| anyhow::anyhow!("cannot open {}: {}", dest.display(), e))?;
        let mut writer = BufWriter::with_capacity(WRITE_BUFFER_SIZE, out_file);

        let mut skipped: u64 = 0;
        for (i, line) in reader.enumerate() {
            let line = line?;
            match classify(&line, blacklist) {
                TransformResult::Kept(rewritten) => {
                    writer.write_all(rewritten.as_bytes())?;
                    writer.write_all(b"\n")?;
                }
                TransformResult::Discarded(reason) => {
                    log::debug!("skipped: {} > {}", line, reason);
                    skipped += 1;
                }
            }
            if (i as u64 + 1) % self.chunk_size == 0 {
                writer.flush()?;
            }
        }
        writer.flush()?;

        let orig_gib = size_gib(src);
        let new_gib = size_gib(dest);

        Ok(FileStats {
            filename: src
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            orig_gib,
            new_gib,
            skipped,
            percent_saved: percent_saved(orig_gib, new_gib),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::TempDir;

    fn write_source(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut f = fs::File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_process_writes_kept_and_counts_skipped() {
        let dir = TempDir::new().unwrap();
        let src = write_source(
            &dir,
            "in.txt",
            "http://example.com/user pass:extra\n\
             android://payload data\n\
             foo:bar:baz:qux\n\
             onlytwo:colons\n",
        );
        let dest = dir.path().join("out.txt");

        let stats = FileProcessor::new(100_000)
            .process(&src, &dest, &Blacklist::empty())
            .unwrap();

        let output = fs::read_to_string(&dest).unwrap();
        assert_eq!(output, "example.com:pass:extra\nfoo:bar:baz:qux\n");
        assert_eq!(stats.skipped, 2);
        assert_eq!(stats.filename, "in.txt");
        assert!(stats.orig_gib > 0.0);
        assert!(stats.new_gib > 0.0);
        assert!(stats.percent_saved > 0.0);
    }

    #[test]
    fn test_process_applies_blacklist() {
        let dir = TempDir::new().unwrap();
        let src = write_source(&dir, "in.txt", "sub.badsite.com/login:pw:x\nok.com:a:b:c\n");
        let dest = dir.path().join("out.txt");

        let blacklist = Blacklist::from_entries(["badsite".to_string()]);
        let stats = FileProcessor::new(10)
            .process(&src, &dest, &blacklist)
            .unwrap();

        assert_eq!(fs::read_to_string(&dest).unwrap(), "ok.com:a:b:c\n");
        assert_eq!(stats.skipped, 1);
    }

    #[test]
    fn test_process_empty_source() {
        let dir = TempDir::new().unwrap();
        let src = write_source(&dir, "empty.txt", "");
        let dest = dir.path().join("out.txt");

        let stats = FileProcessor::new(1)
            .process(&src, &dest, &Blacklist::empty())
            .unwrap();

        assert_eq!(stats.skipped, 0);
        assert_eq!(stats.orig_gib, 0.0);
        assert_eq!(stats.percent_saved, 0.0);
        assert!(dest.exists());
    }

    #[test]
    fn test_process_missing_source_errors() {
        let dir = TempDir::new().unwrap();
        let result = FileProcessor::new(1).process(
            &dir.path().join("missing.txt"),
            &dir.path().join("out.txt"),
            &Blacklist::empty(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_percent_saved() {
        assert_eq!(percent_saved(0.0, 0.0), 0.0);
        assert_eq!(percent_saved(2.0, 1.0), 50.0);
        assert_eq!(percent_saved(4.0, 1.0), 75.0);
    }

    #[test]
    fn test_size_gib_missing_file_is_zero() {
        assert_eq!(size_gib(Path::new("/nonexistent/file.txt")), 0.0);
    }
}
