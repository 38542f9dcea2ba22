//! Size report
//!
//! Recomputes original/rewritten sizes per file straight from filesystem
//! metadata, independent of any batch run, so the report can be re-run after
//! the fact. Lookups fan out over a bounded thread pool; output keeps the
//! source enumeration order.

use crate::batch::collect_source_files;
use crate::config::Config;
use crate::processor::{percent_saved, size_gib};
use crate::progress::{create_spinner, print_warning, render_report_table};

use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// One row of the size report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportEntry {
    pub filename: String,
    pub orig_gib: f64,
    pub new_gib: f64,
    pub percent_saved: f64,
}

/// Concurrent before/after size reporter.
pub struct SizeReporter {
    source_dir: PathBuf,
    dest_dir: PathBuf,
    workers: usize,
}

impl SizeReporter {
    pub fn new(config: &Config) -> Self {
        Self {
            source_dir: config.paths.source_dir.clone(),
            dest_dir: config.paths.dest_dir.clone(),
            workers: config.workers(),
        }
    }

    pub fn run(&self) -> anyhow::Result<()> {
        if !self.source_dir.exists() {
            print_warning(&format!(
                "Source directory {:?} not found.",
                self.source_dir
            ));
            return Ok(());
        }
        if !self.dest_dir.exists() {
            print_warning(&format!(
                "Rewritten directory {:?} not found.",
                self.dest_dir
            ));
            return Ok(());
        }

        let files = collect_source_files(&self.source_dir);
        let spinner = create_spinner(&format!("Checking {} files...", files.len()));
        let entries = self.stat_all(&files)?;
        spinner.finish_and_clear();

        render_report_table(&entries);
        Ok(())
    }

    /// Stat every source/destination pair on a bounded pool. Collection
    /// through `par_iter` keeps the input order regardless of which worker
    /// finishes first.
    fn stat_all(&self, files: &[PathBuf]) -> anyhow::Result<Vec<ReportEntry>> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .build()?;

        let entries = pool.install(|| {
            files
                .par_iter()
                .filter_map(|path| self.stat_pair(path))
                .collect()
        });

        Ok(entries)
    }

    /// Row for one source file; `None` when no same-named rewritten file
    /// exists. A failed size query yields `0.0`, not an error.
    fn stat_pair(&self, src: &Path) -> Option<ReportEntry> {
        let name = src.file_name()?;
        let dest = self.dest_dir.join(name);
        if !dest.exists() {
            return None;
        }

        let orig_gib = size_gib(src);
        let new_gib = size_gib(&dest);

        Some(ReportEntry {
            filename: name.to_string_lossy().into_owned(),
            orig_gib,
            new_gib,
            percent_saved: percent_saved(orig_gib, new_gib),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::TempDir;

    fn reporter(root: &TempDir, workers: usize) -> SizeReporter {
        SizeReporter {
            source_dir: root.path().join("source"),
            dest_dir: root.path().join("rewritten"),
            workers,
        }
    }

    fn write_file(path: &Path, len: usize) {
        let mut f = fs::File::create(path).unwrap();
        f.write_all(&vec![b'x'; len]).unwrap();
    }

    #[test]
    fn test_source_only_files_excluded() {
        let root = TempDir::new().unwrap();
        let r = reporter(&root, 2);
        fs::create_dir_all(&r.source_dir).unwrap();
        fs::create_dir_all(&r.dest_dir).unwrap();

        write_file(&r.source_dir.join("both.txt"), 100);
        write_file(&r.dest_dir.join("both.txt"), 40);
        write_file(&r.source_dir.join("only_source.txt"), 100);

        let files = collect_source_files(&r.source_dir);
        let entries = r.stat_all(&files).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].filename, "both.txt");
        assert!((entries[0].percent_saved - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_output_preserves_enumeration_order() {
        let root = TempDir::new().unwrap();
        let r = reporter(&root, 4);
        fs::create_dir_all(&r.source_dir).unwrap();
        fs::create_dir_all(&r.dest_dir).unwrap();

        for i in 0..8 {
            let name = format!("f{}.txt", i);
            write_file(&r.source_dir.join(&name), 10 * (i + 1));
            write_file(&r.dest_dir.join(&name), 5);
        }

        let files = collect_source_files(&r.source_dir);
        let entries = r.stat_all(&files).unwrap();

        let expected: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        let got: Vec<String> = entries.iter().map(|e| e.filename.clone()).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn test_empty_original_reports_zero_percent() {
        let root = TempDir::new().unwrap();
        let r = reporter(&root, 1);
        fs::create_dir_all(&r.source_dir).unwrap();
        fs::create_dir_all(&r.dest_dir).unwrap();

        write_file(&r.source_dir.join("empty.txt"), 0);
        write_file(&r.dest_dir.join("empty.txt"), 0);

        let files = collect_source_files(&r.source_dir);
        let entries = r.stat_all(&files).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].percent_saved, 0.0);
    }

    #[test]
    fn test_run_with_missing_dirs_is_clean() {
        let root = TempDir::new().unwrap();
        let r = reporter(&root, 1);
        r.run().unwrap();
    }
}
