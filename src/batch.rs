//! Batch driver
//!
//! Enumerates the source directory, runs the file processor over each `.txt`
//! file sequentially, and re-renders a cumulative summary table after every
//! file.

use crate::blacklist::Blacklist;
use crate::config::Config;
use crate::processor::{FileProcessor, FileStats};
use crate::progress::{
    print_error, print_header, print_info, print_success, print_warning, render_batch_table,
};

use bytesize::ByteSize;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File extension the batch picks up from the source directory.
pub const SOURCE_EXTENSION: &str = "txt";

/// Sequential driver over all files in the source directory.
pub struct BatchDriver {
    config: Config,
    quiet: bool,
}

impl BatchDriver {
    pub fn new(config: Config, quiet: bool) -> Self {
        Self { config, quiet }
    }

    /// Run the whole batch. A per-file failure is reported and skipped; only
    /// unexpected errors (e.g. an uncreatable destination directory) bubble
    /// up.
    pub fn run(&self) -> anyhow::Result<()> {
        let source_dir = &self.config.paths.source_dir;
        let dest_dir = &self.config.paths.dest_dir;

        fs::create_dir_all(dest_dir)?;

        let blacklist = self.load_blacklist();

        if !source_dir.exists() {
            // First-run ergonomics: leave a placeholder behind, exit clean
            print_warning(&format!(
                "Source directory {:?} not found.",
                source_dir
            ));
            print_info("Add your .txt files there, or point paths.source_dir elsewhere.");
            fs::create_dir_all(source_dir)?;
            print_info(&format!("Created {:?} as a placeholder.", source_dir));
            return Ok(());
        }

        let files = collect_source_files(source_dir);
        if files.is_empty() {
            print_warning("No .txt files found to process!");
            return Ok(());
        }

        if !self.quiet {
            let total_bytes: u64 = files
                .iter()
                .filter_map(|p| fs::metadata(p).ok())
                .map(|m| m.len())
                .sum();
            print_header("Processing...");
            print_info(&format!(
                "Found {} files ({} total)",
                files.len(),
                ByteSize(total_bytes)
            ));
        }

        let processor = FileProcessor::new(self.config.settings.chunk_size);
        let total_files = files.len();
        let mut results: Vec<FileStats> = Vec::with_capacity(total_files);

        for (idx, src_path) in files.iter().enumerate() {
            let dest_path = destination_for(src_path, dest_dir);

            match processor.process(src_path, &dest_path, &blacklist) {
                Ok(stats) => results.push(stats),
                Err(e) => {
                    print_error(&format!("{:?}: {}", src_path, e));
                    continue;
                }
            }

            if !self.quiet {
                println!("FILES LEFT TO PROCESS: {}", total_files - idx - 1);
                render_batch_table(&results);
            }
        }

        if !self.quiet {
            print_success(&format!(
                "Processed {} of {} files into {:?}",
                results.len(),
                total_files,
                dest_dir
            ));
        }

        Ok(())
    }

    /// Missing or unreadable blacklist degrades to an empty set, never fatal.
    fn load_blacklist(&self) -> Blacklist {
        let path = &self.config.paths.blacklist_file;
        match Blacklist::load(path) {
            Ok(bl) => {
                log::info!("loaded {} blacklist entries from {:?}", bl.len(), path);
                bl
            }
            Err(e) => {
                print_warning(&format!("Could not load blacklist {:?}: {}", path, e));
                Blacklist::empty()
            }
        }
    }
}

/// All `.txt` files directly inside `dir`, in directory-listing order.
pub fn collect_source_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext.eq_ignore_ascii_case(SOURCE_EXTENSION))
                .unwrap_or(false)
        })
        .map(|e| e.into_path())
        .collect()
}

/// Same-named destination path for a source file.
fn destination_for(src: &Path, dest_dir: &Path) -> PathBuf {
    match src.file_name() {
        Some(name) => dest_dir.join(name),
        None => dest_dir.to_path_buf(),
    }
}
