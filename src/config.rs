//! Configuration loading
//!
//! A small TOML file with `[paths]` and `[settings]` sections. A missing file
//! or missing keys fall back to defaults silently; an unparsable file logs a
//! warning and falls back to defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default flush granularity in lines.
pub const DEFAULT_CHUNK_SIZE: u64 = 100_000;
/// Default size-reporter worker count.
pub const DEFAULT_WORKERS: usize = 32;

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub paths: PathsConfig,
    pub settings: SettingsConfig,
}

/// Directory and file locations.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory of input `.txt` files.
    pub source_dir: PathBuf,
    /// Directory the rewritten files are written to.
    pub dest_dir: PathBuf,
    /// One blacklisted domain substring per line.
    pub blacklist_file: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("./source/"),
            dest_dir: PathBuf::from("./rewritten/"),
            blacklist_file: PathBuf::from("blacklisted.txt"),
        }
    }
}

/// Tuning knobs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SettingsConfig {
    /// Flush the output writer every this many lines.
    pub chunk_size: u64,
    /// Size-reporter thread pool size; `0` means one per CPU.
    pub workers: usize,
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            workers: DEFAULT_WORKERS,
        }
    }
}

impl Config {
    /// Load from a TOML file, falling back to defaults when the file is
    /// absent or unreadable. Only a present-but-invalid file warns.
    pub fn load_or_default(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                log::debug!("config {} not loaded ({}), using defaults", path.display(), e);
                return Self::default();
            }
        };

        match toml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                log::warn!(
                    "config {} is invalid ({}), using defaults",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Effective reporter worker count.
    pub fn workers(&self) -> usize {
        if self.settings.workers == 0 {
            num_cpus::get()
        } else {
            self.settings.workers
        }
    }
}
