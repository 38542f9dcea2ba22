//! Blacklist loading and matching
//!
//! A read-only set of lowercase substrings, loaded once per run. A domain is
//! rejected when any entry occurs anywhere inside it - substring semantics,
//! not suffix or label matching, so `vk` rejects `vk.com`, `avk.io` and
//! `service.vk` alike.

use ahash::AHashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Immutable set of blacklisted domain substrings.
#[derive(Debug, Clone, Default)]
pub struct Blacklist {
    // Sorted so the entry reported for a multi-match line is deterministic.
    entries: Vec<String>,
}

impl Blacklist {
    /// Empty blacklist: every domain passes.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from arbitrary entries; case-folds, drops blanks, dedups.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let set: AHashSet<String> = entries
            .into_iter()
            .map(|e| e.trim().to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();

        let mut entries: Vec<String> = set.into_iter().collect();
        entries.sort_unstable();
        Self { entries }
    }

    /// Load one entry per line from a text file. Blank lines are ignored.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let mut lines = Vec::new();
        for line in reader.lines() {
            lines.push(line?);
        }

        Ok(Self::from_entries(lines))
    }

    /// First entry that is a substring of the case-folded domain, if any.
    pub fn matched_entry(&self, domain: &str) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let domain = domain.to_lowercase();
        self.entries
            .iter()
            .find(|entry| domain.contains(entry.as_str()))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
