//! # credlist-normalizer
//!
//! Normalizer for large line-oriented URL/credential dumps.
//!
//! ## Features
//!
//! - **Per-line classification**: each line is either discarded for exactly
//!   one attributable reason or rewritten into canonical colon-delimited form
//! - **Domain blacklist**: case-insensitive substring matching against the
//!   domain part of each record
//! - **Permissive decoding**: invalid UTF-8 bytes are dropped, never fatal
//! - **Batch processing**: every `.txt` file in the source directory,
//!   sequentially, with a running summary table
//! - **Size report**: independent before/after size table with concurrent
//!   metadata lookups
//!
//! ## Usage
//!
//! ```bash
//! # Rewrite ./source/*.txt into ./rewritten/
//! credlist-normalizer run
//!
//! # Recompute the before/after size table from disk
//! credlist-normalizer report
//! ```
//!
//! ## Example
//!
//! ```rust
//! use credlist_normalizer::blacklist::Blacklist;
//! use credlist_normalizer::transform::{classify, TransformResult};
//!
//! let blacklist = Blacklist::from_entries(["badsite".to_string()]);
//!
//! let result = classify("http://example.com/user pass:extra", &blacklist);
//! assert_eq!(
//!     result,
//!     TransformResult::Kept("example.com:pass:extra".to_string())
//! );
//! ```

pub mod batch;
pub mod blacklist;
pub mod cli;
pub mod config;
pub mod lines;
pub mod processor;
pub mod progress;
pub mod report;
pub mod transform;

pub use blacklist::Blacklist;
pub use config::Config;
pub use processor::{FileProcessor, FileStats};
pub use transform::{classify, DiscardReason, TransformResult};
