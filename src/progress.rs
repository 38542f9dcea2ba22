//! Console output helpers
//!
//! Styled status messages, a spinner for the concurrent stat phase, and the
//! two summary tables.

use crate::processor::FileStats;
use crate::report::ReportEntry;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Print a section header
pub fn print_header(text: &str) {
    println!("\n{} {}", "▶".green(), text.green().bold());
}

/// Print an info message
pub fn print_info(text: &str) {
    println!("  {} {}", "ℹ".cyan(), text);
}

/// Print a success message
pub fn print_success(text: &str) {
    println!("  {} {}", "✔".green(), text.green());
}

/// Print a warning message
pub fn print_warning(text: &str) {
    println!("  {} {}", "⚠".yellow(), text.yellow());
}

/// Print an error message
pub fn print_error(text: &str) {
    eprintln!("  {} {}", "✖".red(), text.red());
}

/// Create a styled spinner for indeterminate progress
pub fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();

    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ "),
    );

    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));

    pb
}

/// Render the cumulative batch table over every file processed so far.
///
/// Plain fixed-width columns; header kept uncolored so padding stays aligned.
pub fn render_batch_table(results: &[FileStats]) {
    println!(
        "{:<40} {:>14} {:>14} {:>10} {:>10}",
        "FILENAME", "ORIGINAL(GIB)", "REWRITTEN(GIB)", "SKIPPED", "%SAVED"
    );
    for r in results {
        println!(
            "{:<40} {:>14.3} {:>14.3} {:>10} {:>9.2}%",
            r.filename, r.orig_gib, r.new_gib, r.skipped, r.percent_saved
        );
    }
}

/// Render the size report table with its final TOTAL row.
pub fn render_report_table(entries: &[ReportEntry]) {
    println!(
        "{:<40} {:>15} {:>15} {:>12}",
        "FILENAME", "ORIGINAL (GIB)", "REWRITTEN (GIB)", "SAVED (%)"
    );
    println!("{}", "-".repeat(90));

    let mut total_orig = 0.0;
    let mut total_new = 0.0;
    for e in entries {
        total_orig += e.orig_gib;
        total_new += e.new_gib;
        println!(
            "{:<40} {:>15.6} {:>15.6} {:>12.2}",
            e.filename, e.orig_gib, e.new_gib, e.percent_saved
        );
    }

    // Totals are sums of sizes, not an average of percentages
    let total_pct = crate::processor::percent_saved(total_orig, total_new);
    println!("{}", "-".repeat(90));
    println!(
        "{:<40} {:>15.6} {:>15.6} {:>12.2}",
        "TOTAL", total_orig, total_new, total_pct
    );
}
