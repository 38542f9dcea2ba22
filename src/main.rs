//! credlist-normalizer - normalize URL/credential dumps
//!
//! Main entry point for the command-line application.

use clap::Parser;
use std::process;

use credlist_normalizer::batch::BatchDriver;
use credlist_normalizer::cli::{Args, Command};
use credlist_normalizer::config::Config;
use credlist_normalizer::progress::print_error;
use credlist_normalizer::report::SizeReporter;

fn main() {
    let args = Args::parse();

    // Set up logging
    if args.verbose {
        std::env::set_var("RUST_LOG", "debug");
    } else if !args.quiet {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    if let Err(e) = run(args) {
        print_error(&format!("{}", e));

        // Print chain of errors
        let mut source = e.source();
        while let Some(err) = source {
            print_error(&format!("  Caused by: {}", err));
            source = err.source();
        }

        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = Config::load_or_default(&args.config);

    match args.command() {
        Command::Run => BatchDriver::new(config, args.quiet).run(),
        Command::Report => SizeReporter::new(&config).run(),
    }
}
