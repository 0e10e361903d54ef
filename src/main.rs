//! # b3-vectors
//!
//! Downloads the published BLAKE3 test vectors and prints each case as a
//! `runTestCase` snippet, ready to paste into a test suite.

use anyhow::Result;
use b3_vectors::{Config, data};
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Read a previously downloaded test_vectors.json instead of fetching
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Log progress to stderr (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn config(&self) -> Config {
        let source = match &self.file {
            Some(path) => data::Source::File(path.clone()),
            None => Config::default().source,
        };
        Config { source }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    b3_vectors::run(&args.config())?;
    Ok(())
}
