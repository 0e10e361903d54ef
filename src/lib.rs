//! b3-vectors library: fetch, parse and render the published BLAKE3 test vectors.

pub mod data;
pub mod model;
pub mod render;

use anyhow::Result;
use std::io::{self, BufWriter, Write};

/// Where to read the raw vector file from, resolved from the command line.
#[derive(Debug, Clone)]
pub struct Config {
    pub source: data::Source,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: data::Source::Remote(data::TEST_VECTORS_URL.to_string()),
        }
    }
}

/// Parses `bytes` in full and only then renders every case into `out`.
///
/// Nothing is written when parsing fails.
pub fn convert<W: Write>(bytes: &[u8], out: &mut W) -> Result<usize> {
    let vectors = model::parse_vectors(bytes)?;
    tracing::debug!(cases = vectors.cases.len(), "parsed test vectors");
    render::write_cases(out, &vectors.cases)
}

/// Loads the vector file and prints the rendered blocks to stdout.
pub fn run(config: &Config) -> Result<usize> {
    let bytes = config.source.load()?;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let written = convert(&bytes, &mut out)?;
    tracing::info!(written, "rendered test cases");
    Ok(written)
}
