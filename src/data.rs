use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Location of the vector file published alongside the BLAKE3 reference implementation.
pub const TEST_VECTORS_URL: &str =
    "https://github.com/BLAKE3-team/BLAKE3/raw/master/test_vectors/test_vectors.json";

/// Where the raw vector file is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Remote(String),
    File(PathBuf),
}

impl Source {
    /// Returns the raw, still undecoded contents of the vector file.
    pub fn load(&self) -> Result<Vec<u8>> {
        match self {
            Source::Remote(url) => {
                let client = http_client()?;
                fetch_bytes(&client, url)
            }
            Source::File(path) => read_file(path),
        }
    }
}

pub fn http_client() -> Result<reqwest::blocking::Client> {
    Ok(reqwest::blocking::Client::builder().build()?)
}

pub fn fetch_bytes(client: &reqwest::blocking::Client, url: &str) -> Result<Vec<u8>> {
    tracing::info!(url, "downloading test vectors");
    let mut response = client
        .get(url)
        .send()
        .with_context(|| format!("Failed to download {}", url))?;
    if !response.status().is_success() {
        anyhow::bail!("Failed to download {}: {}", url, response.status());
    }

    let mut body = Vec::new();
    response
        .read_to_end(&mut body)
        .with_context(|| format!("Failed to read response body from {}", url))?;
    tracing::debug!(bytes = body.len(), "download complete");
    Ok(body)
}

pub fn read_file(path: &Path) -> Result<Vec<u8>> {
    if !path.exists() {
        anyhow::bail!("File not found: {}", path.display());
    }
    tracing::info!(path = %path.display(), "reading test vectors");
    fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
}
