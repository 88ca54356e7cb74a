//! Source document fetching and on-disk snapshots.
//!
//! Fetches are independent and degradable: the caller treats any failure
//! here as "no data from this source" and carries on. Every successful
//! fetch is snapshotted to the cache directory so a pass can be replayed
//! offline.

use crate::error::{PoolError, Result};
use crate::sources::SourceSpec;
use reqwest::Client;
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Per-fetch timeout; the only cancellation boundary in a pass.
const FETCH_TIMEOUT_SECS: u64 = 15;

/// Build the HTTP client used for all source fetches in one pass.
pub fn fetch_client() -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
        .build()
        .map_err(Into::into)
}

/// Path: ~/.cache/awards-pool/snapshot_{year}_{source}.txt
pub fn snapshot_path(year: u16, source_id: &str) -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("awards-pool")
        .join(format!("snapshot_{}_{}.txt", year, source_id))
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}

/// Fetch one source's raw document, or replay it from its snapshot.
///
/// Online, a 2xx body is snapshotted (best effort) and returned; any
/// transport failure or non-2xx status surfaces as an error for the caller
/// to degrade. Offline, a missing snapshot degrades the same way.
pub async fn fetch_document(
    client: &Client,
    spec: &SourceSpec,
    year: u16,
    offline: bool,
) -> Result<String> {
    let path = snapshot_path(year, &spec.id);

    if offline {
        return try_read_to_string(&path).ok_or_else(|| PoolError::SnapshotMissing {
            source_id: spec.id.clone(),
            path: path.display().to_string(),
        });
    }

    let text = client
        .get(&spec.url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    let _ = write_string(&path, &text);

    Ok(text)
}
