//! Seams for the browser-like host shell: page navigation for the OAuth
//! redirect, history-replacing URL cleanup after a callback, and the sink
//! downloaded resumes are handed to.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use bytes::Bytes;
use tracing::debug;

/// The host's location bar. `navigate` is a full-page redirect: the
/// coordinator performs no further state updates once it has been called.
pub trait Navigator: Send + Sync {
    /// Full-page navigation (OAuth authorization URL).
    fn navigate(&self, url: &str);

    /// Replace the current URL without adding a history entry.
    fn replace_url(&self, url: &str);

    /// The URL the application was entered on, including its query string.
    fn current_url(&self) -> String;
}

/// Destination for downloaded resume bytes.
#[async_trait]
pub trait DownloadSink: Send + Sync {
    /// Persists `bytes` under `filename`, returning the final location.
    async fn save(&self, filename: &str, bytes: Bytes) -> Result<PathBuf>;
}

/// Saves downloads into a directory, staging through a temporary file in the
/// same directory so the final name never holds partial content. The staging
/// file is consumed exactly once by the rename.
pub struct DiskSink {
    dir: PathBuf,
}

impl DiskSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl DownloadSink for DiskSink {
    async fn save(&self, filename: &str, bytes: Bytes) -> Result<PathBuf> {
        let dir = self.dir.clone();
        let filename = filename.to_string();

        tokio::task::spawn_blocking(move || -> Result<PathBuf> {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create download dir {}", dir.display()))?;

            let mut staged = tempfile::NamedTempFile::new_in(&dir)
                .context("Failed to create staging file")?;
            staged
                .write_all(&bytes)
                .context("Failed to write download")?;

            let dest = dir.join(&filename);
            staged
                .persist(&dest)
                .with_context(|| format!("Failed to persist download to {}", dest.display()))?;

            debug!("Saved download: {}", dest.display());
            Ok(dest)
        })
        .await?
    }
}
