//! Dataset download.

use std::path::Path;

use anyhow::{bail, Context};
use tracing::info;

/// Canonical location of the compressed film dataset.
pub const DATA_URL: &str = "https://oracleofbacon.org/data.txt.bz2";

/// Downloads the dataset to `path` unless the file already exists.
///
/// # Errors
///
/// Fails on filesystem errors, request failures, and non-2xx responses.
pub async fn download_if_missing(path: &Path, url: &str) -> anyhow::Result<()> {
    if tokio::fs::try_exists(path).await? {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    info!(url, "downloading dataset");
    let response = reqwest::get(url)
        .await
        .with_context(|| format!("requesting {url}"))?;
    if !response.status().is_success() {
        bail!("unexpected http status: {}", response.status());
    }
    let body = response.bytes().await.context("reading dataset body")?;
    tokio::fs::write(path, &body).await?;
    info!(bytes = body.len(), path = %path.display(), "dataset saved");
    Ok(())
}
