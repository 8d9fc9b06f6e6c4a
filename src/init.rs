use crate::logi;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Creates the output root if needed and returns its canonical absolute path.
pub async fn ensure_output_dir(dir: &Path) -> Result<PathBuf> {
    if fs::metadata(dir).await.map(|m| m.is_dir()).unwrap_or(false) {
        return fs::canonicalize(dir)
            .await
            .with_context(|| format!("Failed to resolve directory: {}", dir.display()));
    }

    fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    logi(format!("Created directory: {}", dir.display()));

    fs::canonicalize(dir)
        .await
        .with_context(|| format!("Failed to resolve directory: {}", dir.display()))
}
