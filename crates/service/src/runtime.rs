//! Runtime environment helpers
//!
//! Thin wrapper around `common::env` to keep binary crates importing
//! `service::runtime::ensure_data_dir` without depending directly on `common`.

use std::path::Path;

/// Ensure the directory that will hold `file_path` exists.
pub async fn ensure_data_dir(file_path: &Path) -> anyhow::Result<()> {
    common::env::ensure_parent_dir(file_path).await
}
