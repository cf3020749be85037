use std::{
    ffi::OsString,
    io::ErrorKind,
    path::{Path, PathBuf},
};
use tokio::fs;
use tracing::debug;

use crate::errors::ServiceError;

/// Read a whole JSON document from `path`.
///
/// Absent, empty, or malformed files are all reported as `ServiceError::Parse`:
/// in every case there is no document to decode.
pub async fn read_document<T>(path: &Path) -> Result<T, ServiceError>
where
    T: serde::de::DeserializeOwned,
{
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ServiceError::Parse(format!("{}: no such file", path.display())));
        }
        Err(e) => return Err(ServiceError::Io(format!("{}: {e}", path.display()))),
    };
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(ServiceError::Parse(format!("{}: empty document", path.display())));
    }
    serde_json::from_slice(&bytes).map_err(|e| ServiceError::Parse(format!("{}: {e}", path.display())))
}

/// Replace the document at `path` with `value`.
///
/// The bytes go to a sibling temp file first and are renamed over the target,
/// so readers see either the old or the new document, never a truncated one.
pub async fn write_document<T>(path: &Path, value: &T) -> Result<(), ServiceError>
where
    T: serde::Serialize + ?Sized,
{
    let data = serde_json::to_vec_pretty(value).map_err(|e| ServiceError::Parse(e.to_string()))?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| ServiceError::Io(format!("{}: {e}", parent.display())))?;
    }

    let tmp = temp_sibling(path);
    if let Err(e) = fs::write(&tmp, &data).await {
        let _ = fs::remove_file(&tmp).await;
        return Err(ServiceError::Io(format!("{}: {e}", tmp.display())));
    }
    if let Err(e) = fs::rename(&tmp, path).await {
        let _ = fs::remove_file(&tmp).await;
        return Err(ServiceError::Io(format!("{}: {e}", path.display())));
    }
    debug!(path = %path.display(), bytes = data.len(), "json document written");
    Ok(())
}

/// Create the document with `default` if nothing exists at `path` yet.
/// Returns whether a new file was written.
pub async fn ensure_document<T>(path: &Path, default: &T) -> Result<bool, ServiceError>
where
    T: serde::Serialize + ?Sized,
{
    match fs::metadata(path).await {
        Ok(_) => Ok(false),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            write_document(path, default).await?;
            Ok(true)
        }
        Err(e) => Err(ServiceError::Io(format!("{}: {e}", path.display()))),
    }
}

/// Delete the document; a missing file is not an error.
pub async fn remove_document(path: &Path) -> Result<(), ServiceError> {
    match fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(ServiceError::Io(format!("{}: {e}", path.display()))),
    }
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or_default());
    name.push(format!(".{}.tmp", uuid::Uuid::new_v4().simple()));
    path.with_file_name(name)
}
