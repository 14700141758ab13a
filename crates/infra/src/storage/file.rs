//! File-backed cart snapshot storage.
//!
//! Each storage key maps to one file under a data directory, so several carts
//! (e.g. per storefront) can share a directory without clobbering each other.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use storefront_cart::{CartStorage, StorageError};

/// Snapshot slot stored as a single file.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Storage for `key` under `dir` (`{dir}/{sanitized key}.json`).
    pub fn new(dir: impl AsRef<Path>, key: &str) -> Self {
        let mut path = dir.as_ref().to_path_buf();
        path.push(format!("{}.json", file_name_for_key(key)));
        Self { path }
    }

    /// Storage for `key` under the OS app data directory:
    /// `{app_data_dir}/storefront/{key}.json`.
    pub fn in_data_dir(key: &str) -> Result<Self, StorageError> {
        Ok(Self::new(default_data_dir()?, key))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CartStorage for FileStorage {
    fn read(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, snapshot: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write-then-rename so a crash never leaves a half-written snapshot.
        let tmp = self.path.with_extension("json.tmp");
        {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(snapshot.as_bytes())?;
            file.sync_all()?;
        }
        fs::rename(&tmp, &self.path)?;

        tracing::debug!(path = %self.path.display(), bytes = snapshot.len(), "cart snapshot written");
        Ok(())
    }
}

/// Map an arbitrary storage key (e.g. `@storefront:cart`) to a safe file stem.
fn file_name_for_key(key: &str) -> String {
    let stem: String = key
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    let stem = stem.trim_matches('_');
    if stem.is_empty() {
        "cart".to_string()
    } else {
        stem.to_string()
    }
}

fn default_data_dir() -> Result<PathBuf, StorageError> {
    let base = dirs::data_dir()
        .or_else(|| {
            dirs::home_dir().map(|mut h| {
                h.push(".local");
                h.push("share");
                h
            })
        })
        .ok_or_else(|| {
            StorageError::Unavailable(
                "failed to resolve OS app data directory - tried data_dir() and home_dir()/.local/share"
                    .to_string(),
            )
        })?;

    let mut dir = base;
    dir.push("storefront");
    Ok(dir)
}
