use directories::BaseDirs;
use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};
use tracing::debug;

use crate::error::StoreError;

/// Location of the key file relative to the user's home directory.
const KEY_FILE: &str = ".config/wa";

/// Persists a single API key as raw bytes in a plain file.
#[derive(Debug, Clone)]
pub struct KeyStore {
    path: PathBuf,
}

impl KeyStore {
    /// Store backed by `<home>/.config/wa`.
    pub fn from_home() -> Result<Self, StoreError> {
        let dirs = BaseDirs::new().ok_or(StoreError::NoHomeDir)?;
        Ok(Self::at(dirs.home_dir().join(KEY_FILE)))
    }

    /// Store backed by an explicit file path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the key file with `key`, creating parent directories as needed.
    pub fn save(&self, key: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        write_key_file(&self.path, key.as_bytes()).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;

        debug!(path = %self.path.display(), "api key saved");
        Ok(())
    }

    /// Read the stored key verbatim.
    ///
    /// A missing, unreadable or empty file is reported as `NotFound`; the caller
    /// decides whether that is fatal. Bytes that are not UTF-8 are `InvalidKey`.
    pub fn load(&self) -> Result<String, StoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) if !bytes.is_empty() => bytes,
            Ok(_) => return Err(StoreError::NotFound(self.path.clone())),
            Err(err) => {
                debug!(path = %self.path.display(), error = %err, "api key not readable");
                return Err(StoreError::NotFound(self.path.clone()));
            }
        };

        String::from_utf8(bytes).map_err(|source| StoreError::InvalidKey {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(unix)]
fn write_key_file(path: &Path, bytes: &[u8]) -> io::Result<()> {
    use std::os::unix::fs::OpenOptionsExt;

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o644)
        .open(path)?;
    file.write_all(bytes)
}

#[cfg(not(unix))]
fn write_key_file(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(bytes)
}
