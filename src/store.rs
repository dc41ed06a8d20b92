use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;

#[derive(Debug, Error)]
#[error("{action} {}: {source}", .path.display())]
pub struct StoreError {
    action: &'static str,
    path: PathBuf,
    #[source]
    source: io::Error,
}

impl StoreError {
    fn new(action: &'static str, path: &Path, source: io::Error) -> Self {
        Self {
            action,
            path: path.to_path_buf(),
            source,
        }
    }
}

/// The plan text, kept in a single file.
///
/// Reads share the lock, writes hold it exclusively, so a reader never sees a
/// half-written file from this process.
pub struct Store {
    path: PathBuf,
    lock: RwLock<()>,
}

impl Store {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            lock: RwLock::new(()),
        }
    }

    /// Returns the whole text, or `None` if nothing has been saved yet.
    pub async fn read(&self) -> Result<Option<String>, StoreError> {
        let _guard = self.lock.read().await;
        debug!("Reading {}", self.path.display());

        match fs::read_to_string(&self.path).await {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StoreError::new("failed to read", &self.path, err)),
        }
    }

    /// Replaces the whole text.
    pub async fn save(&self, text: &str) -> Result<(), StoreError> {
        let _guard = self.lock.write().await;
        let staging = self.staging_path();

        fs::write(&staging, text)
            .await
            .map_err(|err| StoreError::new("failed to write", &staging, err))?;

        fs::rename(&staging, &self.path)
            .await
            .map_err(|err| StoreError::new("failed to replace", &self.path, err))
    }

    pub async fn append(&self, text: &str) -> Result<(), StoreError> {
        let _guard = self.lock.write().await;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|err| StoreError::new("failed to open", &self.path, err))?;

        file.write_all(text.as_bytes())
            .await
            .map_err(|err| StoreError::new("failed to append to", &self.path, err))?;

        file.flush()
            .await
            .map_err(|err| StoreError::new("failed to append to", &self.path, err))
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
