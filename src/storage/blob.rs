//! Blob store backends

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use tracing::{debug, info};

use crate::error::{GateError, GateResult};
use crate::utils::{atomic_write, cleanup_temp_files};

/// Key-value store of whole JSON documents
pub trait BlobStore: Send + Sync {
    /// Read a blob; `Ok(None)` when the key was never written
    fn get(&self, key: &str) -> GateResult<Option<String>>;

    /// Replace a blob
    fn put(&self, key: &str, value: &str) -> GateResult<()>;
}

/// One `<key>.json` file per blob under a data directory
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    data_dir: PathBuf,
}

impl FileBlobStore {
    /// Open a store rooted at `data_dir`, clearing interrupted writes
    pub fn open<P: AsRef<Path>>(data_dir: P) -> GateResult<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();
        fs::create_dir_all(&data_dir)?;

        let cleaned = cleanup_temp_files(&data_dir)?;
        if cleaned > 0 {
            info!(count = cleaned, dir = %data_dir.display(), "Removed leftover temp files");
        }

        Ok(Self { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }
}

impl BlobStore for FileBlobStore {
    fn get(&self, key: &str) -> GateResult<Option<String>> {
        let path = self.blob_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn put(&self, key: &str, value: &str) -> GateResult<()> {
        let path = self.blob_path(key);
        atomic_write(&path, value)?;
        debug!(key, bytes = value.len(), "Blob written");
        Ok(())
    }
}

/// In-process store for tests and throwaway sessions
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blobs: Mutex<HashMap<String, String>>,
    read_only: Mutex<bool>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a blob
    pub fn with_blob(self, key: &str, value: &str) -> Self {
        self.blobs.lock().insert(key.to_string(), value.to_string());
        self
    }

    /// Make every subsequent `put` fail
    pub fn set_read_only(&self, read_only: bool) {
        *self.read_only.lock() = read_only;
    }

    pub fn contains(&self, key: &str) -> bool {
        self.blobs.lock().contains_key(key)
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> GateResult<Option<String>> {
        Ok(self.blobs.lock().get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> GateResult<()> {
        if *self.read_only.lock() {
            return Err(GateError::Storage(format!("store is read-only: {}", key)));
        }
        self.blobs.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
