//! File-backed key-value backend — one file per key under a directory.

use crate::error::StoreError;
use crate::kv::KeyValue;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Durable key-value storage under a local directory, the desktop analog
/// of browser local storage. Keys map directly to file names; callers use
/// fixed, path-safe keys.
pub struct FileKv {
    dir: PathBuf,
}

impl FileKv {
    /// Open (creating if needed) a store rooted at `dir`.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl KeyValue for FileKv {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn put(&self, key: &str, bytes: &[u8]) -> Result<(), StoreError> {
        fs::write(self.path_for(key), bytes)?;
        Ok(())
    }
}
