//! Image store adapter
//!
//! The catalog only needs to know whether a product photo exists; uploads
//! are handled by the external web layer through the same seam. Images are
//! keyed by filename ("{SKU}.jpg").

use std::path::PathBuf;

use crate::{Error, Result};

/// Storage seam for product images
pub trait ImageStore: Send + Sync {
    /// Whether an image exists under the given key
    fn exists(&self, key: &str) -> bool;

    /// Store image bytes under the given key, replacing any existing image
    fn save(&self, key: &str, bytes: &[u8]) -> Result<()>;
}

/// Image store over a flat directory of files
#[derive(Debug, Clone)]
pub struct DirectoryImageStore {
    root: PathBuf,
}

impl DirectoryImageStore {
    /// Create a store rooted at the given directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ImageStore for DirectoryImageStore {
    fn exists(&self, key: &str) -> bool {
        self.root.join(key).exists()
    }

    fn save(&self, key: &str, bytes: &[u8]) -> Result<()> {
        std::fs::create_dir_all(&self.root)
            .map_err(|e| Error::io(format!("Failed to create {}", self.root.display()), e))?;
        let path = self.root.join(key);
        std::fs::write(&path, bytes)
            .map_err(|e| Error::io(format!("Failed to write {}", path.display()), e))
    }
}
