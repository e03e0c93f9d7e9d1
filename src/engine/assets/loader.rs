// Asset loading functionality

use super::AssetError;
use std::path::{Path, PathBuf};

/// Asset loader responsible for finding and reading asset files
pub struct AssetLoader {
    base_path: PathBuf,
}

impl AssetLoader {
    /// Create a new asset loader with the given base path
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the full path for an asset key
    pub fn resolve_path(&self, key: &str) -> PathBuf {
        self.base_path.join(key)
    }

    /// Load asset bytes from disk
    pub fn load_bytes(&self, key: &str) -> Result<Vec<u8>, AssetError> {
        let path = self.resolve_path(key);

        if !path.exists() {
            return Err(AssetError::NotFound(path.to_string_lossy().to_string()));
        }

        Ok(std::fs::read(&path)?)
    }
}
