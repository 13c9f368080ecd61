//! Configuration for catalog processing
//!
//! Holds the filesystem layout the processor operates over: the current
//! source export, the product image directory, and the backup snapshot
//! directory. The upload collaborator owns writing these locations; this
//! crate only reads them.

use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Filesystem configuration for the catalog processor
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Current inventory export supplied by the upload collaborator
    pub data_file: PathBuf,

    /// Directory holding product images keyed as "{SKU}.jpg"
    pub images_dir: PathBuf,

    /// Directory holding timestamped backup snapshots of prior uploads
    pub backups_dir: PathBuf,
}

impl CatalogConfig {
    /// Create a configuration for a data file, deriving the backups
    /// directory as the sibling "backups" of the data file
    pub fn new(data_file: impl Into<PathBuf>, images_dir: impl Into<PathBuf>) -> Self {
        let data_file = data_file.into();
        let backups_dir = default_backups_dir(&data_file);
        Self {
            data_file,
            images_dir: images_dir.into(),
            backups_dir,
        }
    }

    /// Override the backups directory
    pub fn with_backups_dir(mut self, backups_dir: impl Into<PathBuf>) -> Self {
        self.backups_dir = backups_dir.into();
        self
    }

    /// Validate that configured directories, where present, are directories
    ///
    /// The data file itself may be absent: a missing source is a legal state
    /// that yields an empty catalog.
    pub fn validate(&self) -> Result<()> {
        if self.images_dir.exists() && !self.images_dir.is_dir() {
            return Err(Error::configuration(format!(
                "Images path is not a directory: {}",
                self.images_dir.display()
            )));
        }

        if self.backups_dir.exists() && !self.backups_dir.is_dir() {
            return Err(Error::configuration(format!(
                "Backups path is not a directory: {}",
                self.backups_dir.display()
            )));
        }

        Ok(())
    }
}

/// Sibling "backups" directory of a data file
fn default_backups_dir(data_file: &Path) -> PathBuf {
    data_file
        .parent()
        .map(|parent| parent.join("backups"))
        .unwrap_or_else(|| PathBuf::from("backups"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_backups_dir_defaults_to_sibling() {
        let config = CatalogConfig::new("/srv/uploads/estoque_atual.csv", "/srv/images");
        assert_eq!(config.backups_dir, PathBuf::from("/srv/uploads/backups"));
    }

    #[test]
    fn test_backups_dir_override() {
        let config = CatalogConfig::new("/srv/uploads/estoque_atual.csv", "/srv/images")
            .with_backups_dir("/var/backups/estoque");
        assert_eq!(config.backups_dir, PathBuf::from("/var/backups/estoque"));
    }

    #[test]
    fn test_validate_accepts_missing_paths() {
        let temp_dir = TempDir::new().unwrap();
        let config = CatalogConfig::new(
            temp_dir.path().join("estoque_atual.csv"),
            temp_dir.path().join("images"),
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_file_as_images_dir() {
        let temp_dir = TempDir::new().unwrap();
        let not_a_dir = temp_dir.path().join("images");
        std::fs::write(&not_a_dir, "x").unwrap();

        let config = CatalogConfig::new(temp_dir.path().join("estoque_atual.csv"), &not_a_dir);
        assert!(config.validate().is_err());
    }
}
