//! Repository layer: persistence of the equipment collection

pub mod json_file;

use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::AppResult, models::Equipment};

pub use json_file::JsonFileStore;

/// Non-fatal problem found while loading the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LoadWarning {
    /// The backing file is not a valid JSON array. The collection is treated
    /// as empty and the file is left untouched.
    CorruptData { reason: String },
    /// One stored object could not be decoded and was left out of the view.
    InvalidRecord { position: usize, reason: String },
}

impl std::fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadWarning::CorruptData { reason } => {
                write!(f, "The data file is corrupted ({}); clear it and start over", reason)
            }
            LoadWarning::InvalidRecord { position, reason } => {
                write!(f, "Record #{} could not be read: {}", position, reason)
            }
        }
    }
}

/// Result of a full load: the decoded records in file order plus warnings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    pub records: Vec<Equipment>,
    pub warnings: Vec<LoadWarning>,
}

impl LoadReport {
    pub fn is_corrupt(&self) -> bool {
        self.warnings
            .iter()
            .any(|w| matches!(w, LoadWarning::CorruptData { .. }))
    }
}

/// Durable storage of the whole equipment collection.
#[cfg_attr(test, mockall::automock)]
pub trait EquipmentStore: Send + Sync {
    /// Read the full collection. A missing backing file is an empty collection.
    fn load(&self) -> AppResult<LoadReport>;

    /// Append one record and rewrite the backing file.
    ///
    /// Fails with a validation error when the asset tag or name is empty and
    /// with a duplicate error when the asset tag is already on file; neither
    /// touches the disk.
    fn append(&self, record: &Equipment) -> AppResult<()>;
}
