//! Equipment collection stored as one pretty-printed JSON array

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Value};

use super::{EquipmentStore, LoadReport, LoadWarning};
use crate::{
    config::StorageConfig,
    error::{AppError, AppResult},
    models::Equipment,
};

const INDENT: &[u8] = b"    ";

/// What the backing file held when it was read.
enum Contents {
    Missing,
    Corrupt(String),
    Array(Vec<Value>),
}

/// [`EquipmentStore`] backed by a single JSON file.
///
/// Every call reads the file in full; every append rewrites it in full.
/// There is no locking against other processes: the last rewrite wins.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    atomic_writes: bool,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            atomic_writes: true,
        }
    }

    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(&config.data_file).with_atomic_writes(config.atomic_writes)
    }

    /// Write through `<file>.tmp` and rename it over the backing file, so a
    /// crash mid-write never leaves a truncated document behind.
    pub fn with_atomic_writes(mut self, enabled: bool) -> Self {
        self.atomic_writes = enabled;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_contents(&self) -> AppResult<Contents> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Contents::Missing),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_slice::<Value>(&bytes) {
            Ok(Value::Array(items)) => Ok(Contents::Array(items)),
            Ok(other) => Ok(Contents::Corrupt(format!(
                "expected a JSON array, found {}",
                json_kind(&other)
            ))),
            Err(e) => Ok(Contents::Corrupt(e.to_string())),
        }
    }

    fn write_document(&self, items: &[Value]) -> AppResult<()> {
        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        items.serialize(&mut serializer)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        if self.atomic_writes {
            let tmp_path = tmp_path(&self.path);
            if let Err(e) = replace_via(&tmp_path, &self.path, &buf) {
                if let Err(cleanup) = fs::remove_file(&tmp_path) {
                    if cleanup.kind() != io::ErrorKind::NotFound {
                        tracing::warn!("Could not remove {}: {}", tmp_path.display(), cleanup);
                    }
                }
                return Err(e.into());
            }
        } else {
            fs::write(&self.path, &buf)?;
        }
        Ok(())
    }
}

impl EquipmentStore for JsonFileStore {
    fn load(&self) -> AppResult<LoadReport> {
        let items = match self.read_contents()? {
            Contents::Missing => {
                tracing::debug!("Data file {} does not exist yet", self.path.display());
                return Ok(LoadReport::default());
            }
            Contents::Corrupt(reason) => {
                tracing::warn!("Data file {} is corrupted: {}", self.path.display(), reason);
                return Ok(LoadReport {
                    records: Vec::new(),
                    warnings: vec![LoadWarning::CorruptData { reason }],
                });
            }
            Contents::Array(items) => items,
        };

        let mut report = LoadReport::default();
        for (position, item) in items.into_iter().enumerate() {
            match serde_json::from_value::<Equipment>(item) {
                Ok(record) => report.records.push(record),
                Err(e) => {
                    tracing::warn!("Skipping record #{} in {}: {}", position, self.path.display(), e);
                    report.warnings.push(LoadWarning::InvalidRecord {
                        position,
                        reason: e.to_string(),
                    });
                }
            }
        }

        tracing::debug!(
            "Loaded {} records from {} ({} warnings)",
            report.records.len(),
            self.path.display(),
            report.warnings.len()
        );
        Ok(report)
    }

    fn append(&self, record: &Equipment) -> AppResult<()> {
        if let Some(field) = record.missing_required_field() {
            return Err(AppError::Validation(format!("{} is required", field)));
        }

        // Work on the raw array so objects this version cannot decode are
        // written back unchanged.
        let mut items = match self.read_contents()? {
            Contents::Array(items) => items,
            Contents::Missing => Vec::new(),
            Contents::Corrupt(reason) => {
                tracing::warn!(
                    "Overwriting corrupted data file {} ({})",
                    self.path.display(),
                    reason
                );
                Vec::new()
            }
        };

        if items.iter().any(|item| stored_tag(item) == Some(record.asset_tag.as_str())) {
            return Err(AppError::DuplicateAssetTag(record.asset_tag.clone()));
        }

        items.push(serde_json::to_value(record)?);
        self.write_document(&items)?;

        tracing::info!(
            "Registered equipment {} ({} records on file)",
            record.asset_tag,
            items.len()
        );
        Ok(())
    }
}

fn replace_via(tmp_path: &Path, path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut file = fs::File::create(tmp_path)?;
    file.write_all(contents)?;
    file.sync_all()?;
    drop(file);
    fs::rename(tmp_path, path)
}

fn stored_tag(item: &Value) -> Option<&str> {
    item.get("asset_tag").and_then(Value::as_str)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
