pub mod json_backend;
pub mod memory;

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::{
    domain::FormRecord,
    errors::WizardError,
    utils::persistence::write_atomic,
};

pub use json_backend::JsonFileStore;
pub use memory::MemoryStore;

pub type Result<T> = std::result::Result<T, WizardError>;

/// Key under which the form record is stored.
pub const STORAGE_KEY: &str = "vibecodefore-prompt-architect-data";

/// Minimal string key-value persistence, one value per key.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// Persists the form record and handles file export and import.
///
/// Background saves never fail the caller: read and parse problems fall back
/// to defaults and write problems are logged. Only explicit export and import
/// requests report errors.
pub struct FormStore {
    backend: Box<dyn KeyValueStore>,
}

impl FormStore {
    pub fn new(backend: Box<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStore::new()))
    }

    pub fn load(&self) -> FormRecord {
        let raw = match self.backend.get(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return FormRecord::default(),
            Err(err) => {
                tracing::warn!("Failed to read saved form data: {}", err);
                return FormRecord::default();
            }
        };
        match FormRecord::from_json(&raw) {
            Ok(record) => {
                tracing::debug!("Loaded saved form data");
                record
            }
            Err(err) => {
                tracing::warn!("Saved form data is unreadable, starting fresh: {}", err);
                FormRecord::default()
            }
        }
    }

    pub fn save(&self, record: &FormRecord) {
        let result = serde_json::to_string(record)
            .map_err(WizardError::from)
            .and_then(|json| self.backend.set(STORAGE_KEY, &json));
        if let Err(err) = result {
            tracing::error!("Failed to save form data: {}", err);
        }
    }

    pub fn clear(&self) {
        if let Err(err) = self.backend.remove(STORAGE_KEY) {
            tracing::error!("Failed to clear saved form data: {}", err);
        }
    }

    pub fn has_saved_data(&self) -> bool {
        matches!(self.backend.get(STORAGE_KEY), Ok(Some(_)))
    }

    /// Writes the record as pretty JSON to `<appName>-data.json` in `dir`.
    pub fn export_to_file(&self, record: &FormRecord, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(format!("{}-data.json", record.export_stem()));
        let json = serde_json::to_string_pretty(record)
            .map_err(|err| WizardError::Export(err.to_string()))?;
        write_atomic(&path, &json)
            .map_err(|err| WizardError::Export(format!("{}: {}", path.display(), err)))?;
        tracing::info!(path = %path.display(), "Exported form data");
        Ok(path)
    }

    /// Writes the generated prompt text to `<appName>-prompt.txt` in `dir`.
    pub fn export_prompt(&self, prompt: &str, record: &FormRecord, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(format!("{}-prompt.txt", record.export_stem()));
        write_atomic(&path, prompt)
            .map_err(|err| WizardError::Export(format!("{}: {}", path.display(), err)))?;
        tracing::info!(path = %path.display(), "Exported prompt");
        Ok(path)
    }

    /// Reads a previously exported record, merging it over defaults.
    pub fn import_from_file(&self, path: &Path) -> Result<FormRecord> {
        let data = fs::read_to_string(path)
            .map_err(|err| WizardError::Import(format!("{}: {}", path.display(), err)))?;
        FormRecord::from_json(&data)
            .map_err(|err| WizardError::Import(format!("{}: {}", path.display(), err)))
    }
}
