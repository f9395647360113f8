use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fmt, fs,
    path::{Path, PathBuf},
};
use uuid::Uuid;

use super::common::Displayable;
use crate::errors::{Result, WizardError};

/// Opaque handle to a file picked during the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetToken(Uuid);

impl AssetToken {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for AssetToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Metadata recorded for an uploaded file. The handle itself is never
/// persisted, so a reloaded asset is listed but not available.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileAsset {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
    #[serde(skip)]
    pub token: Option<AssetToken>,
}

impl FileAsset {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
            last_modified: None,
            token: None,
        }
    }

    pub fn is_available(&self) -> bool {
        self.token.is_some()
    }
}

impl Displayable for FileAsset {
    fn display_label(&self) -> String {
        let mut label = format!("{} ({})", self.name, human_size(self.size));
        if !self.is_available() {
            label.push_str(" (not available in this session)");
        }
        label
    }
}

/// Formats a byte count with one decimal, e.g. `1.5 KB`.
pub fn human_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];
    if bytes < 1024 {
        return format!("{} B", bytes);
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}

/// Session-local mapping from asset tokens to the files they were picked from.
#[derive(Debug, Default)]
pub struct AssetRegistry {
    sources: HashMap<AssetToken, PathBuf>,
}

impl AssetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the file's metadata and issues a token for it. The file content is
    /// never opened.
    pub fn register(&mut self, path: &Path) -> Result<FileAsset> {
        let metadata = fs::metadata(path).map_err(|err| {
            WizardError::InvalidInput(format!("cannot read `{}`: {}", path.display(), err))
        })?;
        if !metadata.is_file() {
            return Err(WizardError::InvalidInput(format!(
                "`{}` is not a file",
                path.display()
            )));
        }
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let token = AssetToken::new();
        self.sources.insert(token, path.to_path_buf());
        tracing::debug!(%token, file = %name, "Registered asset");
        Ok(FileAsset {
            name,
            size: metadata.len(),
            last_modified: metadata.modified().ok().map(DateTime::<Utc>::from),
            token: Some(token),
        })
    }

    pub fn source(&self, asset: &FileAsset) -> Option<&Path> {
        asset
            .token
            .and_then(|token| self.sources.get(&token))
            .map(PathBuf::as_path)
    }

    pub fn clear(&mut self) {
        self.sources.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registering_reads_metadata_and_issues_token() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("logo.png");
        fs::write(&path, vec![0u8; 2048]).unwrap();

        let mut registry = AssetRegistry::new();
        let asset = registry.register(&path).unwrap();
        assert_eq!(asset.name, "logo.png");
        assert_eq!(asset.size, 2048);
        assert!(asset.is_available());
        assert_eq!(registry.source(&asset), Some(path.as_path()));
    }

    #[test]
    fn token_is_not_serialized() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("brief.pdf");
        fs::write(&path, b"pdf").unwrap();
        let asset = AssetRegistry::new().register(&path).unwrap();

        let json = serde_json::to_value(&asset).unwrap();
        assert!(json.get("token").is_none());
        let restored: FileAsset = serde_json::from_value(json).unwrap();
        assert_eq!(restored.name, "brief.pdf");
        assert!(!restored.is_available());
        assert!(restored
            .display_label()
            .ends_with("(not available in this session)"));
    }

    #[test]
    fn directories_are_rejected() {
        let temp = tempfile::tempdir().unwrap();
        let err = AssetRegistry::new().register(temp.path()).unwrap_err();
        assert!(matches!(err, WizardError::InvalidInput(_)));
    }

    #[test]
    fn sizes_are_humanized() {
        assert_eq!(human_size(512), "512 B");
        assert_eq!(human_size(1536), "1.5 KB");
        assert_eq!(human_size(5 * 1024 * 1024), "5.0 MB");
    }
}
