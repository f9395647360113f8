use std::{
    fs, io,
    path::PathBuf,
};

use crate::{
    core::utils::{ensure_dir, PathResolver},
    utils::persistence::write_atomic,
};

use super::{KeyValueStore, Result};

/// Stores each key as `<key>.json` under the application's storage directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let app_root = PathResolver::resolve_base(root);
        Self::in_dir(PathResolver::storage_dir_in(&app_root))
    }

    pub fn in_dir(dir: PathBuf) -> Result<Self> {
        ensure_dir(&dir)?;
        Ok(Self { dir })
    }

    pub fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", canonical_key(key)))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.entry_path(key)) {
            Ok(data) => Ok(Some(data)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        write_atomic(&self.entry_path(key), value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.entry_path(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

fn canonical_key(key: &str) -> String {
    let sanitized: String = key
        .trim()
        .chars()
        .map(|c| match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' => c,
            _ => '_',
        })
        .collect();
    if sanitized.trim_matches('_').is_empty() {
        "entry".into()
    } else {
        sanitized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_reads_as_none() {
        let temp = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(Some(temp.path().to_path_buf())).unwrap();
        assert_eq!(store.get("absent").unwrap(), None);
        store.remove("absent").unwrap();
    }

    #[test]
    fn entries_live_under_storage_dir() {
        let temp = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(Some(temp.path().to_path_buf())).unwrap();
        store.set("form-data", "{}").unwrap();
        let path = temp.path().join("storage").join("form-data.json");
        assert!(path.exists());
        assert_eq!(store.get("form-data").unwrap().as_deref(), Some("{}"));
        store.remove("form-data").unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn keys_cannot_escape_the_directory() {
        let temp = tempfile::tempdir().unwrap();
        let store = JsonFileStore::in_dir(temp.path().to_path_buf()).unwrap();
        let path = store.entry_path("../outside");
        assert_eq!(path.parent(), Some(temp.path()));
        assert_eq!(canonical_key("///"), "entry");
    }
}
