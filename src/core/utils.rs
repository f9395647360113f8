use dirs::home_dir;
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::errors::WizardError;

const DEFAULT_DIR_NAME: &str = ".prompt_architect";
const STORAGE_DIR: &str = "storage";
const CONFIG_DIR: &str = "config";
const CONFIG_FILE: &str = "config.json";

pub const HOME_ENV: &str = "PROMPT_ARCHITECT_HOME";

/// Resolves the directories the application reads and writes.
pub struct PathResolver;

impl PathResolver {
    /// Returns the application data directory, defaulting to `~/.prompt_architect`.
    pub fn base_dir() -> PathBuf {
        if let Some(custom) = env::var_os(HOME_ENV) {
            return PathBuf::from(custom);
        }
        home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_DIR_NAME)
    }

    /// Prefers an explicit override, falling back to [`PathResolver::base_dir`].
    pub fn resolve_base(custom: Option<PathBuf>) -> PathBuf {
        custom.unwrap_or_else(Self::base_dir)
    }

    pub fn storage_dir_in(base: &Path) -> PathBuf {
        base.join(STORAGE_DIR)
    }

    pub fn config_dir_in(base: &Path) -> PathBuf {
        base.join(CONFIG_DIR)
    }

    pub fn config_file_in(base: &Path) -> PathBuf {
        Self::config_dir_in(base).join(CONFIG_FILE)
    }
}

/// Creates the directory (and parents) when missing.
pub fn ensure_dir(path: &Path) -> Result<(), WizardError> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
