use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, time::Duration};

use crate::{
    core::utils::{ensure_dir, PathResolver},
    errors::WizardError,
    utils::persistence::write_atomic,
};

const DEFAULT_GENERATION_DELAY_MS: u64 = 1500;
const DEFAULT_COPIED_INDICATOR_MS: u64 = 2000;

/// User-tunable settings stored alongside the wizard data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Pause before the final prompt is shown.
    pub generation_delay_ms: u64,
    /// How long the "copied" indicator stays lit after a clipboard write.
    pub copied_indicator_ms: u64,
    /// Directory receiving exported `.json` and `.txt` files; the working
    /// directory when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,
    pub plain_mode: bool,
    pub screen_reader_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            generation_delay_ms: DEFAULT_GENERATION_DELAY_MS,
            copied_indicator_ms: DEFAULT_COPIED_INDICATOR_MS,
            export_dir: None,
            plain_mode: false,
            screen_reader_mode: false,
        }
    }
}

impl Config {
    pub fn generation_delay(&self) -> Duration {
        Duration::from_millis(self.generation_delay_ms)
    }

    pub fn copied_indicator(&self) -> Duration {
        Duration::from_millis(self.copied_indicator_ms)
    }

    pub fn export_dir(&self) -> PathBuf {
        self.export_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn with_base_dir(base: PathBuf) -> Result<Self, WizardError> {
        ensure_dir(&base)?;
        ensure_dir(&PathResolver::config_dir_in(&base))?;
        Ok(Self {
            path: PathResolver::config_file_in(&base),
        })
    }

    /// Loads the configuration, returning defaults when no file exists yet.
    pub fn load(&self) -> Result<Config, WizardError> {
        if !self.path.exists() {
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        serde_json::from_str(&data).map_err(|err| {
            WizardError::Config(format!("`{}` is not valid: {}", self.path.display(), err))
        })
    }

    pub fn save(&self, config: &Config) -> Result<(), WizardError> {
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        let config = manager.load().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.generation_delay(), Duration::from_millis(1500));
        assert_eq!(config.copied_indicator(), Duration::from_secs(2));
    }

    #[test]
    fn save_then_load_round_trips() {
        let temp = tempfile::tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        let config = Config {
            generation_delay_ms: 0,
            export_dir: Some(temp.path().join("exports")),
            plain_mode: true,
            ..Config::default()
        };
        manager.save(&config).unwrap();
        assert!(manager.path.exists());
        assert_eq!(manager.load().unwrap(), config);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        fs::write(&manager.path, r#"{"generation_delay_ms": 10}"#).unwrap();
        let config = manager.load().unwrap();
        assert_eq!(config.generation_delay_ms, 10);
        assert_eq!(config.copied_indicator_ms, 2000);
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let temp = tempfile::tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        fs::write(&manager.path, "{not json").unwrap();
        assert!(matches!(manager.load(), Err(WizardError::Config(_))));
    }
}
