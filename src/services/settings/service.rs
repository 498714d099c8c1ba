use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::AppConfig;

const CONFIG_FILE_NAME: &str = "config.toml";

/// Loads and saves [`AppConfig`] as TOML.
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service for the platform config directory, or the working directory
    /// when no home directory can be resolved.
    pub fn from_default_location() -> Self {
        Self::new(Self::default_path())
    }

    pub fn default_path() -> PathBuf {
        if let Some(dirs) = ProjectDirs::from("com", "LaunchCountdown", "LaunchCountdown") {
            dirs.config_dir().join(CONFIG_FILE_NAME)
        } else {
            log::warn!("Unable to resolve project directory; using current dir for config");
            PathBuf::from(CONFIG_FILE_NAME)
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the config. A missing file yields the defaults.
    pub fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            log::info!(
                "No config at {}, using defaults",
                self.path.display()
            );
            return Ok(AppConfig::default());
        }

        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read config from {}", self.path.display()))?;
        let config: AppConfig = toml::from_str(&data)
            .with_context(|| format!("failed to parse config from {}", self.path.display()))?;

        config
            .validate()
            .map_err(|e| anyhow!("Invalid config in {}: {}", self.path.display(), e))?;

        Ok(config)
    }

    pub fn save(&self, config: &AppConfig) -> Result<()> {
        config
            .validate()
            .map_err(|e| anyhow!("Invalid config: {}", e))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create dir {}", parent.display()))?;
            }
        }

        let data = toml::to_string_pretty(config).context("failed to serialize config")?;
        fs::write(&self.path, data)
            .with_context(|| format!("failed to write config to {}", self.path.display()))?;
        Ok(())
    }

    /// Load, logging and falling back to defaults on any failure.
    pub fn load_or_default(&self) -> AppConfig {
        match self.load() {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Failed to load config: {:#}, using defaults", e);
                AppConfig::default()
            }
        }
    }
}
