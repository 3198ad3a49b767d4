use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HorasConfig {
    /// Where the companion app persists the widget snapshot. Defaults to
    /// snapshot.json next to the config file.
    #[serde(default)]
    pub snapshot_path: Option<PathBuf>,
    /// Where dispatched background intents are spooled for the companion
    /// app to drain. Defaults to `intents` next to the config file.
    #[serde(default)]
    pub spool_path: Option<PathBuf>,
    /// Seconds between automatic snapshot refreshes.
    #[serde(default = "default_refresh_secs")]
    pub refresh_secs: u64,
    /// Placed widget instances, rendered independently and in order.
    #[serde(default = "default_instances")]
    pub instances: Vec<String>,
    /// Host-level dark-mode flag fed into theme resolution.
    #[serde(default = "default_dark_mode")]
    pub dark_mode: bool,
}

fn default_refresh_secs() -> u64 {
    5
}

fn default_instances() -> Vec<String> {
    vec!["widget-1".to_string()]
}

fn default_dark_mode() -> bool {
    true
}

impl Default for HorasConfig {
    fn default() -> Self {
        Self {
            snapshot_path: None,
            spool_path: None,
            refresh_secs: default_refresh_secs(),
            instances: default_instances(),
            dark_mode: default_dark_mode(),
        }
    }
}

impl HorasConfig {
    fn root_path() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Cannot determine config directory")?
            .join("horas-tui"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::root_path()?.join("config.toml"))
    }

    pub fn log_path() -> Result<PathBuf> {
        Ok(Self::root_path()?.join("horas-tui.log"))
    }

    pub fn snapshot_path(&self) -> Result<PathBuf> {
        match &self.snapshot_path {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::root_path()?.join("snapshot.json")),
        }
    }

    pub fn spool_path(&self) -> Result<PathBuf> {
        match &self.spool_path {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::root_path()?.join("intents")),
        }
    }

    /// Load config from disk. Returns default config if file doesn't exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(&path, raw)?;
        Ok(())
    }
}
