//! Configuration handling for the contact form

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the outbox directory
pub const OUTBOX_ENV: &str = "CONSULTPRO_OUTBOX";

/// User configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ContactConfig {
    /// Directory completed forms are written to
    pub outbox_dir: Option<PathBuf>,
    /// Start directly on the form
    pub skip_splash: Option<bool>,
}

impl ContactConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("com", "consultpro", "consultpro-contact")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the user config dir, falling back to defaults
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: ContactConfig = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save configuration to the user config dir
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Write the config file on first run so there is something to edit.
    /// Returns whether a file was written.
    pub fn save_if_missing(&self) -> Result<bool> {
        match Self::config_path() {
            Some(path) if !path.exists() => {
                self.save()?;
                tracing::info!(path = %path.display(), "wrote default config");
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Outbox directory: env override, then config, then the platform data dir
    pub fn resolve_outbox_dir(&self, env_override: Option<String>) -> PathBuf {
        if let Some(dir) = env_override.filter(|d| !d.trim().is_empty()) {
            return PathBuf::from(dir);
        }
        if let Some(dir) = &self.outbox_dir {
            return dir.clone();
        }
        Self::project_dirs()
            .map(|dirs| dirs.data_dir().join("outbox"))
            .unwrap_or_else(|| PathBuf::from("outbox"))
    }

    pub fn outbox_dir(&self) -> PathBuf {
        self.resolve_outbox_dir(std::env::var(OUTBOX_ENV).ok())
    }

    pub fn show_splash(&self) -> bool {
        !self.skip_splash.unwrap_or(false)
    }
}
