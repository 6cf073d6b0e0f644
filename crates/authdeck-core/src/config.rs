//! Configuration management for authdeck.
//!
//! Loads configuration from ${AUTHDECK_HOME}/config.toml with sensible
//! defaults. Nothing is written back at runtime; the only write path is
//! `config init`, which drops the commented template.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::directory::{UserDirectory, UserRecord};

/// Seeded demo account configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub enabled: bool,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            name: "Demo User".to_string(),
            email: "demo@example.com".to_string(),
            password: "demo123".to_string(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Brand name shown above the auth card.
    pub brand: String,

    /// Seconds a toast notification stays visible.
    pub toast_ttl_secs: u64,

    /// Seeded demo account.
    #[serde(default)]
    pub demo: DemoConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            brand: Self::DEFAULT_BRAND.to_string(),
            toast_ttl_secs: Self::DEFAULT_TOAST_TTL_SECS,
            demo: DemoConfig::default(),
        }
    }
}

impl Config {
    const DEFAULT_BRAND: &str = "Campusverse";
    const DEFAULT_TOAST_TTL_SECS: u64 = 3;

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Writes the commented default template to `path`.
    ///
    /// Fails if a config already exists there.
    pub fn init_at(path: &Path) -> Result<()> {
        if path.exists() {
            bail!("Config already exists at {}", path.display());
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, default_config_template())
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    pub fn toast_ttl(&self) -> Duration {
        Duration::from_secs(self.toast_ttl_secs)
    }

    /// Builds the starting user directory from the demo seed settings.
    pub fn seed_directory(&self) -> UserDirectory {
        if self.demo.enabled {
            UserDirectory::seeded(UserRecord {
                name: self.demo.name.clone(),
                email: self.demo.email.clone(),
                password: self.demo.password.clone(),
            })
        } else {
            UserDirectory::new()
        }
    }
}

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
/// To update, edit default_config.toml directly.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for authdeck configuration and log directories.
    //!
    //! AUTHDECK_HOME resolution order:
    //! 1. AUTHDECK_HOME environment variable (if set)
    //! 2. ~/.config/authdeck (default)

    use std::path::PathBuf;

    /// Returns the authdeck home directory.
    ///
    /// Checks AUTHDECK_HOME env var first, falls back to ~/.config/authdeck
    pub fn authdeck_home() -> PathBuf {
        if let Ok(home) = std::env::var("AUTHDECK_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("authdeck"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        authdeck_home().join("config.toml")
    }

    /// Returns the path to the log directory.
    pub fn logs_dir() -> PathBuf {
        authdeck_home().join("logs")
    }
}
