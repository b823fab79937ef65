//! Configuration handling
//!
//! Settings live in a TOML file under the platform config directory
//! (`~/.config/itv/config.toml` on Linux). Missing files and missing keys
//! fall back to defaults; out-of-range rates are clamped on load.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use toml_edit::{value, DocumentMut};

use crate::player::{MAX_RATE, MIN_RATE};
use crate::tui::Theme;

/// User configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Auto-play rate in steps per second, `1..=100`.
    pub default_rate: u16,
    /// Theme name: "dark", "classic", or "ocean".
    pub theme: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_rate: 50,
            theme: "dark".to_string(),
        }
    }
}

impl Config {
    /// Path to the config file.
    pub fn config_path() -> Result<PathBuf> {
        let base = dirs::config_dir().context("could not determine config directory")?;
        Ok(base.join("itv").join("config.toml"))
    }

    /// Load the config file, or defaults if it does not exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;

        if !(MIN_RATE..=MAX_RATE).contains(&config.default_rate) {
            tracing::debug!(rate = config.default_rate, "clamping out-of-range rate");
            config.default_rate = config.default_rate.clamp(MIN_RATE, MAX_RATE);
        }

        Ok(config)
    }

    /// Write the config file, creating the config directory if needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(self).context("failed to serialize config")?;
        fs::write(&path, content)
            .with_context(|| format!("failed to write config file {}", path.display()))?;
        Ok(())
    }

    /// Set a single key in the config file, preserving the file's existing
    /// formatting and comments.
    pub fn set_value(key: &str, raw: &str) -> Result<()> {
        let path = Self::config_path()?;
        let content = if path.exists() {
            fs::read_to_string(&path)
                .with_context(|| format!("failed to read config file {}", path.display()))?
        } else {
            toml::to_string_pretty(&Config::default()).context("failed to serialize config")?
        };

        let mut doc = content
            .parse::<DocumentMut>()
            .with_context(|| format!("failed to parse config file {}", path.display()))?;

        match key {
            "default_rate" => {
                let rate: u16 = raw
                    .parse()
                    .with_context(|| format!("'{}' is not a number", raw))?;
                if !(MIN_RATE..=MAX_RATE).contains(&rate) {
                    bail!("rate must be between {} and {}", MIN_RATE, MAX_RATE);
                }
                doc["default_rate"] = value(rate as i64);
            }
            "theme" => {
                if !Theme::is_known(raw) {
                    bail!("unknown theme '{}' (expected dark, classic, or ocean)", raw);
                }
                doc["theme"] = value(raw);
            }
            other => bail!("unknown config key '{}' (expected default_rate or theme)", other),
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        fs::write(&path, doc.to_string())
            .with_context(|| format!("failed to write config file {}", path.display()))?;
        Ok(())
    }
}
