//! Configuration management.
//!
//! Reads an optional TOML file from the platform config directory (or an
//! explicit path). The file is never written back: a missing file simply
//! means defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::carousel::{CarouselTuning, DEFAULT_DISMISS_DELAY, DEFAULT_SWIPE_THRESHOLD};

/// Upper bound on the dismiss grace period. Anything longer feels stuck.
pub const MAX_DISMISS_DELAY_MS: u64 = 2_000;

/// Default cadence of the hero role rotation.
pub const DEFAULT_ROLE_INTERVAL_MS: u64 = 2_000;

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Follow the OS dark/light setting
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

/// Theme preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ThemeConfig {
    pub mode: ThemeMode,
}

/// Carousel tuning as stored on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub dismiss_delay_ms: u64,
    pub swipe_threshold: i32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            dismiss_delay_ms: DEFAULT_DISMISS_DELAY.as_millis() as u64,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
        }
    }
}

impl CarouselConfig {
    pub fn tuning(&self) -> CarouselTuning {
        CarouselTuning {
            dismiss_delay: Duration::from_millis(self.dismiss_delay_ms),
            swipe_threshold: self.swipe_threshold,
        }
    }
}

/// Hero section settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    pub role_interval_ms: u64,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            role_interval_ms: DEFAULT_ROLE_INTERVAL_MS,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeConfig,
    pub carousel: CarouselConfig,
    pub hero: HeroConfig,
}

/// Semantically invalid configuration values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("carousel.swipe_threshold must be positive (got {0})")]
    NonPositiveSwipeThreshold(i32),
    #[error("carousel.dismiss_delay_ms must be at most {max} (got {got})")]
    DismissDelayTooLong { got: u64, max: u64 },
    #[error("hero.role_interval_ms must be greater than zero")]
    ZeroRoleInterval,
}

impl Config {
    /// Gets the configuration directory path.
    ///
    /// - Linux: `~/.config/folio/`
    /// - macOS: `~/Library/Application Support/folio/`
    /// - Windows: `%APPDATA%\folio\`
    pub fn config_dir() -> Result<PathBuf> {
        let dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("folio");
        Ok(dir)
    }

    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load from the default location, or defaults if no file exists.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load from `path`, or defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        debug!(path = %path.display(), ?config, "config loaded");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.carousel.swipe_threshold <= 0 {
            return Err(ConfigError::NonPositiveSwipeThreshold(
                self.carousel.swipe_threshold,
            ));
        }
        if self.carousel.dismiss_delay_ms > MAX_DISMISS_DELAY_MS {
            return Err(ConfigError::DismissDelayTooLong {
                got: self.carousel.dismiss_delay_ms,
                max: MAX_DISMISS_DELAY_MS,
            });
        }
        if self.hero.role_interval_ms == 0 {
            return Err(ConfigError::ZeroRoleInterval);
        }
        Ok(())
    }

    pub fn role_interval(&self) -> Duration {
        Duration::from_millis(self.hero.role_interval_ms)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("config.toml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn defaults_match_carousel_constants() {
        let config = Config::default();
        assert_eq!(config.theme.mode, ThemeMode::Auto);
        assert_eq!(config.carousel.tuning(), CarouselTuning::default());
        assert_eq!(config.role_interval(), Duration::from_millis(2_000));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[carousel]\nswipe_threshold = 8\n");
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.carousel.swipe_threshold, 8);
        assert_eq!(config.carousel.dismiss_delay_ms, 90);
        assert_eq!(config.theme.mode, ThemeMode::Auto);
    }

    #[test]
    fn theme_mode_parses_variant_names() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[theme]\nmode = \"Light\"\n");
        assert_eq!(Config::load_from(&path).unwrap().theme.mode, ThemeMode::Light);
    }

    #[test]
    fn malformed_toml_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[carousel\n");
        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config file"));
    }

    #[test]
    fn invalid_values_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[carousel]\nswipe_threshold = 0\n");
        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("swipe_threshold must be positive"));
    }

    #[test]
    fn validate_checks_each_field() {
        let mut config = Config::default();
        config.carousel.dismiss_delay_ms = 5_000;
        assert_eq!(
            config.validate(),
            Err(ConfigError::DismissDelayTooLong {
                got: 5_000,
                max: MAX_DISMISS_DELAY_MS
            })
        );

        let mut config = Config::default();
        config.hero.role_interval_ms = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroRoleInterval));
    }

    #[test]
    fn round_trips_through_toml() {
        let mut config = Config::default();
        config.theme.mode = ThemeMode::Dark;
        let text = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
