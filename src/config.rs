//! Configuration management
//!
//! Settings live in `~/.config/finch-demo/config.toml` (or the platform
//! equivalent). Every section falls back to defaults, so a missing file or
//! a file with only some keys is fine. `FINCH_DEMO_CONFIG` points at a
//! different file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::clipboard::DEFAULT_CONFIRM_MS;
use crate::player::PlayerTiming;
use crate::scheduler::DEFAULT_START_DELAY_MS;
use crate::script::{DEFAULT_CHAR_INTERVAL_MS, STREAM_INTERVAL_MS};
use crate::theme::Theme;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "FINCH_DEMO_CONFIG";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub playback: PlaybackConfig,
    pub copy: CopyConfig,
    pub theme: ThemeConfig,
}

/// Demo playback timing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Pause before the first event
    pub start_delay_ms: u64,
    /// Typing interval for lines that don't set their own
    pub char_interval_ms: u64,
    /// Interval between streamed lines
    pub stream_interval_ms: u64,
    /// Playback speed multiplier
    pub speed: f64,
    /// Script file to play instead of the built-in demo
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script: Option<PathBuf>,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            start_delay_ms: DEFAULT_START_DELAY_MS,
            char_interval_ms: DEFAULT_CHAR_INTERVAL_MS,
            stream_interval_ms: STREAM_INTERVAL_MS,
            speed: 1.0,
            script: None,
        }
    }
}

/// Install command copy settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CopyConfig {
    /// Text placed on the clipboard by `finch-demo copy`
    pub install_command: String,
    /// How long the button reads COPIED!
    pub confirm_ms: u64,
}

impl Default for CopyConfig {
    fn default() -> Self {
        Self {
            install_command: "cargo install finch".to_string(),
            confirm_ms: DEFAULT_CONFIRM_MS,
        }
    }
}

/// Color theme selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Preset name: finch, classic or ocean
    pub name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "finch".to_string(),
        }
    }
}

impl Config {
    /// Load the config file, or defaults if it doesn't exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load a specific config file, or defaults if it doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Write the config file, creating its directory if needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }

    /// Location of the config file.
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("finch-demo").join("config.toml"))
    }

    /// Player timing derived from the playback section.
    ///
    /// Both intervals are at least 1 ms so every typed character and
    /// streamed line gets its own frame.
    pub fn timing(&self) -> PlayerTiming {
        PlayerTiming {
            default_char_interval: Duration::from_millis(self.playback.char_interval_ms.max(1)),
            stream_interval: Duration::from_millis(self.playback.stream_interval_ms.max(1)),
            speed: 1.0,
        }
        .with_speed(self.playback.speed)
    }

    pub fn start_delay(&self) -> Duration {
        Duration::from_millis(self.playback.start_delay_ms)
    }

    pub fn confirm_duration(&self) -> Duration {
        Duration::from_millis(self.copy.confirm_ms)
    }

    /// The configured theme, falling back to the default for unknown names.
    pub fn theme(&self) -> Theme {
        Theme::by_name(&self.theme.name).unwrap_or_else(|| {
            tracing::warn!(name = %self.theme.name, "unknown theme, using default");
            Theme::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_site_timing() {
        let config = Config::default();
        assert_eq!(config.start_delay(), Duration::from_millis(900));
        assert_eq!(config.confirm_duration(), Duration::from_millis(2200));
        assert_eq!(config.timing(), PlayerTiming::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config: Config = toml::from_str("[playback]\nspeed = 2.0\n").unwrap();
        assert_eq!(config.playback.speed, 2.0);
        assert_eq!(config.playback.start_delay_ms, 900);
        assert_eq!(config.copy, CopyConfig::default());
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn invalid_file_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[playback\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("config.toml"));
    }

    #[test]
    fn toml_round_trip() {
        let mut config = Config::default();
        config.copy.install_command = "brew install finch".to_string();
        config.theme.name = "ocean".to_string();

        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn timing_applies_speed_and_intervals() {
        let config: Config =
            toml::from_str("[playback]\nspeed = 4.0\nchar_interval_ms = 40\n").unwrap();
        let timing = config.timing();
        assert_eq!(timing.speed, 4.0);
        assert_eq!(timing.char_interval(None), Duration::from_millis(10));
    }

    #[test]
    fn zero_intervals_are_clamped() {
        let config: Config =
            toml::from_str("[playback]\nchar_interval_ms = 0\nstream_interval_ms = 0\n").unwrap();
        let timing = config.timing();
        assert_eq!(timing.char_interval(None), Duration::from_millis(1));
        assert_eq!(timing.stream_interval(), Duration::from_millis(1));
    }

    #[test]
    fn unknown_theme_falls_back_to_default() {
        let mut config = Config::default();
        config.theme.name = "neon".to_string();
        assert_eq!(config.theme(), Theme::default());
    }
}
