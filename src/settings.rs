//! User settings and preferences
//!
//! Read once at startup from a JSON file. Every field has a default, so a
//! partial file only overrides what it names.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable naming the settings file
pub const SETTINGS_ENV: &str = "ARCADE_DEMOS_SETTINGS";
/// Settings file looked up in the working directory
pub const SETTINGS_FILE: &str = "arcade-demos.json";

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    /// Maximum live particles for this preset
    pub fn max_particles(&self) -> usize {
        match self {
            QualityPreset::Low => 300,
            QualityPreset::Medium => 1000,
            QualityPreset::High => 4000,
        }
    }

    /// Whether to render the scrolling starfield
    pub fn starfield_enabled(&self) -> bool {
        !matches!(self, QualityPreset::Low)
    }
}

/// Which control scheme the shooter starts with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InputPreference {
    /// Keyboard, switching to pointer controls on the first touch
    #[default]
    Auto,
    Keyboard,
    Pointer,
}

/// Demo settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Graphics quality preset
    pub quality: QualityPreset,
    /// Particle effects (explosions, sparks, trails)
    pub particles: bool,
    /// Show FPS counter
    pub show_fps: bool,
    /// Control scheme override
    pub input: InputPreference,
    /// Fixed RNG seed; random per run when absent
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            particles: true,
            show_fps: true,
            input: InputPreference::Auto,
            seed: None,
        }
    }
}

impl Settings {
    /// Create settings from a quality preset
    pub fn from_preset(preset: QualityPreset) -> Self {
        Self {
            quality: preset,
            ..Self::default()
        }
    }

    /// Effective particle count cap
    pub fn max_particles(&self) -> usize {
        if !self.particles {
            0
        } else {
            self.quality.max_particles()
        }
    }

    /// Configured seed, or one drawn from the OS
    pub fn seed_or_random(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }

    /// Parse settings from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid settings JSON")
    }

    /// Read settings from a file; `Ok(None)` if it does not exist
    pub fn read(path: &Path) -> Result<Option<Self>> {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err).with_context(|| format!("failed to read {}", path.display()));
            }
        };
        Self::from_json(&json)
            .with_context(|| format!("failed to parse {}", path.display()))
            .map(Some)
    }

    /// Settings file location: `$ARCADE_DEMOS_SETTINGS` or `./arcade-demos.json`
    pub fn path() -> PathBuf {
        std::env::var_os(SETTINGS_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(SETTINGS_FILE))
    }

    /// Load settings, falling back to defaults
    ///
    /// A missing file is normal; an unreadable or malformed one is logged.
    pub fn load() -> Self {
        Self::load_from(&Self::path())
    }

    pub fn load_from(path: &Path) -> Self {
        match Self::read(path) {
            Ok(Some(settings)) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Ok(None) => {
                log::debug!("No settings file at {}, using defaults", path.display());
                Self::default()
            }
            Err(err) => {
                log::warn!("{err:#}; using default settings");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quality_caps() {
        assert_eq!(QualityPreset::Low.max_particles(), 300);
        assert_eq!(QualityPreset::Medium.max_particles(), 1000);
        assert_eq!(QualityPreset::High.max_particles(), 4000);
    }

    #[test]
    fn test_particles_off_means_zero_cap() {
        let settings = Settings {
            particles: false,
            ..Settings::from_preset(QualityPreset::High)
        };
        assert_eq!(settings.max_particles(), 0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{"quality": "high", "seed": 7}"#).unwrap();
        assert_eq!(settings.quality, QualityPreset::High);
        assert_eq!(settings.seed, Some(7));
        assert!(settings.particles);
        assert_eq!(settings.input, InputPreference::Auto);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Settings::from_json("{ not json").is_err());
        assert!(Settings::from_json(r#"{"quality": "ultra"}"#).is_err());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("arcade-demos-does-not-exist.json");
        assert!(Settings::read(&path).unwrap().is_none());
        assert_eq!(Settings::load_from(&path), Settings::default());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "arcade-demos-settings-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{"input": "pointer", "show_fps": false}"#).unwrap();
        let settings = Settings::load_from(&path);
        std::fs::remove_file(&path).ok();

        assert_eq!(settings.input, InputPreference::Pointer);
        assert!(!settings.show_fps);
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join(format!(
            "arcade-demos-bad-settings-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, "[1, 2").unwrap();
        let settings = Settings::load_from(&path);
        std::fs::remove_file(&path).ok();

        assert_eq!(settings, Settings::default());
    }
}
