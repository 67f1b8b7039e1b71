//! Application settings persistence
//!
//! Handles saving and loading user preferences.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Display and interface settings
    pub display: DisplaySettings,
    /// Gauge settings
    #[serde(default)]
    pub gauge: GaugeSettings,
}

/// Display-related settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Dark mode enabled
    pub dark_mode: bool,
    /// Reduce animation frame rate to save power
    #[serde(default)]
    pub power_saving_mode: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            power_saving_mode: false,
        }
    }
}

/// Gauge-related settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GaugeSettings {
    /// Last score shown, restored on startup
    #[serde(default = "default_score")]
    pub last_score: f32,
}

fn default_score() -> f32 {
    72.0
}

impl Default for GaugeSettings {
    fn default() -> Self {
        Self {
            last_score: default_score(),
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "riskdial", "Riskdial")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        Self::file_path()
            .and_then(|path| Self::load_from_file(&path).ok())
            .unwrap_or_default()
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(path) = Self::file_path() {
            self.save_to_file(&path)
        } else {
            Err(SettingsError::Io(
                "Could not determine config directory".to_string(),
            ))
        }
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.display.dark_mode);
        assert!(!settings.display.power_saving_mode);
        assert_eq!(settings.gauge.last_score, 72.0);
    }

    #[test]
    fn test_roundtrip() {
        let path = std::env::temp_dir().join("riskdial-settings-roundtrip.json");

        let mut settings = Settings::default();
        settings.display.dark_mode = false;
        settings.gauge.last_score = 37.0;

        settings.save_to_file(&path).unwrap();
        let loaded = Settings::load_from_file(&path).unwrap();
        assert!(!loaded.display.dark_mode);
        assert_eq!(loaded.gauge.last_score, 37.0);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_missing_fields_fall_back() {
        // Older settings files without the gauge section still load
        let parsed: Settings = serde_json::from_str(r#"{"display":{"dark_mode":false}}"#).unwrap();
        assert!(!parsed.display.dark_mode);
        assert!(!parsed.display.power_saving_mode);
        assert_eq!(parsed.gauge.last_score, 72.0);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let path = std::env::temp_dir().join("riskdial-settings-corrupt.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(
            Settings::load_from_file(&path),
            Err(SettingsError::Parse(_))
        ));

        let _ = std::fs::remove_file(&path);
    }
}
