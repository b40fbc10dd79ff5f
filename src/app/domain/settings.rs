use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::app::infrastructure::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FontChoice {
    Helvetica,
    Times,
    Courier,
}

/// Persisted reader preferences.
///
/// The active theme is intentionally absent: the palette resets to the
/// default on every launch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_font")]
    pub font: FontChoice,

    #[serde(default = "default_font_size")]
    pub font_size: u32,

    /// Overrides the content directory when no CLI argument is given.
    #[serde(default)]
    pub content_dir: Option<String>,
}

fn default_font() -> FontChoice {
    FontChoice::Helvetica
}

fn default_font_size() -> u32 {
    16
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            font: default_font(),
            font_size: default_font_size(),
            content_dir: None,
        }
    }
}

impl AppSettings {
    /// Load settings from disk, or create default if not exists
    pub fn load() -> Self {
        let config_path = Self::get_config_path();

        match fs::read_to_string(&config_path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    eprintln!("Failed to parse settings: {}. Using defaults.", e);
                    Self::default()
                }
            },
            Err(_) => {
                // File doesn't exist, use defaults
                let default = Self::default();
                // Try to save defaults for next time
                let _ = default.save();
                default
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<(), AppError> {
        let config_path = Self::get_config_path();

        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, json)?;

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("ferrisfolio");
        path.push("settings.json");
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.font, FontChoice::Helvetica);
        assert_eq!(settings.font_size, 16);
        assert!(settings.content_dir.is_none());
    }

    #[test]
    fn test_serialize_deserialize() {
        let settings = AppSettings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let loaded: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, loaded);
    }

    #[test]
    fn test_partial_config() {
        // Config from an older version missing new fields
        let json = r#"{"font_size": 20}"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.font_size, 20); // Should use file value
        assert_eq!(settings.font, FontChoice::Helvetica); // Should use default
    }

    #[test]
    fn test_no_theme_is_persisted() {
        // The theme resets every launch; the settings file must not
        // carry a palette field that would resurrect an old choice.
        let settings = AppSettings::default();
        let json = serde_json::to_string(&settings).unwrap();
        assert!(!json.to_lowercase().contains("theme"));
        assert!(!json.to_lowercase().contains("dark"));
    }

    #[test]
    fn test_content_dir_round_trip() {
        let settings = AppSettings {
            content_dir: Some("/home/user/site".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        let loaded: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded.content_dir.as_deref(), Some("/home/user/site"));
    }
}
