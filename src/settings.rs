//! Game settings and preferences
//!
//! Persisted separately from game state as a small JSON file next to the
//! executable's working directory.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Draw the score line and phase overlays
    pub show_hud: bool,
    /// Render stage letters opaque instead of translucent
    pub high_contrast: bool,
    /// Fixed session seed for reproducible runs (None = derive from time)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_hud: true,
            high_contrast: false,
            seed: None,
        }
    }
}

impl Settings {
    /// Settings file name
    pub const FILE_NAME: &'static str = "funsui-jump-settings.json";

    /// Load settings from `path`, falling back to defaults on any problem
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("settings file corrupt ({err}), using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no settings file, using defaults");
                Self::default()
            }
        }
    }

    /// Save settings to `path`
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)?;
        log::info!("settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let settings = Settings::load(Path::new("definitely-not-a-real-file.json"));
        assert!(settings.show_hud);
        assert!(!settings.high_contrast);
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn test_settings_round_trip() {
        let dir = std::env::temp_dir();
        let path = dir.join("funsui-jump-settings-test.json");

        let settings = Settings {
            show_hud: false,
            high_contrast: true,
            seed: Some(1234),
        };
        settings.save(&path).unwrap();

        let loaded = Settings::load(&path);
        assert!(!loaded.show_hud);
        assert!(loaded.high_contrast);
        assert_eq!(loaded.seed, Some(1234));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_corrupt_file_falls_back_to_defaults() {
        let dir = std::env::temp_dir();
        let path = dir.join("funsui-jump-settings-corrupt.json");
        std::fs::write(&path, "{ not json").unwrap();

        let loaded = Settings::load(&path);
        assert!(loaded.show_hud);

        let _ = std::fs::remove_file(&path);
    }
}
