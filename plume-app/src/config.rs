//! Output configuration for the plume binary
//!
//! Stores resolution, frame rate, and effect intensity as a simple
//! key=value file under the user config directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Render settings for the demo export
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub width: u32,
    pub height: u32,
    pub fps: f64,
    /// Intensity multiplier handed to both renderers
    pub intensity: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            fps: 30.0,
            intensity: 0.8,
        }
    }
}

impl Config {
    /// Load config from the default location
    ///
    /// Returns default config if the file doesn't exist or can't be
    /// parsed.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path()).unwrap_or_default()
    }

    /// Load config from a specific path
    pub fn load_from(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::parse(&content))
    }

    /// Save config to the default location
    pub fn save(&self) -> io::Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save config to a specific path
    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.serialize())
    }

    /// Get the default config file path
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("plume")
            .join("config.txt")
    }

    /// Parse config from simple key=value format
    fn parse(content: &str) -> Self {
        let mut config = Self::default();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let value = value.trim();
                match key.trim() {
                    "width" => {
                        if let Ok(v) = value.parse() {
                            config.width = v;
                        }
                    }
                    "height" => {
                        if let Ok(v) = value.parse() {
                            config.height = v;
                        }
                    }
                    "fps" => {
                        if let Ok(v) = value.parse::<f64>() {
                            if v > 0.0 {
                                config.fps = v;
                            }
                        }
                    }
                    "intensity" => {
                        if let Ok(v) = value.parse() {
                            config.intensity = v;
                        }
                    }
                    _ => {} // Ignore unknown keys
                }
            }
        }

        config
    }

    /// Serialize config to simple key=value format
    fn serialize(&self) -> String {
        format!(
            "# Plume configuration\nwidth={}\nheight={}\nfps={}\nintensity={}\n",
            self.width, self.height, self.fps, self.intensity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        let config = Config {
            width: 1920,
            height: 1080,
            fps: 60.0,
            intensity: 0.5,
        };
        assert_eq!(Config::parse(&config.serialize()), config);
    }

    #[test]
    fn test_junk_falls_back_to_defaults() {
        let config = Config::parse("width=abc\nfps=-5\nnonsense\n# comment\n");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_to_unwritable_path_reports_error() {
        let dir = std::env::temp_dir().join(format!("plume-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let blocker = dir.join("blocker");
        fs::write(&blocker, "x").unwrap();

        // Parent is a regular file, so the save must surface the error
        // for the caller to log.
        let target = blocker.join("config.txt");
        assert!(Config::default().save_to(&target).is_err());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_partial_override() {
        let config = Config::parse("height = 480\n");
        assert_eq!(config.height, 480);
        assert_eq!(config.width, Config::default().width);
    }
}
