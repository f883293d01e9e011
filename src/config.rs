//! Configuration management

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,
    /// Display settings
    pub display: DisplayConfig,
    /// Sorting settings
    pub sorting: SortingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Show hidden files (starting with . on Unix)
    pub show_hidden: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self { show_hidden: true }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Listing mode: "brief" (marker + name) or "full" (permissions, owner, size)
    pub view_mode: String,
    /// Colorize directory names when stdout is a terminal
    pub color: bool,
    /// Marker printed in front of directory entries
    pub dir_marker: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            view_mode: "brief".to_string(),
            color: true,
            dir_marker: "[DIR]".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SortingConfig {
    /// Sort field: "name", "size", "modified", "unsorted"
    pub field: String,
    /// Sort direction: "ascending" or "descending"
    pub direction: String,
    /// Always show directories before files
    pub dirs_first: bool,
}

impl Default for SortingConfig {
    fn default() -> Self {
        Self {
            field: "name".to_string(),
            direction: "ascending".to_string(),
            dirs_first: true,
        }
    }
}

impl Config {
    /// Load configuration, writing a commented default file on first run.
    /// Any failure degrades to defaults with a warning on stderr; startup
    /// never fails because of the config file.
    pub fn load() -> Self {
        let Some(config_path) = config_file() else {
            eprintln!("Warning: Could not determine config directory");
            return Config::default();
        };

        if let Some(config_dir) = config_path.parent()
            && !config_dir.exists()
            && let Err(e) = fs::create_dir_all(config_dir)
        {
            eprintln!("Warning: Could not create config directory: {}", e);
            return Config::default();
        }

        if !config_path.exists()
            && let Err(e) = fs::write(&config_path, DEFAULT_CONFIG)
        {
            eprintln!("Warning: Could not create config file: {}", e);
            return Config::default();
        }

        match fs::read_to_string(&config_path) {
            Ok(content) => match toml_edit::de::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Warning: Could not parse config file: {}", e);
                    eprintln!("Using default configuration");
                    Config::default()
                }
            },
            Err(e) => {
                eprintln!("Warning: Could not read config file: {}", e);
                Config::default()
            }
        }
    }
}

/// Get the config directory path for the current platform
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "linux")]
    {
        // Linux: $XDG_CONFIG_HOME/fex or ~/.config/fex
        std::env::var("XDG_CONFIG_HOME")
            .ok()
            .map(PathBuf::from)
            .or_else(|| std::env::var("HOME").ok().map(|p| PathBuf::from(p).join(".config")))
            .map(|p| p.join("fex"))
    }

    #[cfg(target_os = "macos")]
    {
        // macOS: ~/.config/fex (consistent with other CLI tools)
        std::env::var("HOME")
            .ok()
            .map(|p| PathBuf::from(p).join(".config/fex"))
    }

    #[cfg(target_os = "windows")]
    {
        // Windows: %APPDATA%\fex
        std::env::var("APPDATA")
            .ok()
            .map(|p| PathBuf::from(p).join("fex"))
    }

    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        std::env::var("HOME").ok().map(|p| PathBuf::from(p).join(".config/fex"))
    }
}

/// Get the config file path
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|p| p.join("config.toml"))
}

const DEFAULT_CONFIG: &str = r##"# fex Configuration
# This file is auto-generated. Edit as needed.

[general]
# Show hidden files (starting with .)
show_hidden = true

[display]
# Listing mode: "brief" (marker + name) or "full" (permissions, owner, group, size)
view_mode = "brief"

# Colorize directory names when stdout is a terminal
color = true

# Marker printed in front of directory entries
dir_marker = "[DIR]"

[sorting]
# Sort field: "name", "size", "modified", "unsorted"
field = "name"

# Sort direction: "ascending" or "descending"
direction = "ascending"

# Always show directories before files
dirs_first = true
"##;
