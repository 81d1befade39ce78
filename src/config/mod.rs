//! Configuration system for vimdrill.
//!
//! Configuration lives in a TOML file and is merged with command-line
//! arguments at startup. Missing or unreadable files fall back to the
//! defaults; a config problem should never stop a drill session.
//!
//! # Example
//!
//! ```
//! use vimdrill::config::Config;
//!
//! let config = Config::default();
//! assert_eq!(config.theme, "default-dark");
//! assert!(config.show_key_hints);
//!
//! let custom = Config {
//!     theme: "default-light".to_string(),
//!     ..Config::default()
//! };
//! assert!(custom.persist_progress);
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for the vimdrill application.
///
/// # Fields
///
/// * `theme` - Color scheme name (default: "default-dark")
/// * `show_key_hints` - Show the hint line for the active challenge (default: true)
/// * `persist_progress` - Save learning progress between sessions (default: true)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Color scheme name
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Show the hint line for the active challenge
    #[serde(default = "default_show_key_hints")]
    pub show_key_hints: bool,

    /// Save learning progress between sessions
    #[serde(default = "default_persist_progress")]
    pub persist_progress: bool,
}

/// Returns the default theme name.
fn default_theme() -> String {
    "default-dark".to_string()
}

/// Returns the default for showing key hints.
fn default_show_key_hints() -> bool {
    true
}

/// Returns the default for persisting progress.
fn default_persist_progress() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            show_key_hints: true,
            persist_progress: true,
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/vimdrill/config.toml` on all platforms.
    pub fn config_path() -> Option<std::path::PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("vimdrill");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or
    /// can't be read.
    pub fn load() -> Self {
        let config_path = match Self::config_path() {
            Some(path) => path,
            None => return Self::default(),
        };

        if !config_path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&config_path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|_| Self::default()),
            Err(_) => Self::default(),
        }
    }

    /// Saves configuration to the default config file.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, toml_string)?;

        Ok(())
    }
}
