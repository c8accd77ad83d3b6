//! Configuration for crewdeck
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/crewdeck/config.toml)
//! 3. Built-in defaults (lowest priority)
//!
//! Command-line flags are applied on top by `main`.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod deck;
mod logging;
mod serialization;


pub use deck::{DeckConfig, FileDeck};
pub use logging::{FileLogging, LogRotation, LoggingConfig};

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Theme used when nothing is configured
pub const DEFAULT_THEME: &str = "Nexus Dark";

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Roster file; `None` means the bundled sample roster
    pub roster: Option<PathBuf>,

    /// Theme name: "Nexus Dark", "Nexus Light", "Dracula", "Nord", ...
    pub theme: String,

    /// Use theme's background color (true) or terminal's default (false)
    pub use_theme_background: bool,

    /// Deck behavior (animation, mouse)
    pub deck: DeckConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roster: None,
            theme: DEFAULT_THEME.to_string(),
            use_theme_background: true,
            deck: DeckConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub roster: Option<String>,
    pub theme: Option<String>,
    pub use_theme_background: Option<bool>,

    /// Optional [deck] section
    pub deck: Option<FileDeck>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Config directory: ~/.config/crewdeck
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("crewdeck"))
    }

    /// Config file path: ~/.config/crewdeck/config.toml
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("config.toml"))
    }

    /// Roster looked up when none is configured: ~/.config/crewdeck/roster.toml
    pub fn default_roster_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("roster.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Config is optional
            }
        }

        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Parse the config file at `path`; a missing file means defaults
    pub(crate) fn read_file_config(path: &Path) -> Result<FileConfig> {
        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config file {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(e) => Err(e)
                .with_context(|| format!("Cannot read config file {}", path.display())),
        }
    }

    /// Load configuration: env > file > defaults
    ///
    /// A config file that exists but does not parse is an error rather than
    /// a silent fallback to defaults.
    pub fn load() -> Result<Self> {
        let file = match Self::config_path() {
            Some(path) => Self::read_file_config(&path)?,
            None => FileConfig::default(),
        };

        Ok(Self::from_sources(file, |key| std::env::var(key).ok()))
    }

    /// Merge a parsed config file with an environment lookup
    pub(crate) fn from_sources(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        // Roster: env > file > ~/.config/crewdeck/roster.toml (if present)
        let roster = env("CREWDECK_ROSTER")
            .or(file.roster)
            .map(PathBuf::from)
            .or_else(|| Self::default_roster_path().filter(|p| p.exists()));

        // Theme: env > file > default
        let theme = env("CREWDECK_THEME")
            .or(file.theme)
            .unwrap_or_else(|| DEFAULT_THEME.to_string());

        let use_theme_background = file.use_theme_background.unwrap_or(true);

        let deck = DeckConfig::from_file(file.deck);
        let mut logging = LoggingConfig::from_file(file.logging);

        // Log level: env > file > default
        if let Some(level) = env("CREWDECK_LOG") {
            logging.level = level;
        }

        Self {
            roster,
            theme,
            use_theme_background,
            deck,
            logging,
        }
    }
}
