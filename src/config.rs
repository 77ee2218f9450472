//! Configuration system using TOML files.
//!
//! Config is stored in the OS-standard config directory:
//! - Windows: %APPDATA%\album-smith\config.toml
//! - macOS: ~/Library/Application Support/album-smith/config.toml
//! - Linux: ~/.config/album-smith/config.toml
//!
//! The config file is human-readable and editable. Settings are loaded at
//! startup; classifier aliases and title pools live here so the pure
//! generation modules stay free of hard-wired control flow.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::classify::GenreClassifier;
use crate::model::GenreTag;
use crate::titles::{TitleGenerator, TitlePools};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Generation defaults
    pub generation: GenerationConfig,

    /// Storage paths (cache, history)
    pub storage: StorageConfig,

    /// Metadata provider settings
    pub lookup: LookupConfig,

    /// Extra genre aliases for the classifier
    pub vocabulary: VocabularyConfig,

    /// Title pool overrides; absent means built-in pools
    pub titles: Option<TitlePools>,
}

/// Defaults applied when the generate command omits a flag
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Track count when --tracks is not given
    pub default_track_count: u32,

    /// Theme when neither --theme nor a preset supplies one
    pub default_theme: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            default_track_count: 8,
            default_theme: "freedom".to_string(),
        }
    }
}

/// Where the cache and history files live (empty = OS defaults)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Artist lookup cache file
    pub cache_path: Option<PathBuf>,

    /// Album history log file
    pub history_path: Option<PathBuf>,
}

/// Metadata provider settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// Override the provider base URL (testing, proxies)
    pub base_url: Option<String>,
}

/// Extra classifier aliases: raw genre string -> vocabulary tag name
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyConfig {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub aliases: BTreeMap<String, String>,
}

impl Config {
    /// Resolved path of the artist lookup cache file.
    pub fn cache_path(&self) -> PathBuf {
        self.storage.cache_path.clone().unwrap_or_else(|| {
            dirs::cache_dir()
                .unwrap_or_else(|| PathBuf::from(".cache"))
                .join("album-smith")
                .join("artists.json")
        })
    }

    /// Resolved path of the history log file.
    pub fn history_path(&self) -> PathBuf {
        self.storage.history_path.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from(".data"))
                .join("album-smith")
                .join("history.jsonl")
        })
    }

    /// Build the classifier: built-in table plus config aliases.
    ///
    /// Aliases naming an unrecognized tag are skipped with a warning.
    pub fn classifier(&self) -> GenreClassifier {
        let mut extras: Vec<(&str, GenreTag)> = Vec::new();
        for (alias, tag_name) in &self.vocabulary.aliases {
            match tag_name.parse::<GenreTag>() {
                Ok(tag) => extras.push((alias, tag)),
                Err(e) => {
                    tracing::warn!(alias = %alias, error = %e, "Ignoring config alias with unknown tag");
                }
            }
        }
        GenreClassifier::with_aliases(extras)
    }

    /// Build the title generator, honoring pool overrides.
    pub fn title_generator(&self) -> TitleGenerator {
        match &self.titles {
            Some(pools) => TitleGenerator::with_pools(pools.clone()),
            None => TitleGenerator::new(),
        }
    }
}

// ============================================================================
// Config File Operations
// ============================================================================

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("album-smith"))
}

/// Get the full path to the config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration from disk
///
/// Returns default config if file doesn't exist or can't be parsed.
/// Logs warnings but doesn't fail - we always return a usable config.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        tracing::warn!("Could not determine config directory, using defaults");
        return Config::default();
    };

    if !path.exists() {
        tracing::debug!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }

    match std::fs::read_to_string(&path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                tracing::info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::error!("Failed to parse config file {:?}: {}", path, e);
                tracing::warn!("Using default configuration");
                Config::default()
            }
        },
        Err(e) => {
            tracing::error!("Failed to read config file {:?}: {}", path, e);
            Config::default()
        }
    }
}

/// Save configuration to disk
///
/// Creates the config directory if it doesn't exist.
pub fn save(config: &Config) -> Result<(), ConfigError> {
    let dir = config_dir().ok_or(ConfigError::NoConfigDir)?;
    let path = dir.join("config.toml");

    // Ensure directory exists
    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::CreateDir(dir.clone(), e))?;

    // Serialize to pretty TOML
    let contents = toml::to_string_pretty(config).map_err(ConfigError::Serialize)?;

    // Write atomically (write to temp, then rename)
    let temp_path = path.with_extension("toml.tmp");
    std::fs::write(&temp_path, &contents).map_err(|e| ConfigError::Write(temp_path.clone(), e))?;
    std::fs::rename(&temp_path, &path)
        .map_err(|e| ConfigError::Rename(temp_path, path.clone(), e))?;

    tracing::info!("Saved config to {:?}", path);
    Ok(())
}

// ============================================================================
// Error Types
// ============================================================================

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to create config directory {0}: {1}")]
    CreateDir(PathBuf, std::io::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(toml::ser::Error),

    #[error("Failed to write config to {0}: {1}")]
    Write(PathBuf, std::io::Error),

    #[error("Failed to rename temp file {0} to {1}: {2}")]
    Rename(PathBuf, PathBuf, std::io::Error),
}

// ============================================================================
// Tests
// ============================================================================
