//! # Configuration
//!
//! Centralizes the few tunable settings with a clear override hierarchy:
//! defaults → config file → env vars.
//!
//! Config lives at `<user-config-dir>/glow/config.toml` and is optional.
//! Menu definitions are not configurable; only styling and logging are.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GlowConfig {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ThemeConfig {
    pub header_color: Option<String>,
    pub show_help: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LogConfig {
    pub level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const APP_DIR: &str = "glow";
pub const LOG_LEVEL_ENV: &str = "GLOW_LOG";
pub const DEFAULT_HEADER_COLOR: &str = "#04B575";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub header_color: String,
    pub show_help: bool,
    pub log_level: LevelFilter,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve(&GlowConfig::default(), None).0
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid log level {value:?} from {origin}")]
    InvalidLevel { value: String, origin: &'static str },
    #[error("invalid header color {0:?}")]
    InvalidColor(String),
}

/// Where the file layer of the config came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Missing(PathBuf),
    UnknownDir,
}

#[derive(Debug, Default)]
pub struct LoadedConfig {
    pub config: GlowConfig,
    pub source: Option<ConfigSource>,
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `<user-config-dir>/glow/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
}

/// Load config from the default location.
///
/// A missing file (or an unknown config directory) is not an error and
/// yields `GlowConfig::default()`. Nothing is logged here: config is read
/// before the logger exists, so the outcome goes through [`report`].
pub fn load_config() -> Result<LoadedConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => Ok(LoadedConfig {
            config: GlowConfig::default(),
            source: Some(ConfigSource::UnknownDir),
        }),
    }
}

pub fn load_config_from(path: &Path) -> Result<LoadedConfig, ConfigError> {
    if !path.exists() {
        return Ok(LoadedConfig {
            config: GlowConfig::default(),
            source: Some(ConfigSource::Missing(path.to_path_buf())),
        });
    }

    let contents = fs::read_to_string(path)?;
    let config: GlowConfig = toml::from_str(&contents)?;
    Ok(LoadedConfig {
        config,
        source: Some(ConfigSource::File(path.to_path_buf())),
    })
}

// ============================================================================
// Resolution
// ============================================================================

/// Collapse defaults → config file → env vars into concrete values.
///
/// `env_log_level` is the raw value of `GLOW_LOG` (None = not set).
/// Unparseable levels fall through to the next layer and are returned
/// alongside the result.
pub fn resolve(
    config: &GlowConfig,
    env_log_level: Option<&str>,
) -> (ResolvedConfig, Vec<ConfigError>) {
    let mut rejected = Vec::new();
    let header_color = config
        .theme
        .header_color
        .clone()
        .unwrap_or_else(|| DEFAULT_HEADER_COLOR.to_string());

    let mut level_from = |raw: Option<&str>, origin: &'static str| {
        let raw = raw?;
        match raw.trim().parse::<LevelFilter>() {
            Ok(level) => Some(level),
            Err(_) => {
                rejected.push(ConfigError::InvalidLevel {
                    value: raw.to_string(),
                    origin,
                });
                None
            }
        }
    };
    // Both layers are checked so a bad value is reported even when shadowed
    let env_level = level_from(env_log_level, LOG_LEVEL_ENV);
    let file_level = level_from(config.log.level.as_deref(), "[log] level");
    let log_level = env_level.or(file_level).unwrap_or(DEFAULT_LOG_LEVEL);

    let resolved = ResolvedConfig {
        header_color,
        show_help: config.theme.show_help.unwrap_or(true),
        log_level,
    };
    (resolved, rejected)
}

/// Log how config loading went. Call once the logger is installed.
pub fn report(loaded: &Result<LoadedConfig, ConfigError>, rejected: &[ConfigError]) {
    match loaded {
        Ok(LoadedConfig { config, source }) => {
            match source {
                Some(ConfigSource::File(path)) => info!("Loaded config from {}", path.display()),
                Some(ConfigSource::Missing(path)) => {
                    info!("No config file at {}, using defaults", path.display())
                }
                Some(ConfigSource::UnknownDir) => {
                    warn!("Could not determine config directory, using default config")
                }
                None => {}
            }
            debug!("Config: {:?}", config);
        }
        Err(e) => warn!("Ignoring config file: {}", e),
    }
    for e in rejected {
        warn!("Ignoring {}", e);
    }
}
