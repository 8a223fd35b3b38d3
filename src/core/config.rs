//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.vitrine/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::node::ROOT_ID;
use crate::core::path::DEFAULT_ROOT_TITLE;
use crate::core::view::{DEFAULT_DESCRIPTION_LIMIT, DEFAULT_MAX_CARD_TAGS, DisplayLimits};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct VitrineConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub data_file: Option<String>,
    pub start_path: Option<String>,
    pub root_title: Option<String>,
    pub loading_delay_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub description_limit: Option<usize>,
    pub max_card_tags: Option<usize>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOADING_DELAY_MS: u64 = 300;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// `None` means the bundled demo catalog.
    pub data_file: Option<PathBuf>,
    pub start_path: String,
    pub root_title: String,
    pub loading_delay: Duration,
    pub limits: DisplayLimits,
}

/// Values given on the command line. `None` = flag not specified.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub data_file: Option<PathBuf>,
    pub start_path: Option<String>,
    pub loading_delay_ms: Option<u64>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.vitrine/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".vitrine").join("config.toml"))
}

/// Load config from `~/.vitrine/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `VitrineConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<VitrineConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(VitrineConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(VitrineConfig::default());
    }

    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<VitrineConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: VitrineConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Vitrine Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# data_file = "catalog.json"         # Or set VITRINE_DATA; omit for the demo catalog
# start_path = "root"                # Node id to open on startup
# root_title = "Home"                # First breadcrumb entry
# loading_delay_ms = 300             # Or set VITRINE_DELAY_MS; 0 disables

# [display]
# description_limit = 80             # Characters shown on a card
# max_card_tags = 3
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &VitrineConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Data file: CLI → env → config → bundled demo
    let data_file = cli
        .data_file
        .clone()
        .or_else(|| std::env::var("VITRINE_DATA").ok().map(PathBuf::from))
        .or_else(|| config.general.data_file.as_ref().map(PathBuf::from));

    // Start path: CLI → config → root
    let start_path = cli
        .start_path
        .clone()
        .or_else(|| config.general.start_path.clone())
        .unwrap_or_else(|| ROOT_ID.to_string());

    // Delay: CLI → env → config → default
    let loading_delay_ms = cli
        .loading_delay_ms
        .or_else(|| {
            std::env::var("VITRINE_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
        })
        .or(config.general.loading_delay_ms)
        .unwrap_or(DEFAULT_LOADING_DELAY_MS);

    ResolvedConfig {
        data_file,
        start_path,
        root_title: config
            .general
            .root_title
            .clone()
            .unwrap_or_else(|| DEFAULT_ROOT_TITLE.to_string()),
        loading_delay: Duration::from_millis(loading_delay_ms),
        limits: DisplayLimits {
            description_limit: config
                .display
                .description_limit
                .unwrap_or(DEFAULT_DESCRIPTION_LIMIT),
            max_card_tags: config
                .display
                .max_card_tags
                .unwrap_or(DEFAULT_MAX_CARD_TAGS),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = VitrineConfig::default();
        assert!(config.general.data_file.is_none());
        assert!(config.display.max_card_tags.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = VitrineConfig::default();
        let resolved = resolve(&config, &CliOverrides::default());
        assert_eq!(resolved.start_path, ROOT_ID);
        assert_eq!(resolved.root_title, "Home");
        assert_eq!(resolved.limits, DisplayLimits::default());
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = VitrineConfig {
            general: GeneralConfig {
                data_file: None,
                start_path: Some("stamps".to_string()),
                root_title: Some("Главная".to_string()),
                loading_delay_ms: None,
            },
            display: DisplayConfig {
                description_limit: Some(40),
                max_card_tags: Some(1),
            },
        };
        let resolved = resolve(&config, &CliOverrides::default());
        assert_eq!(resolved.start_path, "stamps");
        assert_eq!(resolved.root_title, "Главная");
        assert_eq!(resolved.limits.description_limit, 40);
        assert_eq!(resolved.limits.max_card_tags, 1);
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = VitrineConfig {
            general: GeneralConfig {
                data_file: Some("from-config.json".to_string()),
                start_path: Some("stamps".to_string()),
                loading_delay_ms: Some(900),
                ..Default::default()
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            data_file: Some(PathBuf::from("from-cli.json")),
            start_path: Some("menu".to_string()),
            loading_delay_ms: Some(0),
        };
        let resolved = resolve(&config, &cli);
        assert_eq!(resolved.data_file, Some(PathBuf::from("from-cli.json")));
        assert_eq!(resolved.start_path, "menu");
        assert!(resolved.loading_delay.is_zero());
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
data_file = "catalog.json"
start_path = "menu-lunch"
root_title = "Start"
loading_delay_ms = 150

[display]
description_limit = 60
max_card_tags = 2
"#;
        let config: VitrineConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.data_file.as_deref(), Some("catalog.json"));
        assert_eq!(config.general.loading_delay_ms, Some(150));
        assert_eq!(config.display.max_card_tags, Some(2));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing; everything else stays default
        let toml_str = r#"
[display]
max_card_tags = 5
"#;
        let config: VitrineConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.display.max_card_tags, Some(5));
        assert!(config.general.root_title.is_none());
        assert!(config.display.description_limit.is_none());
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[general]\nroot_title = \"Catalog\"\n").unwrap();
        let config = load_config_from(&path).unwrap();
        assert_eq!(config.general.root_title.as_deref(), Some("Catalog"));
    }

    #[test]
    fn test_malformed_config_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[general\nroot_title = 1").unwrap();
        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));
    }
}
