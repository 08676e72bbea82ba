//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.glassnotes/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::store::DEFAULT_STORAGE_KEY;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NotesConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub data_dir: Option<PathBuf>,
    pub storage_key: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UiConfig {
    pub clear_delay_ms: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_CLEAR_DELAY_MS: u64 = 300;
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;
const APP_DIR: &str = ".glassnotes";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub data_dir: PathBuf,
    pub storage_key: String,
    pub clear_delay_ms: u64,
    pub log_level: LevelFilter,
}

/// Values taken from command-line flags. `None` means not given.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub data_dir: Option<PathBuf>,
    pub storage_key: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.glassnotes/`.
pub fn app_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(APP_DIR))
}

/// Returns the path to `~/.glassnotes/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    app_dir().map(|d| d.join("config.toml"))
}

/// Where the settings came from. Loading happens before the logger exists,
/// so the outcome is kept and logged once logging is up.
#[derive(Debug)]
pub enum ConfigOrigin {
    File(PathBuf),
    Generated(PathBuf),
    GenerateFailed(PathBuf, std::io::Error),
    NoHomeDir,
}

#[derive(Debug)]
pub struct LoadedConfig {
    pub config: NotesConfig,
    pub origin: ConfigOrigin,
}

impl LoadedConfig {
    pub fn log(&self) {
        match &self.origin {
            ConfigOrigin::File(path) => info!("Loaded config from {}", path.display()),
            ConfigOrigin::Generated(path) => {
                info!("No config file found, generated default at {}", path.display())
            }
            ConfigOrigin::GenerateFailed(path, e) => {
                warn!("Failed to write default config to {}: {}", path.display(), e)
            }
            ConfigOrigin::NoHomeDir => {
                warn!("Could not determine home directory, using default config")
            }
        }
        if let Some(level) = &self.config.general.log_level
            && level.parse::<LevelFilter>().is_err()
        {
            warn!("Unknown log level '{}', using {}", level, DEFAULT_LOG_LEVEL);
        }
        debug!("Config: {:?}", self.config);
    }
}

/// Load config from `~/.glassnotes/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `NotesConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<LoadedConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => Ok(LoadedConfig {
            config: NotesConfig::default(),
            origin: ConfigOrigin::NoHomeDir,
        }),
    }
}

pub fn load_config_from(path: &Path) -> Result<LoadedConfig, ConfigError> {
    if !path.exists() {
        let origin = match generate_default_config(path) {
            Ok(()) => ConfigOrigin::Generated(path.to_path_buf()),
            Err(e) => ConfigOrigin::GenerateFailed(path.to_path_buf(), e),
        };
        return Ok(LoadedConfig {
            config: NotesConfig::default(),
            origin,
        });
    }

    let contents = fs::read_to_string(path)?;
    let config: NotesConfig = toml::from_str(&contents)?;
    Ok(LoadedConfig {
        config,
        origin: ConfigOrigin::File(path.to_path_buf()),
    })
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# Glass Notes Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# data_dir = "/home/me/.glassnotes"   # Or set GLASSNOTES_DATA_DIR
# storage_key = "glass-notes-app-data" # Or set GLASSNOTES_STORAGE_KEY
# log_level = "debug"                 # "off", "error", "warn", "info", "debug", "trace"

# [ui]
# clear_delay_ms = 300                # Delay before a closed form is wiped
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, DEFAULT_CONFIG_CONTENT)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &NotesConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Data dir: CLI → env → config → ~/.glassnotes → ./.glassnotes
    let data_dir = cli
        .data_dir
        .clone()
        .or_else(|| std::env::var_os("GLASSNOTES_DATA_DIR").map(PathBuf::from))
        .or_else(|| config.general.data_dir.clone())
        .or_else(app_dir)
        .unwrap_or_else(|| PathBuf::from(APP_DIR));

    // Storage key: CLI → env → config → default
    let storage_key = cli
        .storage_key
        .clone()
        .or_else(|| std::env::var("GLASSNOTES_STORAGE_KEY").ok())
        .or_else(|| config.general.storage_key.clone())
        .unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_string());

    ResolvedConfig {
        data_dir,
        storage_key,
        clear_delay_ms: config.ui.clear_delay_ms.unwrap_or(DEFAULT_CLEAR_DELAY_MS),
        log_level: resolve_log_level(config.general.log_level.as_deref()),
    }
}

fn resolve_log_level(level: Option<&str>) -> LevelFilter {
    match level {
        None => DEFAULT_LOG_LEVEL,
        Some(s) => s.parse().unwrap_or(DEFAULT_LOG_LEVEL),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_sparse() {
        let config = NotesConfig::default();
        assert!(config.general.data_dir.is_none());
        assert!(config.ui.clear_delay_ms.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve(&NotesConfig::default(), &CliOverrides::default());
        assert_eq!(resolved.clear_delay_ms, DEFAULT_CLEAR_DELAY_MS);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = NotesConfig {
            general: GeneralConfig {
                data_dir: Some(PathBuf::from("/tmp/notes")),
                storage_key: Some("work".to_string()),
                log_level: Some("warn".to_string()),
            },
            ui: UiConfig {
                clear_delay_ms: Some(0),
            },
        };
        let cli = CliOverrides::default();
        let resolved = resolve(&config, &cli);
        assert_eq!(resolved.clear_delay_ms, 0);
        assert_eq!(resolved.log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = NotesConfig {
            general: GeneralConfig {
                data_dir: Some(PathBuf::from("/from/config")),
                storage_key: Some("from-config".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            data_dir: Some(PathBuf::from("/from/cli")),
            storage_key: Some("from-cli".to_string()),
        };
        let resolved = resolve(&config, &cli);
        assert_eq!(resolved.data_dir, PathBuf::from("/from/cli"));
        assert_eq!(resolved.storage_key, "from-cli");
    }

    #[test]
    fn test_unknown_log_level_falls_back() {
        assert_eq!(resolve_log_level(Some("chatty")), DEFAULT_LOG_LEVEL);
        assert_eq!(resolve_log_level(Some("info")), LevelFilter::Info);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
data_dir = "/srv/notes"
storage_key = "glass-notes-app-data"
log_level = "info"

[ui]
clear_delay_ms = 150
"#;
        let config: NotesConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.data_dir, Some(PathBuf::from("/srv/notes")));
        assert_eq!(config.general.storage_key.as_deref(), Some("glass-notes-app-data"));
        assert_eq!(config.ui.clear_delay_ms, Some(150));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing, everything else stays default
        let toml_str = r#"
[ui]
clear_delay_ms = 0
"#;
        let config: NotesConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.ui.clear_delay_ms, Some(0));
        assert!(config.general.storage_key.is_none());
    }

    #[test]
    fn test_generated_default_parses_as_empty() {
        let config: NotesConfig = toml::from_str(DEFAULT_CONFIG_CONTENT).unwrap();
        assert!(config.general.data_dir.is_none());
        assert!(config.general.log_level.is_none());
    }

    #[test]
    fn test_missing_file_generates_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let loaded = load_config_from(&path).unwrap();
        assert!(loaded.config.general.storage_key.is_none());
        assert!(matches!(loaded.origin, ConfigOrigin::Generated(_)));
        assert!(path.exists());
    }

    #[test]
    fn test_unwritable_default_is_reported_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let path = blocker.join("config.toml");

        let loaded = load_config_from(&path).unwrap();
        assert!(matches!(loaded.origin, ConfigOrigin::GenerateFailed(..)));
        assert!(loaded.config.general.data_dir.is_none());
    }

    #[test]
    fn test_existing_file_origin() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[ui]\nclear_delay_ms = 10\n").unwrap();

        let loaded = load_config_from(&path).unwrap();
        assert!(matches!(&loaded.origin, ConfigOrigin::File(p) if p == &path));
        assert_eq!(loaded.config.ui.clear_delay_ms, Some(10));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[general\nstorage_key = ").unwrap();
        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));
    }
}
