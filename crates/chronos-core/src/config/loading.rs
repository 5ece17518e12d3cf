//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `<data dir>/config.toml` (global user preferences)
//! 3. **Project config** - `./.chronos/config.toml` (project-specific overrides)
//! 4. **CLI arguments** - Command-line flags (highest priority)

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::types::{ChronosConfig, DashboardConfig, DisplayConfig, RefreshConfig};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;
use crate::storage::data_dir;

pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const PROJECT_CONFIG_DIR: &str = ".chronos";

/// Load configuration from the hierarchy of config files.
///
/// Loads and merges configuration from:
/// 1. Default values
/// 2. User config (`<data dir>/config.toml`)
/// 3. Project config (`./.chronos/config.toml`)
///
/// # Errors
///
/// Returns an error if a file exists but cannot be read or parsed, or if
/// validation fails. Missing config files are not errors.
pub fn load_hierarchy() -> Result<ChronosConfig, Box<dyn std::error::Error>> {
    let project_dir = std::env::current_dir()?.join(PROJECT_CONFIG_DIR);
    Ok(load_hierarchy_from(&data_dir(), &project_dir)?)
}

/// Load and merge `<user_dir>/config.toml` then `<project_dir>/config.toml`.
pub fn load_hierarchy_from(
    user_dir: &Path,
    project_dir: &Path,
) -> Result<ChronosConfig, ConfigError> {
    let mut config = ChronosConfig::default();

    for path in [user_dir.join(CONFIG_FILE_NAME), project_dir.join(CONFIG_FILE_NAME)] {
        if let Some(file_config) = load_config_file(&path)? {
            tracing::debug!(event = "core.config.file_loaded", path = %path.display());
            config = merge_configs(config, file_config);
        }
    }

    validate_config(&config)?;

    Ok(config)
}

/// Load a configuration file. A missing file is `Ok(None)`.
pub fn load_config_file(path: &PathBuf) -> Result<Option<ChronosConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(ConfigError::IoError { source: e }),
    };

    toml::from_str(&content)
        .map(Some)
        .map_err(|e| ConfigError::ConfigParseError {
            message: format!("'{}': {}", path.display(), e),
        })
}

/// Merge two configurations, with override_config taking precedence.
///
/// Override values replace base values only where present.
pub fn merge_configs(base: ChronosConfig, override_config: ChronosConfig) -> ChronosConfig {
    ChronosConfig {
        display: DisplayConfig {
            skin: override_config.display.skin.or(base.display.skin),
            theme: override_config.display.theme.or(base.display.theme),
            color: override_config.display.color.or(base.display.color),
        },
        refresh: RefreshConfig {
            interval_ms: override_config
                .refresh
                .interval_ms
                .or(base.refresh.interval_ms),
            reload_secs: override_config
                .refresh
                .reload_secs
                .or(base.refresh.reload_secs),
        },
        dashboard: DashboardConfig {
            date_format: override_config
                .dashboard
                .date_format
                .or(base.dashboard.date_format),
        },
    }
}
