//! Configuration type definitions.
//!
//! # Example Configuration
//!
//! ```toml
//! [display]
//! skin = "casio"
//! theme = "dark"
//!
//! [refresh]
//! interval_ms = 500
//! ```

use serde::{Deserialize, Serialize};

/// Main configuration loaded from TOML config files.
///
/// Project config values override user config values.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ChronosConfig {
    /// Skin, theme and color defaults
    #[serde(default)]
    pub display: DisplayConfig,

    /// Tick cadence and list reload settings
    #[serde(default)]
    pub refresh: RefreshConfig,

    /// List view formatting
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

/// Display defaults.
///
/// `skin` and `theme` only apply while no preference has been stored;
/// a stored choice always wins.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DisplayConfig {
    /// One of: flip, casio, nixie.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skin: Option<String>,

    /// One of: light, dark.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    /// ANSI colors in rendered output.
    /// Default: true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RefreshConfig {
    /// Milliseconds between recomputations of a mounted timer.
    /// Default: 1000ms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_ms: Option<u64>,

    /// Seconds between re-reads of the stored timer list in `watch`.
    /// Default: 2 seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reload_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DashboardConfig {
    /// chrono strftime pattern for list dates.
    /// Default: `%B %-d, %Y`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_format: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chronos_config_serialization() {
        let mut config = ChronosConfig::default();
        config.display.skin = Some("nixie".to_string());
        config.refresh.interval_ms = Some(250);

        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("skin = \"nixie\""));
        assert!(toml_str.contains("interval_ms = 250"));

        let parsed: ChronosConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.display.skin, Some("nixie".to_string()));
        assert_eq!(parsed.refresh.interval_ms, Some(250));
        assert!(parsed.display.theme.is_none());
    }

    #[test]
    fn test_display_config_deserialize() {
        let toml_str = r#"
skin = "casio"
color = false
"#;
        let display: DisplayConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(display.skin, Some("casio".to_string()));
        assert_eq!(display.color, Some(false));
        assert!(display.theme.is_none());
    }
}
