//! Configuration validation.

use chrono::format::{Item, StrftimeItems};

use crate::config::types::ChronosConfig;
use crate::display::{SkinKind, Theme};
use crate::errors::ConfigError;

pub const INTERVAL_MS_RANGE: std::ops::RangeInclusive<u64> = 100..=60_000;
pub const RELOAD_SECS_RANGE: std::ops::RangeInclusive<u64> = 1..=3600;

/// Validate the configuration.
///
/// # Errors
///
/// Returns `InvalidSkin`/`InvalidTheme` for unknown names and
/// `InvalidConfiguration` for out-of-range numbers or an unusable date format.
pub fn validate_config(config: &ChronosConfig) -> Result<(), ConfigError> {
    if let Some(skin) = &config.display.skin
        && skin.parse::<SkinKind>().is_err()
    {
        return Err(ConfigError::InvalidSkin { skin: skin.clone() });
    }

    if let Some(theme) = &config.display.theme
        && theme.parse::<Theme>().is_err()
    {
        return Err(ConfigError::InvalidTheme {
            theme: theme.clone(),
        });
    }

    if let Some(ms) = config.refresh.interval_ms
        && !INTERVAL_MS_RANGE.contains(&ms)
    {
        return Err(ConfigError::InvalidConfiguration {
            message: format!(
                "refresh.interval_ms must be between {} and {}, got {}",
                INTERVAL_MS_RANGE.start(),
                INTERVAL_MS_RANGE.end(),
                ms
            ),
        });
    }

    if let Some(secs) = config.refresh.reload_secs
        && !RELOAD_SECS_RANGE.contains(&secs)
    {
        return Err(ConfigError::InvalidConfiguration {
            message: format!(
                "refresh.reload_secs must be between {} and {}, got {}",
                RELOAD_SECS_RANGE.start(),
                RELOAD_SECS_RANGE.end(),
                secs
            ),
        });
    }

    if let Some(format) = &config.dashboard.date_format
        && (format.is_empty() || StrftimeItems::new(format).any(|item| matches!(item, Item::Error)))
    {
        return Err(ConfigError::InvalidConfiguration {
            message: format!("dashboard.date_format '{}' is not a valid strftime pattern", format),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&ChronosConfig::default()).is_ok());
    }

    #[test]
    fn test_unknown_skin_rejected() {
        let mut config = ChronosConfig::default();
        config.display.skin = Some("sundial".to_string());
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSkin { ref skin } if skin == "sundial"));
    }

    #[test]
    fn test_skin_alias_accepted() {
        let mut config = ChronosConfig::default();
        config.display.skin = Some("lcd".to_string());
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_unknown_theme_rejected() {
        let mut config = ChronosConfig::default();
        config.display.theme = Some("sepia".to_string());
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::InvalidTheme { .. })
        ));
    }

    #[test]
    fn test_interval_bounds() {
        let mut config = ChronosConfig::default();
        config.refresh.interval_ms = Some(100);
        assert!(validate_config(&config).is_ok());
        config.refresh.interval_ms = Some(60_000);
        assert!(validate_config(&config).is_ok());

        config.refresh.interval_ms = Some(99);
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("refresh.interval_ms"));

        config.refresh.interval_ms = Some(60_001);
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_reload_secs_zero_rejected() {
        let mut config = ChronosConfig::default();
        config.refresh.reload_secs = Some(0);
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_bad_date_format_rejected() {
        let mut config = ChronosConfig::default();
        config.dashboard.date_format = Some("%Y-%Q".to_string());
        assert!(validate_config(&config).is_err());

        config.dashboard.date_format = Some("%d/%m/%Y".to_string());
        assert!(validate_config(&config).is_ok());
    }
}
