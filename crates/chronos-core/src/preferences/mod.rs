//! Persisted skin and theme choices.
//!
//! A stored value always wins. Without one, the skin falls back to the
//! config default, then `flip`. The theme falls back to the config default,
//! then the terminal's `COLORFGBG` hint, then dark.

use tracing::{debug, warn};

use crate::config::DisplayConfig;
use crate::display::{SkinKind, Theme};
use crate::storage::{KeyValueStore, SKIN_KEY, StorageError, THEME_KEY};

/// Environment variable terminals use to advertise `fg;bg` palette indices.
pub const COLORFGBG_ENV: &str = "COLORFGBG";

/// The skin and theme in effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Preferences {
    pub skin: SkinKind,
    pub theme: Theme,
}

/// Resolve preferences from storage, config and host hints.
pub fn load_preferences<S: KeyValueStore + ?Sized>(
    store: &S,
    display: &DisplayConfig,
) -> Preferences {
    let host_hint = std::env::var(COLORFGBG_ENV).ok();
    resolve_preferences(store, display, host_hint.as_deref())
}

/// [`load_preferences`] with the host hint supplied by the caller.
pub fn resolve_preferences<S: KeyValueStore + ?Sized>(
    store: &S,
    display: &DisplayConfig,
    colorfgbg: Option<&str>,
) -> Preferences {
    let skin = stored::<SkinKind, _>(store, SKIN_KEY)
        .or_else(|| display.skin.as_deref().and_then(|s| s.parse().ok()))
        .unwrap_or_default();

    let theme = stored::<Theme, _>(store, THEME_KEY)
        .or_else(|| display.theme.as_deref().and_then(|t| t.parse().ok()))
        .or_else(|| colorfgbg.and_then(theme_from_colorfgbg))
        .unwrap_or_default();

    debug!(event = "core.preferences.load_completed", skin = %skin, theme = %theme);
    Preferences { skin, theme }
}

pub fn save_skin<S: KeyValueStore + ?Sized>(
    store: &mut S,
    skin: SkinKind,
) -> Result<(), StorageError> {
    store.set(SKIN_KEY, skin.as_str())?;
    debug!(event = "core.preferences.skin_saved", skin = %skin);
    Ok(())
}

pub fn save_theme<S: KeyValueStore + ?Sized>(
    store: &mut S,
    theme: Theme,
) -> Result<(), StorageError> {
    store.set(THEME_KEY, theme.as_str())?;
    debug!(event = "core.preferences.theme_saved", theme = %theme);
    Ok(())
}

/// Interpret `COLORFGBG` (`"fg;bg"` or `"fg;default;bg"`).
///
/// Background indices 0-6 and 8 are dark palette entries.
pub fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    Some(match bg {
        0..=6 | 8 => Theme::Dark,
        _ => Theme::Light,
    })
}

fn stored<T, S>(store: &S, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    S: KeyValueStore + ?Sized,
{
    match store.get(key) {
        Ok(Some(value)) => match value.parse() {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                warn!(event = "core.preferences.invalid_value", key = key, value = %value);
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            warn!(event = "core.preferences.read_failed", key = key, error = %e);
            None
        }
    }
}
