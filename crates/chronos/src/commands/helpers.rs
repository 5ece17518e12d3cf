use std::io::IsTerminal;

use clap::ArgMatches;
use tracing::warn;

use chronos_core::config::ChronosConfig;
use chronos_core::display::{Palette, SkinKind};
use chronos_core::preferences::Preferences;
use chronos_core::{CoreStore, FileStore, TimerId};

/// Load config, falling back to defaults with a visible warning.
pub fn load_config_with_warning() -> ChronosConfig {
    match ChronosConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.chronos/config.toml and ./.chronos/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            ChronosConfig::default()
        }
    }
}

/// Open the controller over the default data directory, reporting a
/// corrupt timer list on stderr.
pub fn open_store(config: &ChronosConfig) -> CoreStore<FileStore> {
    let store = CoreStore::open(FileStore::open_default(), &config.display);
    if let Some(load_error) = &store.state().load_error {
        eprintln!("Warning: {}", load_error);
    }
    store
}

pub fn parse_timer_id(matches: &ArgMatches) -> Result<TimerId, Box<dyn std::error::Error>> {
    let raw = matches
        .get_one::<String>("id")
        .ok_or("Timer id argument is required")?;
    raw.parse::<TimerId>()
        .map_err(|_| format!("Invalid timer id '{}'. Ids are numbers, see 'chronos list'.", raw).into())
}

/// `--skin` when given, otherwise the saved preference.
pub fn skin_from_matches(matches: &ArgMatches, preferences: &Preferences) -> SkinKind {
    matches
        .get_one::<String>("skin")
        .and_then(|s| s.parse().ok())
        .unwrap_or(preferences.skin)
}

/// Colors only go to a terminal, and only when neither config nor
/// `--no-color` turned them off.
pub fn palette_for(
    matches: &ArgMatches,
    config: &ChronosConfig,
    preferences: &Preferences,
    skin: SkinKind,
) -> Palette {
    let enabled = config.display.color()
        && !matches.get_flag("no-color")
        && std::io::stdout().is_terminal();
    Palette::new(preferences.theme, skin, enabled)
}

const DEFAULT_COLUMNS: usize = 80;

/// Width of the terminal on stdout, else `COLUMNS`, else 80.
pub fn terminal_columns() -> usize {
    tty_columns()
        .or_else(|| parse_columns(std::env::var("COLUMNS").ok().as_deref()))
        .unwrap_or(DEFAULT_COLUMNS)
}

#[cfg(unix)]
fn tty_columns() -> Option<usize> {
    use nix::libc;
    // SAFETY: TIOCGWINSZ only writes into the winsize we pass.
    let winsize = unsafe {
        let mut winsize: libc::winsize = std::mem::zeroed();
        if libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, &mut winsize) != 0 {
            return None;
        }
        winsize
    };
    (winsize.ws_col > 0).then_some(usize::from(winsize.ws_col))
}

#[cfg(not(unix))]
fn tty_columns() -> Option<usize> {
    None
}

fn parse_columns(value: Option<&str>) -> Option<usize> {
    value
        .and_then(|c| c.trim().parse().ok())
        .filter(|&c: &usize| c > 0)
}

pub fn is_confirmation_accepted(input: &str) -> bool {
    let normalized = input.trim().to_lowercase();
    normalized == "y" || normalized == "yes"
}
