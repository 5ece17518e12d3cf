use clap::ArgMatches;
use tracing::{error, info};

use chronos_core::display::render::{render_dashboard_entry, render_fullscreen};
use chronos_core::preferences::load_preferences;
use chronos_core::{Clock, FileStore, SystemClock, compute_countdown, timer_ops};

use super::helpers::{
    load_config_with_warning, palette_for, parse_timer_id, skin_from_matches, terminal_columns,
};

pub(crate) fn handle_show_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let id = parse_timer_id(matches)?;
    let fullscreen = matches.get_flag("fullscreen");

    info!(event = "cli.show_started", id = %id, fullscreen = fullscreen);

    let config = load_config_with_warning();
    let storage = FileStore::open_default();
    let (list, _) = timer_ops::open_list(&storage);
    let timer = match timer_ops::get_timer(&list, id) {
        Ok(timer) => timer,
        Err(e) => {
            eprintln!("Failed to show timer: {}", e);
            error!(event = "cli.show_failed", id = %id, error = %e);
            return Err(e.into());
        }
    };

    let preferences = load_preferences(&storage, &config.display);
    let skin = skin_from_matches(matches, &preferences);
    let palette = palette_for(matches, &config, &preferences, skin);

    let lines = match timer.target_instant() {
        Ok(target) if fullscreen => {
            let countdown = compute_countdown(&target, &SystemClock.now());
            render_fullscreen(&timer.title, &countdown, skin.skin(), terminal_columns())
        }
        Ok(target) => {
            let countdown = compute_countdown(&target, &SystemClock.now());
            render_dashboard_entry(
                timer,
                Some(&countdown),
                skin.skin(),
                config.dashboard.date_format(),
            )
        }
        Err(e) => {
            eprintln!("Failed to show timer '{}': {}", timer.title, e);
            error!(event = "cli.show_failed", id = %id, error = %e);
            return Err(e.into());
        }
    };

    println!("{}", palette.paint(&lines));
    info!(event = "cli.show_completed", id = %id, skin = %skin);
    Ok(())
}
