use std::io::{self, Write};

use clap::ArgMatches;
use tracing::{error, info};

use chronos_core::{Command, Store, events, timer_ops};

use super::helpers::{
    is_confirmation_accepted, load_config_with_warning, open_store, parse_timer_id,
};

pub(crate) fn handle_delete_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let id = parse_timer_id(matches)?;
    let force = matches.get_flag("force");

    info!(event = "cli.delete_started", id = %id, force = force);

    let config = load_config_with_warning();
    let mut store = open_store(&config);

    if let Err(e) = store.dispatch(Command::RequestDelete { id }) {
        eprintln!("Failed to delete timer {}: {}", id, e);
        error!(event = "cli.delete_failed", id = %id, error = %e);
        return Err(e.into());
    }

    // RequestDelete succeeded, so the timer exists.
    let title = timer_ops::get_timer(&store.state().timers, id)?.title.clone();

    if !force {
        print!("Delete timer '{}'? This cannot be undone. [y/N] ", title);
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        if !is_confirmation_accepted(&input) {
            store.dispatch(Command::CancelDelete)?;
            println!("Aborted.");
            info!(event = "cli.delete_aborted", id = %id);
            return Ok(());
        }
    }

    match store.dispatch(Command::ConfirmDelete) {
        Ok(_) => {
            println!("Deleted timer '{}'", title);
            info!(event = "cli.delete_completed", id = %id);
            Ok(())
        }
        Err(e) => {
            eprintln!("Failed to delete timer '{}': {}", title, e);
            error!(event = "cli.delete_failed", id = %id, error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
