use clap::ArgMatches;
use tracing::{error, info};

use chronos_core::{Command, Event, Store, events};

use super::helpers::{load_config_with_warning, open_store, parse_timer_id};

pub(crate) fn handle_edit_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let id = parse_timer_id(matches)?;
    let title = matches.get_one::<String>("title").cloned();
    let date = matches.get_one::<String>("date").cloned();

    info!(event = "cli.edit_started", id = %id);

    let config = load_config_with_warning();
    let mut store = open_store(&config);

    let result = store
        .dispatch(Command::OpenEditForm { id })
        .and_then(|_| store.dispatch(Command::UpdateDraft { title, date }))
        .and_then(|_| store.dispatch(Command::SubmitForm));

    let events = match result {
        Ok(events) => events,
        Err(e) => {
            eprintln!("Failed to edit timer {}: {}", id, e);
            error!(event = "cli.edit_failed", id = %id, error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    match events.first() {
        Some(Event::TimerUpdated { date_changed, .. }) => {
            println!("Updated timer {}", id);
            info!(event = "cli.edit_completed", id = %id, date_changed = date_changed);
            Ok(())
        }
        _ => {
            eprintln!("A timer needs both a title and a date.");
            error!(event = "cli.edit_failed", id = %id, reason = "incomplete");
            Err("Title and date are both required".into())
        }
    }
}
