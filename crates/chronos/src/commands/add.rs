use clap::ArgMatches;
use tracing::{error, info};

use chronos_core::{Command, Event, Store, events};

use super::helpers::{load_config_with_warning, open_store};

pub(crate) fn handle_add_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let title = matches
        .get_one::<String>("title")
        .ok_or("Title argument is required")?;
    let date = matches
        .get_one::<String>("date")
        .ok_or("Date argument is required")?;

    info!(event = "cli.add_started", title = %title, date = %date);

    let config = load_config_with_warning();
    let mut store = open_store(&config);

    store.dispatch(Command::OpenCreateForm)?;
    store.dispatch(Command::UpdateDraft {
        title: Some(title.clone()),
        date: Some(date.clone()),
    })?;

    let events = match store.dispatch(Command::SubmitForm) {
        Ok(events) => events,
        Err(e) => {
            eprintln!("Failed to add timer: {}", e);
            error!(event = "cli.add_failed", error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    // An incomplete form produces no events and stays open.
    let Some(Event::TimerCreated { id }) = events.first() else {
        eprintln!("A timer needs both a title and a date.");
        error!(event = "cli.add_failed", reason = "incomplete");
        return Err("Title and date are both required".into());
    };

    println!("Added timer '{}' (id {})", title.trim(), id);
    info!(event = "cli.add_completed", id = %id);
    Ok(())
}
