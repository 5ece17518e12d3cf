use clap::ArgMatches;
use tracing::info;

use chronos_core::{Command, SkinKind, Store};

use super::helpers::{load_config_with_warning, open_store};

pub(crate) fn handle_skin_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config_with_warning();
    let mut store = open_store(&config);

    let Some(choice) = matches.get_one::<String>("skin") else {
        let current = store.state().preferences.skin;
        for skin in SkinKind::ALL {
            let marker = if skin == current { "*" } else { " " };
            println!("{} {}", marker, skin);
        }
        return Ok(());
    };

    let skin = choice.parse::<SkinKind>()?;
    store.dispatch(Command::SetSkin { skin })?;
    println!("Skin set to {}", skin);
    info!(event = "cli.skin_completed", skin = %skin);
    Ok(())
}
