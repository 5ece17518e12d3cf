use clap::ArgMatches;
use tracing::info;

use chronos_core::{Command, Store, Theme};

use super::helpers::{load_config_with_warning, open_store};

pub(crate) fn handle_theme_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config_with_warning();
    let mut store = open_store(&config);

    let Some(choice) = matches.get_one::<String>("theme") else {
        println!("{}", store.state().preferences.theme);
        return Ok(());
    };

    let command = match choice.as_str() {
        "toggle" => Command::ToggleTheme,
        other => Command::SetTheme {
            theme: other.parse::<Theme>()?,
        },
    };

    store.dispatch(command)?;
    let theme = store.state().preferences.theme;
    println!("Theme set to {}", theme);
    info!(event = "cli.theme_completed", theme = %theme);
    Ok(())
}
