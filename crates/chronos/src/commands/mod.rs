use clap::ArgMatches;
use tracing::error;

use chronos_core::events;

pub mod helpers;
mod json_types;

mod add;
mod completions;
mod delete;
mod edit;
mod list;
mod show;
mod skin;
mod theme;
mod watch;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    let result = match matches.subcommand() {
        Some(("list", sub_matches)) => list::handle_list_command(sub_matches),
        Some(("add", sub_matches)) => add::handle_add_command(sub_matches),
        Some(("edit", sub_matches)) => edit::handle_edit_command(sub_matches),
        Some(("delete", sub_matches)) => delete::handle_delete_command(sub_matches),
        Some(("show", sub_matches)) => show::handle_show_command(sub_matches),
        Some(("watch", sub_matches)) => watch::handle_watch_command(sub_matches),
        Some(("theme", sub_matches)) => theme::handle_theme_command(sub_matches),
        Some(("skin", sub_matches)) => skin::handle_skin_command(sub_matches),
        Some(("completions", sub_matches)) => {
            completions::handle_completions_command(sub_matches)
        }
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    };

    events::log_app_shutdown();
    result
}
