use clap::{Arg, ArgAction, ArgGroup, Command, value_parser};
use clap_complete::Shell;

const SKINS: [&str; 3] = ["flip", "casio", "nixie"];

pub fn build_cli() -> Command {
    Command::new("chronos")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Count down to (or up from) the dates that matter")
        .long_about("Chronos keeps a list of titled dates and shows how long until, or since, each one in years, months, days, hours, minutes and seconds. Timers render as flip cards, LCD panels or nixie tubes, in a light or dark theme.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable ANSI colors in rendered output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("list")
                .about("List timers with their current breakdown")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("add")
                .about("Add a timer")
                .arg(
                    Arg::new("title")
                        .help("Label shown above the timer")
                        .required(true)
                        .index(1)
                )
                .arg(
                    Arg::new("date")
                        .help("Local date-time, e.g. 2025-03-02T01:02 or 2025-03-02")
                        .required(true)
                        .index(2)
                )
        )
        .subcommand(
            Command::new("edit")
                .about("Change a timer's title or date")
                .arg(
                    Arg::new("id")
                        .help("Timer id (see 'chronos list')")
                        .required(true)
                        .index(1)
                )
                .arg(
                    Arg::new("title")
                        .long("title")
                        .short('t')
                        .help("New title")
                )
                .arg(
                    Arg::new("date")
                        .long("date")
                        .short('d')
                        .help("New local date-time")
                )
                .group(
                    ArgGroup::new("changes")
                        .args(["title", "date"])
                        .multiple(true)
                        .required(true)
                )
        )
        .subcommand(
            Command::new("delete")
                .about("Delete a timer")
                .arg(
                    Arg::new("id")
                        .help("Timer id to delete")
                        .required(true)
                        .index(1)
                )
                .arg(
                    Arg::new("force")
                        .long("force")
                        .short('f')
                        .help("Skip the confirmation prompt")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("show")
                .about("Render one timer once")
                .arg(
                    Arg::new("id")
                        .help("Timer id to show")
                        .required(true)
                        .index(1)
                )
                .arg(
                    Arg::new("skin")
                        .long("skin")
                        .short('s')
                        .help("Skin to render with (overrides saved preference)")
                        .value_parser(SKINS)
                )
                .arg(
                    Arg::new("fullscreen")
                        .long("fullscreen")
                        .short('F')
                        .help("Large centered rendering")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("watch")
                .about("Live dashboard, redrawn every tick until Ctrl-C")
                .long_about(
                    "Shows every timer, redrawn once per second. With an id, shows that one timer fullscreen.\n\n\
                    Changes made from another terminal (add, edit, delete, theme, skin) are picked up automatically."
                )
                .arg(
                    Arg::new("id")
                        .help("Timer to show fullscreen")
                        .index(1)
                )
                .arg(
                    Arg::new("skin")
                        .long("skin")
                        .short('s')
                        .help("Skin to render with (overrides saved preference)")
                        .value_parser(SKINS)
                )
        )
        .subcommand(
            Command::new("theme")
                .about("Show or change the color theme")
                .arg(
                    Arg::new("theme")
                        .help("New theme")
                        .value_parser(["light", "dark", "toggle"])
                        .index(1)
                )
        )
        .subcommand(
            Command::new("skin")
                .about("Show or change the visual skin")
                .arg(
                    Arg::new("skin")
                        .help("New skin")
                        .value_parser(SKINS)
                        .index(1)
                )
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion script")
                .arg(
                    Arg::new("shell")
                        .help("Target shell")
                        .required(true)
                        .value_parser(value_parser!(Shell))
                        .index(1)
                )
        )
}
