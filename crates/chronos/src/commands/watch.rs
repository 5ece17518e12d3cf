use std::io::{self, Write};
use std::sync::Arc;

use clap::ArgMatches;
use tokio::time::MissedTickBehavior;
use tracing::{error, info, warn};

use chronos_core::config::ChronosConfig;
use chronos_core::display::Line;
use chronos_core::display::Skin;
use chronos_core::display::render::{
    render_dashboard_entry, render_fullscreen, render_fullscreen_notice,
};
use chronos_core::refresh::BoardEntry;
use chronos_core::preferences::load_preferences;
use chronos_core::{FileStore, SystemClock, Timer, TimerBoard, TimerId, timer_ops};

use super::helpers::{
    load_config_with_warning, palette_for, parse_timer_id, skin_from_matches, terminal_columns,
};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
const HIDE_CURSOR: &str = "\x1b[?25l";
const SHOW_CURSOR: &str = "\x1b[?25h";

/// What woke the watch loop.
enum Wake {
    Quit,
    Tick,
    Reload,
}

pub(crate) fn handle_watch_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let focus = match matches.get_one::<String>("id") {
        Some(_) => Some(parse_timer_id(matches)?),
        None => None,
    };

    info!(event = "cli.watch_started", focus = ?focus);

    let config = load_config_with_warning();
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let result = runtime.block_on(run_watch(matches, &config, focus));

    match &result {
        Ok(()) => info!(event = "cli.watch_completed"),
        Err(e) => {
            eprintln!("Watch stopped: {}", e);
            error!(event = "cli.watch_failed", error = %e);
        }
    }
    result
}

async fn run_watch(
    matches: &ArgMatches,
    config: &ChronosConfig,
    focus: Option<TimerId>,
) -> Result<(), Box<dyn std::error::Error>> {
    let storage = FileStore::open_default();
    let mut board = TimerBoard::new(Arc::new(SystemClock), config.refresh.interval());

    board.sync(&load_visible(&storage, focus)?);

    let mut reload = tokio::time::interval(config.refresh.reload());
    reload.set_missed_tick_behavior(MissedTickBehavior::Skip);
    // First tick is immediate and the list was just loaded.
    reload.tick().await;

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let mut stdout = io::stdout();
    write!(stdout, "{}", HIDE_CURSOR)?;
    writeln!(stdout, "{}{}", CLEAR_SCREEN, draw(matches, config, &storage, &board, focus))?;
    stdout.flush()?;

    let outcome = loop {
        let wake = tokio::select! {
            _ = &mut ctrl_c => Wake::Quit,
            _ = board.changed() => Wake::Tick,
            _ = reload.tick() => Wake::Reload,
        };

        match wake {
            Wake::Quit => break Ok(()),
            Wake::Tick => {}
            Wake::Reload => match load_visible(&storage, focus) {
                Ok(timers) => {
                    board.sync(&timers);
                }
                Err(e) => break Err(e),
            },
        }

        let frame = draw(matches, config, &storage, &board, focus);
        if let Err(e) = writeln!(stdout, "{}{}", CLEAR_SCREEN, frame).and_then(|_| stdout.flush()) {
            break Err(e.into());
        }
    };

    write!(stdout, "{}", SHOW_CURSOR)?;
    stdout.flush()?;
    outcome
}

/// Timers to show: all of them, or only `focus`.
fn load_visible(
    storage: &FileStore,
    focus: Option<TimerId>,
) -> Result<Vec<Timer>, Box<dyn std::error::Error>> {
    let (list, load_error) = timer_ops::open_list(storage);
    if let Some(load_error) = load_error {
        warn!(event = "cli.watch_load_degraded", error = %load_error);
    }

    match focus {
        Some(id) => {
            let timer = timer_ops::get_timer(&list, id)?;
            Ok(vec![timer.clone()])
        }
        None => Ok(list.iter().cloned().collect()),
    }
}

fn draw(
    matches: &ArgMatches,
    config: &ChronosConfig,
    storage: &FileStore,
    board: &TimerBoard,
    focus: Option<TimerId>,
) -> String {
    // Re-read so theme and skin changes from other invocations show up.
    let preferences = load_preferences(storage, &config.display);
    let skin = skin_from_matches(matches, &preferences);
    let palette = palette_for(matches, config, &preferences, skin);

    let mut lines: Vec<Line> = Vec::new();

    if focus.is_some() {
        if let Some(entry) = board.entries().first() {
            lines = focused_lines(entry, skin.skin(), terminal_columns());
        }
    } else if board.is_empty() {
        lines.push(Line::plain("No timers yet. Add one with: chronos add <title> <date>"));
    } else {
        for entry in board.entries() {
            let countdown = entry.countdown();
            lines.extend(render_dashboard_entry(
                &entry.timer,
                countdown.as_ref(),
                skin.skin(),
                config.dashboard.date_format(),
            ));
            lines.push(Line::new());
        }
    }

    lines.push(Line::plain("Ctrl-C to quit"));
    palette.paint(&lines)
}

/// Fullscreen frame for the focused timer, or why it cannot be counted.
fn focused_lines(entry: &BoardEntry, skin: &dyn Skin, columns: usize) -> Vec<Line> {
    match &entry.error {
        Some(error) => render_fullscreen_notice(&entry.timer.title, error, columns),
        None => {
            let countdown = entry.countdown().unwrap_or_default();
            render_fullscreen(&entry.timer.title, &countdown, skin, columns)
        }
    }
}
