use clap::ArgMatches;
use tracing::{error, info};

use chronos_core::display::render::format_date;
use chronos_core::{Clock, FileStore, SystemClock, Timer, compute_countdown, timer_ops};

use super::helpers::load_config_with_warning;
use super::json_types::TimerJson;
use crate::table::{TableFormatter, TimerRow};

pub(crate) fn handle_list_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    info!(event = "cli.list_started", json_output = json_output);

    let config = load_config_with_warning();
    let (list, load_error) = timer_ops::open_list(&FileStore::open_default());
    if let Some(load_error) = &load_error {
        eprintln!("Warning: {}", load_error);
        error!(event = "cli.list_load_degraded", error = %load_error);
    }

    let now = SystemClock.now();
    let timers: Vec<&Timer> = list.iter().collect();

    if json_output {
        let entries: Vec<TimerJson> = timers
            .iter()
            .map(|timer| match timer.target_instant() {
                Ok(target) => {
                    let countdown = compute_countdown(&target, &now);
                    TimerJson {
                        id: timer.id,
                        title: timer.title.clone(),
                        date: timer.date.clone(),
                        direction: Some(countdown.direction),
                        breakdown: Some(countdown.breakdown),
                        error: None,
                    }
                }
                Err(e) => TimerJson {
                    id: timer.id,
                    title: timer.title.clone(),
                    date: timer.date.clone(),
                    direction: None,
                    breakdown: None,
                    error: Some(e.to_string()),
                },
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else if timers.is_empty() {
        println!("No timers yet. Add one with: chronos add <title> <date>");
    } else {
        let date_format = config.dashboard.date_format();
        let rows: Vec<TimerRow> = timers
            .iter()
            .map(|timer| {
                let (date, direction, breakdown) =
                    match (timer.target_local(), timer.target_instant()) {
                        (Ok(local), Ok(target)) => {
                            let countdown = compute_countdown(&target, &now);
                            (
                                format_date(&local, date_format),
                                countdown.direction.to_string(),
                                countdown.breakdown.to_string(),
                            )
                        }
                        _ => (
                            timer.date.clone(),
                            "-".to_string(),
                            "invalid date".to_string(),
                        ),
                    };
                TimerRow {
                    id: timer.id.to_string(),
                    title: timer.title.clone(),
                    date,
                    direction,
                    breakdown,
                }
            })
            .collect();

        let formatter = TableFormatter::new(&rows);
        formatter.print_table(&rows);
    }

    info!(event = "cli.list_completed", count = timers.len());
    Ok(())
}
