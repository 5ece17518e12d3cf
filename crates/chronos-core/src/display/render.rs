use std::fmt::Write as _;

use chrono::NaiveDateTime;

use crate::countdown::{Countdown, Direction};
use crate::timers::Timer;

use super::glyph::{Glyph, Line, Role, center, compose};
use super::skins::Skin;

/// Long-form date used in list rows when no format is configured.
pub const DEFAULT_DATE_FORMAT: &str = "%B %-d, %Y";

/// Render every shown field of `countdown` side by side.
pub fn render_countdown(countdown: &Countdown, skin: &dyn Skin, fullscreen: bool) -> Glyph {
    let glyphs: Vec<Glyph> = countdown
        .breakdown
        .fields()
        .into_iter()
        .map(|(unit, value)| skin.render(value, unit, fullscreen))
        .collect();

    compose(&glyphs, if fullscreen { 3 } else { 1 })
}

/// Format `target` with a strftime pattern, falling back to ISO form when
/// the pattern cannot be rendered.
pub fn format_date(target: &NaiveDateTime, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", target.format(pattern)).is_err() {
        return target.format("%Y-%m-%d %H:%M").to_string();
    }
    out
}

/// One dashboard entry: title, long date, direction, then the cards.
///
/// `countdown` is `None` before the first tick. Timers whose stored date
/// cannot be parsed get a notice instead of cards.
pub fn render_dashboard_entry(
    timer: &Timer,
    countdown: Option<&Countdown>,
    skin: &dyn Skin,
    date_format: &str,
) -> Vec<Line> {
    let mut lines = Vec::new();

    let mut header = Line::new();
    header.push(timer.title.clone(), Role::Title);
    lines.push(header);

    let target = match timer.target_local() {
        Ok(target) => target,
        Err(e) => {
            let mut notice = Line::new();
            notice.push(e.to_string(), Role::Label);
            lines.push(notice);
            return lines;
        }
    };

    let countdown = countdown.copied().unwrap_or_default();
    let direction = match countdown.direction {
        Direction::Until => "remaining",
        Direction::Since => "elapsed",
    };

    let mut subtitle = Line::new();
    subtitle.push(
        format!("{} · {}", format_date(&target, date_format), direction),
        Role::Label,
    );
    lines.push(subtitle);

    lines.extend(render_countdown(&countdown, skin, false).lines);
    lines
}

/// Single timer filling the screen: uppercase title over large cards, both
/// centered within `columns`.
pub fn render_fullscreen(
    title: &str,
    countdown: &Countdown,
    skin: &dyn Skin,
    columns: usize,
) -> Vec<Line> {
    let cards = render_countdown(countdown, skin, true);
    let width = columns.max(cards.width);
    let indent = (width - cards.width) / 2;

    let mut lines = vec![Line::new()];

    let mut heading = Line::new();
    heading.push(center(&title.to_uppercase(), width), Role::Title);
    lines.push(heading);
    lines.push(Line::new());

    for card_line in cards.lines {
        let mut line = Line::new();
        line.push(" ".repeat(indent), Role::Plain);
        line.append(&card_line);
        lines.push(line);
    }

    lines
}

/// Fullscreen layout for a timer that cannot be counted: the centered title
/// over the reason.
pub fn render_fullscreen_notice(title: &str, notice: &str, columns: usize) -> Vec<Line> {
    let width = columns.max(notice.chars().count());

    let mut heading = Line::new();
    heading.push(center(&title.to_uppercase(), width), Role::Title);

    let mut reason = Line::new();
    reason.push(center(notice, width), Role::Label);

    vec![Line::new(), heading, Line::new(), reason]
}
