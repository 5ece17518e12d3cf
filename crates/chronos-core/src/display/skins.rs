use crate::countdown::Unit;

use super::font::{block_digits, segment_digits};
use super::glyph::{Glyph, Line, Role, center};

/// Renders a single numeric field as a card.
///
/// All skins share this contract so the view layer never branches on which
/// skin is active.
pub trait Skin: Send + Sync {
    fn name(&self) -> &'static str;

    fn render(&self, value: u64, unit: Unit, fullscreen: bool) -> Glyph;
}

/// Mechanical split-flap card.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlipSkin;

/// Digital LCD panel with faint unlit segments.
#[derive(Debug, Clone, Copy, Default)]
pub struct LcdSkin;

/// Vacuum tube with a glowing numeral.
#[derive(Debug, Clone, Copy, Default)]
pub struct NixieSkin;

struct Border {
    top_left: char,
    top_right: char,
    bottom_left: char,
    bottom_right: char,
    horizontal: char,
    vertical: char,
    split_left: char,
    split_right: char,
}

const SQUARE: Border = Border {
    top_left: '┌',
    top_right: '┐',
    bottom_left: '└',
    bottom_right: '┘',
    horizontal: '─',
    vertical: '│',
    split_left: '├',
    split_right: '┤',
};

const DOUBLE: Border = Border {
    top_left: '╔',
    top_right: '╗',
    bottom_left: '╚',
    bottom_right: '╝',
    horizontal: '═',
    vertical: '║',
    split_left: '╟',
    split_right: '╢',
};

const ROUND: Border = Border {
    top_left: '╭',
    top_right: '╮',
    bottom_left: '╰',
    bottom_right: '╯',
    horizontal: '─',
    vertical: '│',
    split_left: '├',
    split_right: '┤',
};

/// Surround `content` with `border`, padding each row by `pad` panel cells.
///
/// `split_row` marks a content row whose edges become split joints. `rule`
/// inserts a full-width divider after that content row instead.
fn framed(
    content: Vec<Line>,
    border: &Border,
    pad: usize,
    split_row: Option<usize>,
    rule_after: Option<usize>,
) -> Vec<Line> {
    let inner = content.iter().map(Line::width).max().unwrap_or(0) + pad * 2;
    let horizontal = border.horizontal.to_string().repeat(inner);

    let mut lines = Vec::with_capacity(content.len() + 3);

    let mut top = Line::new();
    top.push(
        format!("{}{}{}", border.top_left, horizontal, border.top_right),
        Role::Frame,
    );
    lines.push(top);

    for (index, mut row) in content.into_iter().enumerate() {
        let (left, right) = if split_row == Some(index) {
            (border.split_left, border.split_right)
        } else {
            (border.vertical, border.vertical)
        };

        let fill = inner - pad * 2 - row.width();
        let mut line = Line::new();
        line.push(left.to_string(), Role::Frame);
        line.push(" ".repeat(pad), Role::Panel);
        row.push(" ".repeat(fill), Role::Panel);
        line.append(&row);
        line.push(" ".repeat(pad), Role::Panel);
        line.push(right.to_string(), Role::Frame);
        lines.push(line);

        if rule_after == Some(index) {
            let mut rule = Line::new();
            rule.push(
                format!("{}{}{}", border.split_left, horizontal, border.split_right),
                Role::Frame,
            );
            lines.push(rule);
        }
    }

    let mut bottom = Line::new();
    bottom.push(
        format!("{}{}{}", border.bottom_left, horizontal, border.bottom_right),
        Role::Frame,
    );
    lines.push(bottom);

    lines
}

fn digit_row(text: &str) -> Line {
    let mut line = Line::new();
    line.push(text, Role::Digit);
    line
}

fn panel_row(width: usize) -> Line {
    let mut line = Line::new();
    line.push(" ".repeat(width), Role::Panel);
    line
}

fn with_label(mut lines: Vec<Line>, unit: Unit, fullscreen: bool) -> Glyph {
    let width = lines.iter().map(Line::width).max().unwrap_or(0);
    if fullscreen {
        lines.push(Line::new());
    }
    let mut label = Line::new();
    label.push(center(&unit.label().to_uppercase(), width), Role::Label);
    lines.push(label);
    Glyph::from_lines(lines)
}

impl Skin for FlipSkin {
    fn name(&self) -> &'static str {
        "flip"
    }

    fn render(&self, value: u64, unit: Unit, fullscreen: bool) -> Glyph {
        let digits = value.to_string();

        let lines = if fullscreen {
            let content = block_digits(&digits);
            let split = content.len() / 2;
            framed(content, &SQUARE, 3, Some(split), None)
        } else {
            // Upper flap carries the number, lower flap is the card back.
            let width = digits.chars().count().max(2);
            let content = vec![
                digit_row(&center(&digits, width)),
                panel_row(width),
            ];
            framed(content, &SQUARE, 2, None, Some(0))
        };

        with_label(lines, unit, fullscreen)
    }
}

impl Skin for LcdSkin {
    fn name(&self) -> &'static str {
        "casio"
    }

    fn render(&self, value: u64, unit: Unit, fullscreen: bool) -> Glyph {
        let digits = format!("{:02}", value);

        let lines = if fullscreen {
            framed(segment_digits(&digits), &DOUBLE, 2, None, None)
        } else {
            framed(vec![digit_row(&digits)], &DOUBLE, 1, None, None)
        };

        with_label(lines, unit, fullscreen)
    }
}

impl Skin for NixieSkin {
    fn name(&self) -> &'static str {
        "nixie"
    }

    fn render(&self, value: u64, unit: Unit, fullscreen: bool) -> Glyph {
        let digits = value.to_string();

        let mut lines = if fullscreen {
            framed(block_digits(&digits), &ROUND, 2, None, None)
        } else {
            let width = digits.chars().count();
            framed(
                vec![digit_row(&digits), panel_row(width)],
                &ROUND,
                1,
                None,
                None,
            )
        };

        // Tube pins under the envelope.
        if let Some(bottom) = lines.last_mut() {
            let width = bottom.width();
            let mut base = String::from("╰┬");
            base.push_str(&"─".repeat(width.saturating_sub(4)));
            base.push_str("┬╯");
            let mut line = Line::new();
            line.push(base, Role::Frame);
            *bottom = line;
        }

        with_label(lines, unit, fullscreen)
    }
}
