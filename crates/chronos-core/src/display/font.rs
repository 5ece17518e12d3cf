//! Large digit fonts for the fullscreen view.

use super::glyph::{Line, Role};

pub const BLOCK_HEIGHT: usize = 5;

const BLOCK_DIGITS: [[&str; BLOCK_HEIGHT]; 10] = [
    ["███", "█ █", "█ █", "█ █", "███"],
    ["  █", "  █", "  █", "  █", "  █"],
    ["███", "  █", "███", "█  ", "███"],
    ["███", "  █", "███", "  █", "███"],
    ["█ █", "█ █", "███", "  █", "  █"],
    ["███", "█  ", "███", "  █", "███"],
    ["███", "█  ", "███", "█ █", "███"],
    ["███", "  █", "  █", "  █", "  █"],
    ["███", "█ █", "███", "█ █", "███"],
    ["███", "█ █", "███", "  █", "███"],
];

/// Render `digits` in the block font, one space between digits.
///
/// Non-digit characters render as blank cells.
pub fn block_digits(digits: &str) -> Vec<Line> {
    (0..BLOCK_HEIGHT)
        .map(|row| {
            let mut line = Line::new();
            for (index, c) in digits.chars().enumerate() {
                if index > 0 {
                    line.push(" ", Role::Plain);
                }
                match c.to_digit(10) {
                    Some(d) => line.push(BLOCK_DIGITS[d as usize][row], Role::Digit),
                    None => line.push("   ", Role::Plain),
                };
            }
            line
        })
        .collect()
}

pub const SEGMENT_HEIGHT: usize = 3;

// Segment order: top, upper-left, middle, upper-right, lower-left, bottom,
// lower-right.
const SEGMENTS: [[bool; 7]; 10] = [
    [true, true, false, true, true, true, true],
    [false, false, false, true, false, false, true],
    [true, false, true, true, true, true, false],
    [true, false, true, true, false, true, true],
    [false, true, true, true, false, false, true],
    [true, true, true, false, false, true, true],
    [true, true, true, false, true, true, true],
    [true, false, false, true, false, false, true],
    [true, true, true, true, true, true, true],
    [true, true, true, true, false, true, true],
];

// (row, column, segment index, character) for each cell of a 3x3 digit.
const SEGMENT_CELLS: [(usize, usize, usize, char); 7] = [
    (0, 1, 0, '_'),
    (1, 0, 1, '|'),
    (1, 1, 2, '_'),
    (1, 2, 3, '|'),
    (2, 0, 4, '|'),
    (2, 1, 5, '_'),
    (2, 2, 6, '|'),
];

/// Render `digits` as seven-segment figures.
///
/// Every digit is drawn over a full `8`: lit segments take [`Role::Digit`]
/// and unlit ones [`Role::Ghost`], like an LCD whose dark segments show
/// faintly through.
pub fn segment_digits(digits: &str) -> Vec<Line> {
    (0..SEGMENT_HEIGHT)
        .map(|row| {
            let mut line = Line::new();
            for (index, c) in digits.chars().enumerate() {
                if index > 0 {
                    line.push(" ", Role::Panel);
                }
                let lit = c.to_digit(10).map(|d| SEGMENTS[d as usize]);
                for column in 0..3 {
                    let cell = SEGMENT_CELLS
                        .iter()
                        .find(|(r, col, _, _)| *r == row && *col == column);
                    match (cell, lit) {
                        (Some((_, _, segment, ch)), Some(mask)) if mask[*segment] => {
                            line.push(ch.to_string(), Role::Digit)
                        }
                        (Some((_, _, _, ch)), _) => line.push(ch.to_string(), Role::Ghost),
                        (None, _) => line.push(" ", Role::Panel),
                    };
                }
            }
            line
        })
        .collect()
}
