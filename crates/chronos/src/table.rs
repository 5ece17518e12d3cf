/// One row of the `list` table, already formatted.
pub struct TimerRow {
    pub id: String,
    pub title: String,
    pub date: String,
    pub direction: String,
    pub breakdown: String,
}

pub struct TableFormatter {
    id_width: usize,
    title_width: usize,
    date_width: usize,
    direction_width: usize,
    breakdown_width: usize,
}

impl TableFormatter {
    pub fn new(rows: &[TimerRow]) -> Self {
        let width_of = |f: fn(&TimerRow) -> &str, min: usize, max: usize| {
            rows.iter()
                .map(|r| f(r).chars().count())
                .max()
                .unwrap_or(min)
                .clamp(min, max)
        };

        Self {
            id_width: width_of(|r| &r.id, 2, 20),
            title_width: width_of(|r| &r.title, 5, 40), // Between "Title" header min and reasonable terminal width max
            date_width: width_of(|r| &r.date, 4, 30),
            direction_width: 9,
            breakdown_width: width_of(|r| &r.breakdown, 9, 30),
        }
    }

    pub fn print_table(&self, rows: &[TimerRow]) {
        println!("{}", self.border('┌', '┬', '┐'));
        println!(
            "{}",
            self.row("ID", "Title", "Date", "Direction", "Breakdown")
        );
        println!("{}", self.border('├', '┼', '┤'));
        for row in rows {
            println!(
                "{}",
                self.row(&row.id, &row.title, &row.date, &row.direction, &row.breakdown)
            );
        }
        println!("{}", self.border('└', '┴', '┘'));
    }

    fn widths(&self) -> [usize; 5] {
        [
            self.id_width,
            self.title_width,
            self.date_width,
            self.direction_width,
            self.breakdown_width,
        ]
    }

    fn row(&self, id: &str, title: &str, date: &str, direction: &str, breakdown: &str) -> String {
        let cells: Vec<String> = [id, title, date, direction, breakdown]
            .iter()
            .zip(self.widths())
            .map(|(text, width)| truncate(text, width))
            .collect();
        format!("│ {} │", cells.join(" │ "))
    }

    fn border(&self, left: char, middle: char, right: char) -> String {
        let segments: Vec<String> = self
            .widths()
            .iter()
            .map(|w| "─".repeat(w + 2))
            .collect();
        format!("{}{}{}", left, segments.join(&middle.to_string()), right)
    }
}

/// Truncate a string to a maximum display width, adding "..." if truncated.
///
/// Uses character count (not byte count) to safely handle UTF-8 strings
/// including emoji and multi-byte characters.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        format!("{:<width$}", s, width = max_len)
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_len)
    }
}
