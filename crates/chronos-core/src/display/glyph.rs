/// What a piece of rendered text depicts. Palettes style by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Card, bezel or tube outline.
    Frame,
    /// Background fill inside a frame.
    Panel,
    /// Lit digits.
    Digit,
    /// Unlit segments behind the digits.
    Ghost,
    /// Unit caption under a card.
    Label,
    /// Timer title and header text.
    Title,
    /// Unstyled text.
    Plain,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub role: Role,
}

/// One row of rendered text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plain(text: impl Into<String>) -> Self {
        let mut line = Self::new();
        line.push(text, Role::Plain);
        line
    }

    /// Append text, merging with the previous span when the role matches.
    pub fn push(&mut self, text: impl Into<String>, role: Role) -> &mut Self {
        let text = text.into();
        if text.is_empty() {
            return self;
        }
        match self.spans.last_mut() {
            Some(last) if last.role == role => last.text.push_str(&text),
            _ => self.spans.push(Span { text, role }),
        }
        self
    }

    pub fn append(&mut self, other: &Line) -> &mut Self {
        for span in &other.spans {
            self.push(span.text.clone(), span.role);
        }
        self
    }

    /// Display width in characters.
    pub fn width(&self) -> usize {
        self.spans.iter().map(|s| s.text.chars().count()).sum()
    }

    /// Text without roles.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// Right-pad with plain spaces up to `width`.
    pub fn pad_to(&mut self, width: usize) -> &mut Self {
        let current = self.width();
        if current < width {
            self.push(" ".repeat(width - current), Role::Plain);
        }
        self
    }
}

/// A rectangular block of lines, all padded to the same width.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Glyph {
    pub lines: Vec<Line>,
    pub width: usize,
}

impl Glyph {
    pub fn from_lines(mut lines: Vec<Line>) -> Self {
        let width = lines.iter().map(Line::width).max().unwrap_or(0);
        for line in &mut lines {
            line.pad_to(width);
        }
        Self { lines, width }
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Lines as plain text, for tests and uncolored output.
    pub fn text_lines(&self) -> Vec<String> {
        self.lines.iter().map(Line::text).collect()
    }
}

/// Place glyphs side by side, bottom-aligned, separated by `gap` spaces.
pub fn compose(glyphs: &[Glyph], gap: usize) -> Glyph {
    let height = glyphs.iter().map(Glyph::height).max().unwrap_or(0);
    let mut rows = vec![Line::new(); height];

    for (index, glyph) in glyphs.iter().enumerate() {
        let offset = height - glyph.height();
        for (row_index, row) in rows.iter_mut().enumerate() {
            if index > 0 {
                row.push(" ".repeat(gap), Role::Plain);
            }
            match row_index.checked_sub(offset).and_then(|i| glyph.lines.get(i)) {
                Some(line) => {
                    row.append(line);
                }
                None => {
                    row.push(" ".repeat(glyph.width), Role::Plain);
                }
            }
        }
    }

    Glyph::from_lines(rows)
}

/// Center `text` within `width` characters.
pub fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}
