use super::glyph::{Line, Role};
use super::types::{SkinKind, Theme};

/// Terminal text style using 256-color indices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    pub fg: Option<u8>,
    pub bg: Option<u8>,
    pub bold: bool,
}

impl Style {
    const fn fg(color: u8) -> Self {
        Self {
            fg: Some(color),
            bg: None,
            bold: false,
        }
    }

    const fn on(self, color: u8) -> Self {
        Self {
            bg: Some(color),
            ..self
        }
    }

    const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    fn is_plain(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && !self.bold
    }

    /// Wrap `text` in SGR escape sequences.
    pub fn paint(&self, text: &str) -> String {
        if self.is_plain() || text.is_empty() {
            return text.to_string();
        }

        let mut codes: Vec<String> = Vec::new();
        if self.bold {
            codes.push("1".to_string());
        }
        if let Some(fg) = self.fg {
            codes.push(format!("38;5;{}", fg));
        }
        if let Some(bg) = self.bg {
            codes.push(format!("48;5;{}", bg));
        }
        format!("\x1b[{}m{}\x1b[0m", codes.join(";"), text)
    }
}

/// Maps rendered roles to styles for one theme and skin.
///
/// The flip skin follows the light/dark theme. The LCD and nixie skins keep
/// their own hardware colors in both themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub theme: Theme,
    pub skin: SkinKind,
    pub enabled: bool,
}

impl Palette {
    pub fn new(theme: Theme, skin: SkinKind, enabled: bool) -> Self {
        Self {
            theme,
            skin,
            enabled,
        }
    }

    /// Palette that emits no escape sequences.
    pub fn plain() -> Self {
        Self::new(Theme::default(), SkinKind::default(), false)
    }

    pub fn style(&self, role: Role) -> Style {
        if !self.enabled {
            return Style::default();
        }

        match (self.skin, role) {
            (_, Role::Plain) => Style::default(),

            (SkinKind::Flip, Role::Frame) => match self.theme {
                Theme::Dark => Style::fg(240),
                Theme::Light => Style::fg(250),
            },
            (SkinKind::Flip, Role::Digit) => match self.theme {
                Theme::Dark => Style::fg(255).bold(),
                Theme::Light => Style::fg(232).bold(),
            },
            (SkinKind::Flip, Role::Label | Role::Ghost) => Style::fg(244),
            (SkinKind::Flip, Role::Title) => match self.theme {
                Theme::Dark => Style::fg(252).bold(),
                Theme::Light => Style::fg(236).bold(),
            },
            (SkinKind::Flip, Role::Panel) => Style::default(),

            (SkinKind::Casio, Role::Frame) => Style::fg(248),
            (SkinKind::Casio, Role::Panel) => Style::fg(108).on(151),
            (SkinKind::Casio, Role::Digit) => Style::fg(16).on(151),
            (SkinKind::Casio, Role::Ghost) => Style::fg(108).on(151),
            (SkinKind::Casio, Role::Label) => Style::fg(248),
            (SkinKind::Casio, Role::Title) => Style::fg(244).bold(),

            (SkinKind::Nixie, Role::Frame) => Style::fg(238),
            (SkinKind::Nixie, Role::Panel) => Style::default(),
            (SkinKind::Nixie, Role::Digit) => Style::fg(208).bold(),
            (SkinKind::Nixie, Role::Ghost) => Style::fg(52),
            (SkinKind::Nixie, Role::Label) => Style::fg(94),
            (SkinKind::Nixie, Role::Title) => Style::fg(130).bold(),
        }
    }

    pub fn paint_line(&self, line: &Line) -> String {
        line.spans
            .iter()
            .map(|span| self.style(span.role).paint(&span.text))
            .collect()
    }

    /// Paint lines and join them with newlines. Trailing padding is trimmed
    /// when colors are off.
    pub fn paint(&self, lines: &[Line]) -> String {
        lines
            .iter()
            .map(|line| {
                let painted = self.paint_line(line);
                if self.enabled {
                    painted
                } else {
                    painted.trim_end().to_string()
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_palette_emits_no_escapes() {
        let mut line = Line::new();
        line.push("│", Role::Frame).push("42", Role::Digit);
        let out = Palette::plain().paint_line(&line);
        assert_eq!(out, "│42");
    }

    #[test]
    fn test_enabled_palette_wraps_digits() {
        let palette = Palette::new(Theme::Dark, SkinKind::Nixie, true);
        let out = palette.style(Role::Digit).paint("7");
        assert_eq!(out, "\x1b[1;38;5;208m7\x1b[0m");
    }

    #[test]
    fn test_flip_follows_theme() {
        let dark = Palette::new(Theme::Dark, SkinKind::Flip, true);
        let light = Palette::new(Theme::Light, SkinKind::Flip, true);
        assert_ne!(dark.style(Role::Digit), light.style(Role::Digit));
    }

    #[test]
    fn test_hardware_skins_ignore_theme() {
        for skin in [SkinKind::Casio, SkinKind::Nixie] {
            let dark = Palette::new(Theme::Dark, skin, true);
            let light = Palette::new(Theme::Light, skin, true);
            assert_eq!(dark.style(Role::Digit), light.style(Role::Digit));
        }
    }

    #[test]
    fn test_plain_text_stays_unstyled() {
        let palette = Palette::new(Theme::Dark, SkinKind::Casio, true);
        assert_eq!(palette.style(Role::Plain).paint("  "), "  ");
    }

    #[test]
    fn test_paint_trims_when_plain() {
        let lines = vec![Line::plain("ab   "), Line::plain("c")];
        assert_eq!(Palette::plain().paint(&lines), "ab\nc");
    }
}
