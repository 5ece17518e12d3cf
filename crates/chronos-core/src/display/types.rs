use serde::{Deserialize, Serialize};

use super::skins::{FlipSkin, LcdSkin, NixieSkin, Skin};

/// Selectable visual skin, persisted by name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkinKind {
    /// Mechanical split-flap cards.
    #[default]
    Flip,
    /// Digital LCD wristwatch segments.
    Casio,
    /// Glowing vacuum tubes.
    Nixie,
}

impl SkinKind {
    pub const ALL: [SkinKind; 3] = [SkinKind::Flip, SkinKind::Casio, SkinKind::Nixie];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkinKind::Flip => "flip",
            SkinKind::Casio => "casio",
            SkinKind::Nixie => "nixie",
        }
    }

    /// The renderer for this skin.
    pub fn skin(&self) -> &'static dyn Skin {
        match self {
            SkinKind::Flip => &FlipSkin,
            SkinKind::Casio => &LcdSkin,
            SkinKind::Nixie => &NixieSkin,
        }
    }
}

impl std::fmt::Display for SkinKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SkinKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "flip" => Ok(SkinKind::Flip),
            "casio" | "lcd" => Ok(SkinKind::Casio),
            "nixie" | "tube" => Ok(SkinKind::Nixie),
            other => Err(format!("unknown skin '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme '{}'", other)),
        }
    }
}
