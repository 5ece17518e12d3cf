//! Text rendering of breakdowns through interchangeable skins.
//!
//! A [`Skin`] turns one `(value, unit)` pair into a [`Glyph`] made of
//! role-tagged spans. A [`Palette`] later maps roles to terminal styles for
//! the active [`Theme`], so skins never deal with colors.

pub mod font;
pub mod glyph;
pub mod palette;
pub mod render;
pub mod skins;
pub mod types;

pub use glyph::{Glyph, Line, Role, Span};
pub use palette::{Palette, Style};
pub use render::{
    render_countdown, render_dashboard_entry, render_fullscreen, render_fullscreen_notice,
};
pub use skins::{FlipSkin, LcdSkin, NixieSkin, Skin};
pub use types::{SkinKind, Theme};
