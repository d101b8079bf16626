//! Shared style and cell primitives.
//!
//! `Color` and `Style` appear in the JSON config (asset tints), so they keep
//! their serde shape. `Cell` and `CellChange` are the unit the canvas and the
//! terminal display exchange.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Color {
    Named(NamedColor),
    Rgb { r: u8, g: u8, b: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamedColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    pub const WHITE: Color = Color::Rgb { r: 255, g: 255, b: 255 };
    pub const GRAY: Color = Color::Rgb { r: 200, g: 200, b: 200 };
    /// Sole leader of a criterion.
    pub const GOLD: Color = Color::Rgb { r: 255, g: 215, b: 0 };
    /// Leader shared with at least one other competitor.
    pub const CORAL: Color = Color::Rgb { r: 255, g: 100, b: 100 };
    /// Fill used for missing assets.
    pub const PLACEHOLDER: Color = Color::Rgb { r: 255, g: 0, b: 255 };

    /// Blend toward black. `alpha` is the opacity of the black layer (0–255).
    pub fn darken(self, alpha: u8) -> Color {
        match self {
            Color::Rgb { r, g, b } => {
                let keep = 255 - alpha as u16;
                let f = |c: u8| ((c as u16 * keep) / 255) as u8;
                Color::Rgb { r: f(r), g: f(g), b: f(b) }
            }
            named => named,
        }
    }
}

// ---------------------------------------------------------------------------
// Style
// ---------------------------------------------------------------------------

fn is_false(b: &bool) -> bool {
    !*b
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fg: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg: Option<Color>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub dim: bool,
}

impl Style {
    pub const fn fg(color: Color) -> Self {
        Style { fg: Some(color), bg: None, bold: false, dim: false }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn on(mut self, bg: Color) -> Self {
        self.bg = Some(bg);
        self
    }

    /// Apply a translucent black layer. RGB colors are blended; named
    /// colors cannot be blended so the whole style is dimmed instead.
    pub fn shaded(self, alpha: u8) -> Self {
        let named = matches!(self.fg, Some(Color::Named(_)))
            || matches!(self.bg, Some(Color::Named(_)));
        Style {
            fg: self.fg.map(|c| c.darken(alpha)),
            bg: self.bg.map(|c| c.darken(alpha)),
            bold: self.bold,
            dim: self.dim || named,
        }
    }
}

// ---------------------------------------------------------------------------
// Canvas ↔ display boundary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: Style,
}

impl Default for Cell {
    fn default() -> Self {
        Cell {
            ch: ' ',
            style: Style::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellChange {
    pub x: u16,
    pub y: u16,
    pub cell: Cell,
}
