//! Sprites and the asset set they are loaded into.
//!
//! A sprite file is plain UTF-8 character art: one line per row, spaces are
//! transparent. A missing or unreadable file never fails the session; a
//! solid placeholder takes its place.

use std::rc::Rc;

use crate::config::{AssetConfig, AssetSpec};
use crate::types::{Color, Style};

pub const PLACEHOLDER_WIDTH: usize = 10;
pub const PLACEHOLDER_HEIGHT: usize = 3;
const PLACEHOLDER_CHAR: char = '█';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    rows: Vec<Vec<Option<char>>>,
    width: usize,
    style: Style,
}

impl Sprite {
    /// Build a sprite from character art. Rows are padded to the widest line.
    pub fn from_art(art: &str, style: Style) -> Self {
        let lines: Vec<&str> = art.lines().collect();
        let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let rows = lines
            .iter()
            .map(|line| {
                let mut row: Vec<Option<char>> =
                    line.chars().map(|c| (c != ' ').then_some(c)).collect();
                row.resize(width, None);
                row
            })
            .collect();
        Sprite { rows, width, style }
    }

    /// Solid block used in place of a missing asset.
    pub fn placeholder(color: Color) -> Self {
        Sprite {
            rows: vec![vec![Some(PLACEHOLDER_CHAR); PLACEHOLDER_WIDTH]; PLACEHOLDER_HEIGHT],
            width: PLACEHOLDER_WIDTH,
            style: Style::fg(color),
        }
    }

    /// Read a sprite from disk, falling back to the placeholder.
    pub fn load(spec: &AssetSpec) -> Self {
        let style = Style::fg(spec.color);
        let Some(path) = spec.path.as_deref() else {
            return Self::placeholder(Color::PLACEHOLDER);
        };
        match std::fs::read_to_string(path) {
            Ok(art) if !art.trim().is_empty() => Self::from_art(&art, style),
            Ok(_) => {
                tracing::warn!(path = %path.display(), "asset is empty, using placeholder");
                Self::placeholder(Color::PLACEHOLDER)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "asset missing, using placeholder");
                Self::placeholder(Color::PLACEHOLDER)
            }
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn rows(&self) -> &[Vec<Option<char>>] {
        &self.rows
    }

    /// Nearest-neighbour resize to exactly `width` × `height` cells.
    pub fn resized(&self, width: usize, height: usize) -> Sprite {
        if self.width == 0 || self.rows.is_empty() || width == 0 || height == 0 {
            return Sprite { rows: Vec::new(), width: 0, style: self.style };
        }
        let rows = (0..height)
            .map(|j| {
                let src = &self.rows[j * self.rows.len() / height];
                (0..width).map(|i| src[i * self.width / width]).collect()
            })
            .collect();
        Sprite { rows, width, style: self.style }
    }

    /// Uniform scale; each dimension keeps at least one cell while `factor`
    /// is positive.
    pub fn scaled(&self, factor: f64) -> Sprite {
        if factor <= 0.0 {
            return self.resized(0, 0);
        }
        let w = ((self.width as f64 * factor).round() as usize).max(1);
        let h = ((self.height() as f64 * factor).round() as usize).max(1);
        self.resized(w, h)
    }
}

/// The five images a session draws with. Sprites are shared between the
/// effects spawned from them.
#[derive(Debug, Clone)]
pub struct Assets {
    pub background: Rc<Sprite>,
    pub drift: Rc<Sprite>,
    pub pop: Rc<Sprite>,
    pub slide: Rc<Sprite>,
    pub fall: Rc<Sprite>,
}

impl Assets {
    pub fn load(config: &AssetConfig) -> Self {
        Assets {
            background: Rc::new(Sprite::load(&config.background)),
            drift: Rc::new(Sprite::load(&config.drift)),
            pop: Rc::new(Sprite::load(&config.pop)),
            slide: Rc::new(Sprite::load(&config.slide)),
            fall: Rc::new(Sprite::load(&config.fall)),
        }
    }

    /// All placeholders, for headless sessions and tests.
    pub fn placeholders() -> Self {
        let sprite = Rc::new(Sprite::placeholder(Color::PLACEHOLDER));
        Assets {
            background: sprite.clone(),
            drift: sprite.clone(),
            pop: sprite.clone(),
            slide: sprite.clone(),
            fall: sprite,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn art_rows_are_padded_and_spaces_transparent() {
        let sprite = Sprite::from_art("ab\n c d", Style::default());
        assert_eq!(sprite.width(), 4);
        assert_eq!(sprite.height(), 2);
        assert_eq!(sprite.rows()[0], vec![Some('a'), Some('b'), None, None]);
        assert_eq!(sprite.rows()[1], vec![None, Some('c'), None, Some('d')]);
    }

    #[test]
    fn missing_file_gives_placeholder() {
        let spec = AssetSpec {
            path: Some("definitely/not/here.txt".into()),
            color: Color::WHITE,
        };
        let sprite = Sprite::load(&spec);
        assert_eq!(sprite, Sprite::placeholder(Color::PLACEHOLDER));
        assert_eq!((sprite.width(), sprite.height()), (PLACEHOLDER_WIDTH, PLACEHOLDER_HEIGHT));
    }

    #[test]
    fn scaled_keeps_at_least_one_cell() {
        let sprite = Sprite::placeholder(Color::PLACEHOLDER).scaled(0.01);
        assert_eq!((sprite.width(), sprite.height()), (1, 1));
        let big = Sprite::placeholder(Color::PLACEHOLDER).scaled(2.0);
        assert_eq!((big.width(), big.height()), (20, 6));
    }
}
