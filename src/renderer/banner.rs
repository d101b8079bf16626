//! Three-row block font for the board title.
//!
//! Glyphs are drawn with half-block characters so each text row carries two
//! pixel rows. Spaces inside a glyph are transparent. All rows of a glyph
//! have the same number of chars.

use crate::types::Style;

use super::canvas::Canvas;

/// Text rows every glyph occupies.
pub const GLYPH_HEIGHT: usize = 3;

/// Return the rows for `ch`, or `None` when the font has no such glyph.
/// Callers fold case first.
pub fn glyph(ch: char) -> Option<[&'static str; GLYPH_HEIGHT]> {
    let g = match ch {
        'A' => ["▄▀▄", "█▀█", "▀ ▀"],
        'B' => ["█▀▄", "█▀▄", "▀▀ "],
        'C' => ["▄▀▀", "█  ", " ▀▀"],
        'D' => ["█▀▄", "█ █", "▀▀ "],
        'E' => ["█▀▀", "█▀ ", "▀▀▀"],
        'F' => ["█▀▀", "█▀ ", "▀  "],
        'G' => ["▄▀▀", "█ █", " ▀▀"],
        'H' => ["█ █", "█▀█", "▀ ▀"],
        'I' => ["▀█▀", " █ ", "▀▀▀"],
        'J' => ["  █", "  █", "▀▀ "],
        'K' => ["█ █", "█▀▄", "▀ ▀"],
        'L' => ["█  ", "█  ", "▀▀▀"],
        'M' => ["█▄█", "█ █", "▀ ▀"],
        'N' => ["█▀█", "█ █", "▀ ▀"],
        'O' => ["▄▀▄", "█ █", " ▀ "],
        'P' => ["█▀▄", "█▀ ", "▀  "],
        'Q' => ["▄▀▄", "█ █", " ▀▄"],
        'R' => ["█▀▄", "█▀▄", "▀ ▀"],
        'S' => ["▄▀▀", " ▀▄", "▀▀ "],
        'T' => ["▀█▀", " █ ", " ▀ "],
        'U' => ["█ █", "█ █", " ▀ "],
        'V' => ["█ █", "▀▄▀", " ▀ "],
        'W' => ["█ █", "█▄█", "▀ ▀"],
        'X' => ["▀▄▀", " █ ", "▀ ▀"],
        'Y' => ["█ █", " █ ", " ▀ "],
        'Z' => ["▀▀█", " █ ", "▀▀▀"],

        '0' => ["█▀█", "█ █", "▀▀▀"],
        '1' => ["▄█ ", " █ ", "▀▀▀"],
        '2' => ["▀▀█", "█▀▀", "▀▀▀"],
        '3' => ["▀▀█", " ▀█", "▀▀▀"],
        '4' => ["█ █", "▀▀█", "  ▀"],
        '5' => ["█▀▀", "▀▀█", "▀▀▀"],
        '6' => ["█▀▀", "█▀█", "▀▀▀"],
        '7' => ["▀▀█", "  █", "  ▀"],
        '8' => ["█▀█", "█▀█", "▀▀▀"],
        '9' => ["█▀█", "▀▀█", "▀▀▀"],

        ' ' => ["  ", "  ", "  "],
        '-' => ["   ", "▀▀▀", "   "],
        '!' => ["█", "▀", "▀"],
        '.' => [" ", " ", "▀"],

        _ => return None,
    };
    debug_assert!(
        g.iter().all(|row| row.chars().count() == g[0].chars().count()),
        "glyph '{ch}' has inconsistent row widths",
    );
    Some(g)
}

fn glyph_width(g: &[&str; GLYPH_HEIGHT]) -> u16 {
    g[0].chars().count() as u16
}

/// Rendered width of `text`, with one column between glyphs. Characters the
/// font lacks take no space.
pub fn text_width(text: &str) -> u16 {
    let mut width: u16 = 0;
    let mut first = true;
    for ch in text.chars() {
        if let Some(g) = glyph(ch.to_ascii_uppercase()) {
            if !first {
                width += 1;
            }
            width += glyph_width(&g);
            first = false;
        }
    }
    width
}

/// Paint `text` in the block font with its top-left corner at `(x, y)`.
pub fn draw(canvas: &mut Canvas, x: i32, y: i32, text: &str, style: Style) {
    let mut cursor = x;
    for ch in text.chars() {
        let Some(g) = glyph(ch.to_ascii_uppercase()) else {
            continue;
        };
        for (row, line) in g.iter().enumerate() {
            for (col, c) in line.chars().enumerate() {
                if c != ' ' {
                    canvas.put(cursor + col as i32, y + row as i32, c, style);
                }
            }
        }
        cursor += glyph_width(&g) as i32 + 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_counts_gaps_and_skips_unknown() {
        assert_eq!(text_width("A"), 3);
        assert_eq!(text_width("AB"), 7);
        assert_eq!(text_width("a~b"), 7);
        assert_eq!(text_width(""), 0);
    }

    #[test]
    fn draws_lowercase_as_uppercase() {
        let mut canvas = Canvas::new(8, 3);
        draw(&mut canvas, 0, 0, "hi", Style::default());
        assert_eq!(canvas.row_text(0), "█ █ ▀█▀ ");
        assert_eq!(canvas.row_text(1), "█▀█  █  ");
    }
}
