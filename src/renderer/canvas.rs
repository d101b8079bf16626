//! The fixed-size cell grid every frame is drawn onto.
//!
//! Coordinates are signed so effects can sit partly off-screen; anything
//! outside the grid is clipped silently.

use crate::assets::Sprite;
use crate::types::{Cell, CellChange, Style};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u16,
    height: u16,
    cells: Vec<Vec<Cell>>,
}

impl Canvas {
    pub fn new(width: u16, height: u16) -> Self {
        Canvas {
            width,
            height,
            cells: vec![vec![Cell::default(); width as usize]; height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.cells
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.cells.get(y as usize)?.get(x as usize)
    }

    /// Text of row `y` with styles stripped. Handy for assertions.
    pub fn row_text(&self, y: u16) -> String {
        self.cells
            .get(y as usize)
            .map(|row| row.iter().map(|c| c.ch).collect())
            .unwrap_or_default()
    }

    pub fn clear(&mut self) {
        for row in &mut self.cells {
            row.fill(Cell::default());
        }
    }

    pub fn put(&mut self, x: i32, y: i32, ch: char, style: Style) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        self.cells[y as usize][x as usize] = Cell { ch, style };
    }

    /// Print a single line of text starting at `(x, y)`.
    pub fn print(&mut self, x: i32, y: i32, text: &str, style: Style) {
        for (i, ch) in text.chars().enumerate() {
            self.put(x + i as i32, y, ch, style);
        }
    }

    pub fn fill(&mut self, x: i32, y: i32, w: i32, h: i32, ch: char, style: Style) {
        for j in y..y + h {
            for i in x..x + w {
                self.put(i, j, ch, style);
            }
        }
    }

    /// Paint `sprite` with its top-left corner at `(x, y)`. Transparent
    /// sprite cells leave the canvas untouched.
    pub fn blit(&mut self, sprite: &Sprite, x: i32, y: i32) {
        for (j, row) in sprite.rows().iter().enumerate() {
            for (i, ch) in row.iter().enumerate() {
                if let Some(ch) = ch {
                    self.put(x + i as i32, y + j as i32, *ch, sprite.style());
                }
            }
        }
    }

    /// Lay a translucent black layer over everything drawn so far.
    pub fn shade(&mut self, alpha: u8) {
        self.shade_rect(0, 0, self.width as i32, self.height as i32, alpha);
    }

    pub fn shade_rect(&mut self, x: i32, y: i32, w: i32, h: i32, alpha: u8) {
        let x0 = x.clamp(0, self.width as i32) as usize;
        let x1 = (x + w).clamp(0, self.width as i32) as usize;
        let y0 = y.clamp(0, self.height as i32) as usize;
        let y1 = (y + h).clamp(0, self.height as i32) as usize;
        for row in &mut self.cells[y0..y1.max(y0)] {
            for cell in &mut row[x0..x1.max(x0)] {
                cell.style = cell.style.shaded(alpha);
            }
        }
    }

    /// Cell-level diff against the previously presented canvas.
    pub fn diff(&self, prev: &Canvas) -> Vec<CellChange> {
        let mut changes = Vec::new();
        for (y, (prev_row, next_row)) in prev.cells.iter().zip(self.cells.iter()).enumerate() {
            for (x, (prev_cell, next_cell)) in prev_row.iter().zip(next_row.iter()).enumerate() {
                if prev_cell != next_cell {
                    changes.push(CellChange {
                        x: x as u16,
                        y: y as u16,
                        cell: *next_cell,
                    });
                }
            }
        }
        changes
    }
}
