//! Composes one frame of the board onto a `Canvas`.
//!
//! The renderer is pure: it reads board state, effects and UI overlays and
//! writes cells. It never advances time or mutates what it is given.

pub mod banner;
pub mod canvas;
pub mod hints;
pub mod layout;

use crate::assets::Sprite;
use crate::board::{CRITERIA, Leaderboard};
use crate::effects::{Animate, Drift, EffectRegistry};
use crate::types::{Color, Style};

use canvas::Canvas;
use layout::{Layout, PADDING, ROW_HEIGHT};

/// Opacity of the black layer between background and board.
pub const OVERLAY_ALPHA: u8 = 150;
/// Opacity of the band behind each competitor row.
pub const ROW_BAND_ALPHA: u8 = 80;
const ENTRY_BOX_BG: Color = Color::Rgb { r: 30, g: 30, b: 30 };
/// Top row of the title and of the status message.
const TITLE_Y: i32 = 1;

/// Everything one frame shows, borrowed from the session.
pub struct Scene<'a> {
    pub layout: &'a Layout,
    pub title: &'a str,
    pub criteria: &'a [String; CRITERIA],
    pub board: &'a Leaderboard,
    /// Already stretched to the canvas size.
    pub background: &'a Sprite,
    pub drift: &'a Drift,
    pub effects: &'a EffectRegistry,
    pub hint: &'a str,
    pub entry: Option<&'a str>,
    pub status: Option<&'a str>,
}

pub struct Renderer;

impl Renderer {
    /// Draw `scene` back to front. Overlays come last so effects never
    /// cover them.
    pub fn draw(scene: &Scene, canvas: &mut Canvas) {
        canvas.clear();
        canvas.blit(scene.background, 0, 0);
        canvas.shade(OVERLAY_ALPHA);
        scene.drift.draw(canvas);

        Self::draw_title(scene, canvas);
        Self::draw_headings(scene, canvas);
        Self::draw_rows(scene, canvas);

        scene.effects.draw_all(canvas);

        hints::draw_hint(
            canvas,
            PADDING as i32,
            scene.layout.footer_y(),
            scene.hint,
            Style::fg(Color::GRAY),
        );
        if let Some(buffer) = scene.entry {
            Self::draw_entry_box(scene.layout, buffer, canvas);
        }
        if let Some(message) = scene.status {
            let len = message.chars().count() as i32;
            let x = scene.layout.width as i32 - len - PADDING as i32;
            canvas.print(x, TITLE_Y, message, Style::fg(Color::WHITE).bold());
        }
    }

    fn draw_title(scene: &Scene, canvas: &mut Canvas) {
        let style = Style::fg(Color::WHITE).bold();
        let room = scene.layout.width.saturating_sub(2 * PADDING);
        let fits_above_headings =
            TITLE_Y + banner::GLYPH_HEIGHT as i32 <= scene.layout.heading_y();
        if fits_above_headings && banner::text_width(scene.title) <= room {
            banner::draw(canvas, PADDING as i32, TITLE_Y, scene.title, style);
        } else {
            canvas.print(PADDING as i32, TITLE_Y, scene.title, style);
        }
    }

    fn draw_headings(scene: &Scene, canvas: &mut Canvas) {
        let layout = scene.layout;
        let style = Style::fg(Color::WHITE).bold();
        let y = layout.heading_y();
        canvas.print(layout.name_x(), y, "Team", style);
        for (criterion, label) in scene.criteria.iter().enumerate() {
            let x = layout.centered_in_column(criterion, label.chars().count());
            canvas.print(x, y, label, style);
        }
    }

    fn draw_rows(scene: &Scene, canvas: &mut Canvas) {
        let layout = scene.layout;
        let highlights = scene.board.compute_highlights();
        let band_width = layout.width as i32 - 2 * PADDING as i32;

        for (row, competitor) in scene.board.competitors().iter().enumerate() {
            let top = layout.row_top(row);
            let y = layout.row_text_y(row);
            canvas.shade_rect(PADDING as i32, top, band_width, ROW_HEIGHT as i32 - 1, ROW_BAND_ALPHA);
            canvas.print(layout.name_x() + 2, y, competitor.name(), Style::fg(Color::WHITE));

            for (criterion, value) in competitor.scores().iter().enumerate() {
                let highlight = &highlights[criterion];
                let style = if highlight.contains(competitor.slot()) {
                    let color = if highlight.is_tie() { Color::CORAL } else { Color::GOLD };
                    Style::fg(color).bold()
                } else {
                    Style::fg(Color::WHITE)
                };
                let text = value.to_string();
                let x = layout.centered_in_column(criterion, text.len());
                canvas.print(x, y, &text, style);
            }
        }
    }

    fn draw_entry_box(layout: &Layout, buffer: &str, canvas: &mut Canvas) {
        let (x, y, w, h) = layout.entry_box();
        let bg = Style::default().on(ENTRY_BOX_BG);
        canvas.fill(x, y, w, h, ' ', bg);
        canvas.print(
            x + 2,
            y + 1,
            "Enter: <team> <c1> <c2> ...",
            Style::fg(Color::WHITE).on(ENTRY_BOX_BG),
        );
        let line = format!("{buffer}_");
        canvas.print(x + 2, y + 2, &line, Style::fg(Color::WHITE).on(ENTRY_BOX_BG).bold());
    }
}
