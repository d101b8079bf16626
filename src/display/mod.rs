//! Drives a `Session` against the real terminal.
//!
//! Owns raw mode and the alternate screen for the lifetime of the loop,
//! presents each frame as a diff against the last one, and always restores
//! the terminal on the way out.

use std::io::{self, Write};

use anyhow::{Result, bail};
use crossterm::{cursor, event, execute, queue, style, terminal};
use rand::Rng;

use crate::renderer::canvas::Canvas;
use crate::session::Session;
use crate::session::clock::FrameClock;
use crate::session::input::{self, Action};
use crate::types::{Cell, Color, NamedColor, Style};

/// Play `session` until the quit key or Ctrl-C.
///
/// Sets up the terminal, enters the frame loop, and restores the terminal
/// on exit (even on error).
pub fn play<R: Rng>(session: &mut Session<R>) -> Result<()> {
    let need_w = session.config().width;
    let need_h = session.config().height;
    let (term_w, term_h) = terminal::size()?;
    if term_w < need_w || term_h < need_h {
        bail!(
            "Terminal too small: need {}x{}, have {}x{}",
            need_w,
            need_h,
            term_w,
            term_h,
        );
    }

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(
        stdout,
        terminal::EnterAlternateScreen,
        cursor::Hide,
        terminal::Clear(terminal::ClearType::All),
    )?;
    tracing::info!(width = need_w, height = need_h, "session started");

    let mut screen = Screen::new(need_w, need_h);
    let result = run_loop(session, &mut screen, &mut stdout);

    // Always restore terminal state.
    let _ = execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    match &result {
        Ok(()) => tracing::info!("session ended"),
        Err(e) => tracing::error!(error = %e, "session aborted"),
    }
    result
}

// ---------------------------------------------------------------------------
// Frame loop
// ---------------------------------------------------------------------------

fn run_loop<R: Rng>(
    session: &mut Session<R>,
    screen: &mut Screen,
    stdout: &mut io::Stdout,
) -> Result<()> {
    let mut clock = FrameClock::new(session.config().fps);

    loop {
        // Input: drain events until this frame's budget runs out.
        while event::poll(clock.remaining())? {
            if input::handle_event(session, event::read()?) == Action::Quit {
                return Ok(());
            }
        }

        let dt = clock.tick();
        session.tick(dt);
        session.render(&mut screen.next);
        screen.present(stdout)?;
    }
}

/// Double-buffered canvas: what was last flushed and what is being drawn.
struct Screen {
    next: Canvas,
    shown: Option<Canvas>,
}

impl Screen {
    fn new(width: u16, height: u16) -> Self {
        Screen {
            next: Canvas::new(width, height),
            shown: None,
        }
    }

    /// Queue every changed cell, then flush once.
    fn present(&mut self, stdout: &mut io::Stdout) -> Result<()> {
        match &self.shown {
            None => {
                for (y, row) in self.next.rows().iter().enumerate() {
                    queue!(stdout, cursor::MoveTo(0, y as u16))?;
                    for cell in row {
                        queue_cell(stdout, cell)?;
                    }
                }
            }
            Some(prev) => {
                for change in self.next.diff(prev) {
                    queue!(stdout, cursor::MoveTo(change.x, change.y))?;
                    queue_cell(stdout, &change.cell)?;
                }
            }
        }
        stdout.flush()?;

        match &mut self.shown {
            Some(shown) => shown.clone_from(&self.next),
            None => self.shown = Some(self.next.clone()),
        }
        Ok(())
    }
}

fn queue_cell(stdout: &mut io::Stdout, cell: &Cell) -> Result<()> {
    let cs = to_content_style(&cell.style);
    queue!(
        stdout,
        style::PrintStyledContent(style::StyledContent::new(cs, cell.ch))
    )?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Style conversion
// ---------------------------------------------------------------------------

pub fn to_content_style(s: &Style) -> style::ContentStyle {
    let mut cs = style::ContentStyle::default();
    if let Some(fg) = s.fg {
        cs.foreground_color = Some(to_ct_color(fg));
    }
    if let Some(bg) = s.bg {
        cs.background_color = Some(to_ct_color(bg));
    }
    if s.bold {
        cs.attributes.set(style::Attribute::Bold);
    }
    if s.dim {
        cs.attributes.set(style::Attribute::Dim);
    }
    cs
}

pub fn to_ct_color(c: Color) -> style::Color {
    match c {
        Color::Named(n) => match n {
            NamedColor::Black => style::Color::Black,
            NamedColor::Red => style::Color::Red,
            NamedColor::Green => style::Color::Green,
            NamedColor::Yellow => style::Color::Yellow,
            NamedColor::Blue => style::Color::Blue,
            NamedColor::Magenta => style::Color::Magenta,
            NamedColor::Cyan => style::Color::Cyan,
            NamedColor::White => style::Color::White,
        },
        Color::Rgb { r, g, b } => style::Color::Rgb { r, g, b },
    }
}
