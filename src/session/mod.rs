//! Owns all live state and steps it one frame at a time.
//!
//! Input handling lives in `input`, frame pacing in `clock`. Nothing here
//! touches the terminal; `display` drives a session against a real one.

pub mod clock;
pub mod input;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::assets::{Assets, Sprite};
use crate::board::command::{ScoreCommand, parse_command};
use crate::board::{Leaderboard, Scores, ScoringEvent};
use crate::config::BoardConfig;
use crate::effects::{Animate, CELEBRATIONS, Drift, EffectRegistry, spawn_celebration};
use crate::error::{BoardError, CommandError};
use crate::renderer::canvas::Canvas;
use crate::renderer::layout::Layout;
use crate::renderer::{Renderer, Scene};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    /// Typing a score command into the entry buffer.
    Entry,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    /// Seconds left on screen.
    pub remaining: f64,
}

pub struct Session<R = StdRng> {
    config: BoardConfig,
    layout: Layout,
    board: Leaderboard,
    effects: EffectRegistry,
    drift: Drift,
    assets: Assets,
    background: Sprite,
    mode: Mode,
    entry: String,
    status: Option<StatusMessage>,
    normal_hint: String,
    entry_hint: String,
    rng: R,
}

impl Session<StdRng> {
    pub fn new(config: BoardConfig, assets: Assets) -> Self {
        Self::with_rng(config, assets, StdRng::from_entropy())
    }
}

impl<R: Rng> Session<R> {
    pub fn with_rng(config: BoardConfig, assets: Assets, rng: R) -> Self {
        let layout = Layout::compute(config.width, config.height, config.criteria.len());
        let board = Leaderboard::new(config.team_count, |slot| config.team_label(slot));
        let drift = Drift::new(&assets.drift, config.drift_lane, config.drift_scale, config.width);
        let background = assets
            .background
            .resized(config.width as usize, config.height as usize);
        let keys = &config.key_bindings;
        let normal_hint = format!("[{}] edit  [{}] exit", keys.edit, keys.quit);
        let entry_hint = format!(
            "[{}] apply  [{}] cancel  [{}] delete",
            keys.commit, keys.cancel, keys.delete
        );

        Session {
            config,
            layout,
            board,
            effects: EffectRegistry::new(),
            drift,
            assets,
            background,
            mode: Mode::Normal,
            entry: String::new(),
            status: None,
            normal_hint,
            entry_hint,
            rng,
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn board(&self) -> &Leaderboard {
        &self.board
    }

    pub fn effects(&self) -> &EffectRegistry {
        &self.effects
    }

    pub fn drift(&self) -> &Drift {
        &self.drift
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn entry(&self) -> &str {
        &self.entry
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    // -----------------------------------------------------------------------
    // Entry buffer
    // -----------------------------------------------------------------------

    pub fn begin_entry(&mut self) {
        self.mode = Mode::Entry;
        self.entry.clear();
    }

    pub fn cancel_entry(&mut self) {
        self.mode = Mode::Normal;
        self.entry.clear();
    }

    pub fn push_char(&mut self, ch: char) {
        self.entry.push(ch);
    }

    pub fn pop_char(&mut self) {
        self.entry.pop();
    }

    /// Parse the entry buffer, apply it, and go back to normal mode. The
    /// outcome is reported through the status message only.
    pub fn commit_entry(&mut self) {
        let input = std::mem::take(&mut self.entry);
        self.mode = Mode::Normal;

        match self.apply_command(&input) {
            Ok(Some(name)) => self.show_message(format!("Updated {name}")),
            Ok(None) => {}
            Err(e) => {
                tracing::debug!(%input, error = %e, "rejected score command");
                self.show_message(e.to_string());
            }
        }
    }

    fn apply_command(&mut self, input: &str) -> Result<Option<String>, CommandError> {
        let Some(ScoreCommand { slot, values }) = parse_command(input, &self.board)? else {
            return Ok(None);
        };
        self.update_scores(slot, values)?;
        Ok(Some(self.board.competitor(slot)?.name().to_string()))
    }

    // -----------------------------------------------------------------------
    // Scores
    // -----------------------------------------------------------------------

    /// Store new scores and launch a celebration for every broken record.
    pub fn update_scores(
        &mut self,
        slot: usize,
        values: Scores,
    ) -> Result<Vec<ScoringEvent>, BoardError> {
        let events = self.board.update_scores(slot, values)?;
        tracing::info!(slot, ?values, records = events.len(), "scores updated");

        for event in &events {
            let celebration = CELEBRATIONS[event.criterion];
            tracing::debug!(?event, ?celebration, "new record");
            let spawned =
                spawn_celebration(celebration, event, &self.layout, &self.assets, &mut self.rng);
            self.effects.extend(spawned);
        }
        Ok(events)
    }

    pub fn show_message(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            remaining: self.config.message_secs,
        });
    }

    // -----------------------------------------------------------------------
    // Frame step
    // -----------------------------------------------------------------------

    /// Advance everything time-driven by `dt` seconds.
    pub fn tick(&mut self, dt: f64) {
        self.drift.update(dt * self.config.drift_slowdown);
        self.effects.advance_all(dt);
        self.effects.prune();

        if let Some(status) = &mut self.status {
            status.remaining -= dt;
        }
        if self.status.as_ref().is_some_and(|s| s.remaining <= 0.0) {
            self.status = None;
        }
    }

    pub fn scene(&self) -> Scene<'_> {
        let entry = (self.mode == Mode::Entry).then_some(self.entry.as_str());
        let hint = match self.mode {
            Mode::Normal => &self.normal_hint,
            Mode::Entry => &self.entry_hint,
        };
        Scene {
            layout: &self.layout,
            title: &self.config.title,
            criteria: &self.config.criteria,
            board: &self.board,
            background: &self.background,
            drift: &self.drift,
            effects: &self.effects,
            hint,
            entry,
            status: self
                .status
                .as_ref()
                .filter(|s| s.remaining > 0.0)
                .map(|s| s.text.as_str()),
        }
    }

    pub fn render(&self, canvas: &mut Canvas) {
        Renderer::draw(&self.scene(), canvas);
    }
}
