//! Effect kinds and the `Animate` contract they share.
//!
//! Each kind lives in its own module with its struct definition and
//! `Animate` implementation side by side.

mod celebration;
mod drift;
mod fall;
mod pop;
mod registry;
mod slide;

pub use celebration::{CELEBRATIONS, Celebration, SHOWER_SIZE, spawn_celebration};
pub use drift::{DRIFT_MARGIN, DRIFT_SPEED, Drift};
pub use fall::{FALL_MARGIN, FALL_SPEED_MAX, FALL_SPEED_MIN, FALL_START_MAX, FALL_START_MIN, Fall};
pub use pop::{POP_GROWTH, POP_MAX_SCALE, POP_START_SCALE, Pop};
pub use registry::EffectRegistry;
pub use slide::{SLIDE_MARGIN, SLIDE_SPEED, Slide};

use crate::renderer::canvas::Canvas;

/// Advance and paint one animated object.
pub trait Animate {
    /// Move the effect forward by `dt` seconds. May kill it; never revives it.
    fn update(&mut self, dt: f64);
    /// Paint at the current position. Dead effects draw nothing.
    fn draw(&self, canvas: &mut Canvas);
    fn is_alive(&self) -> bool;
}

/// A celebration in flight. The ambient `Drift` never dies, so the session
/// holds it directly rather than in the registry.
#[derive(Debug, Clone)]
pub enum Effect {
    Pop(Pop),
    Slide(Slide),
    Fall(Fall),
}

impl Animate for Effect {
    fn update(&mut self, dt: f64) {
        match self {
            Effect::Pop(e) => e.update(dt),
            Effect::Slide(e) => e.update(dt),
            Effect::Fall(e) => e.update(dt),
        }
    }

    fn draw(&self, canvas: &mut Canvas) {
        match self {
            Effect::Pop(e) => e.draw(canvas),
            Effect::Slide(e) => e.draw(canvas),
            Effect::Fall(e) => e.draw(canvas),
        }
    }

    fn is_alive(&self) -> bool {
        match self {
            Effect::Pop(e) => e.is_alive(),
            Effect::Slide(e) => e.is_alive(),
            Effect::Fall(e) => e.is_alive(),
        }
    }
}
