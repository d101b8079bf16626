use rand::Rng;

use crate::assets::Assets;
use crate::board::{CRITERIA, ScoringEvent};
use crate::renderer::layout::Layout;

use super::{Effect, Fall, Pop, Slide};

/// What a new record in a criterion sets off on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Celebration {
    /// Logo grows out of the scoring row.
    Pop,
    /// Logo crosses the screen right to left.
    Slide,
    /// A handful of logos rain down from the top.
    Shower,
}

/// Celebration for each criterion, in criterion order.
pub const CELEBRATIONS: [Celebration; CRITERIA] =
    [Celebration::Pop, Celebration::Slide, Celebration::Shower];

/// Falling logos per shower.
pub const SHOWER_SIZE: usize = 5;

/// Turn one scoring event into the effects its criterion celebrates with.
pub fn spawn_celebration(
    celebration: Celebration,
    event: &ScoringEvent,
    layout: &Layout,
    assets: &Assets,
    rng: &mut impl Rng,
) -> Vec<Effect> {
    match celebration {
        Celebration::Pop => {
            let (cx, cy) = layout.pop_anchor(event.row);
            vec![Effect::Pop(Pop::new(assets.pop.clone(), cx, cy))]
        }
        Celebration::Slide => vec![Effect::Slide(Slide::new(
            assets.slide.clone(),
            layout.slide_lane(),
            layout.width,
        ))],
        Celebration::Shower => {
            let (lo, hi) = layout.shower_span();
            (0..SHOWER_SIZE)
                .map(|_| {
                    let x = rng.gen_range(lo..=hi) as f64;
                    Effect::Fall(Fall::new(assets.fall.clone(), x, layout.height, &mut *rng))
                })
                .collect()
        }
    }
}
