use std::rc::Rc;

use rand::Rng;

use crate::assets::Sprite;
use crate::renderer::canvas::Canvas;

use super::Animate;

/// Rows above the top edge a falling logo may start at.
pub const FALL_START_MIN: f64 = 2.0;
pub const FALL_START_MAX: f64 = 8.0;
/// Rows per second.
pub const FALL_SPEED_MIN: f64 = 8.0;
pub const FALL_SPEED_MAX: f64 = 12.0;
/// Rows past the bottom edge before the effect ends.
pub const FALL_MARGIN: f64 = 4.0;

/// Logo dropping straight down from above the screen.
///
/// Start height and speed are randomised per instance, which is what
/// staggers a shower of them.
#[derive(Debug, Clone)]
pub struct Fall {
    sprite: Rc<Sprite>,
    x: f64,
    y: f64,
    speed: f64,
    floor: f64,
    alive: bool,
}

impl Fall {
    pub fn new(sprite: Rc<Sprite>, x: f64, canvas_height: u16, rng: &mut impl Rng) -> Self {
        Fall {
            sprite,
            x,
            y: -rng.gen_range(FALL_START_MIN..=FALL_START_MAX),
            speed: rng.gen_range(FALL_SPEED_MIN..=FALL_SPEED_MAX),
            floor: canvas_height as f64 + FALL_MARGIN,
            alive: true,
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }
}

impl Animate for Fall {
    fn update(&mut self, dt: f64) {
        if !self.alive {
            return;
        }
        self.y += self.speed * dt;
        if self.y > self.floor {
            self.alive = false;
        }
    }

    fn draw(&self, canvas: &mut Canvas) {
        if self.alive {
            canvas.blit(&self.sprite, self.x as i32, self.y.floor() as i32);
        }
    }

    fn is_alive(&self) -> bool {
        self.alive
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn starts_above_screen_within_ranges() {
        let mut rng = StdRng::seed_from_u64(11);
        let sprite = Rc::new(Sprite::placeholder(Color::CORAL));
        for _ in 0..50 {
            let fall = Fall::new(sprite.clone(), 7.0, 30, &mut rng);
            assert!((-FALL_START_MAX..=-FALL_START_MIN).contains(&fall.y()));
            assert!((FALL_SPEED_MIN..=FALL_SPEED_MAX).contains(&fall.speed()));
            assert_eq!(fall.x(), 7.0);
        }
    }

    #[test]
    fn dies_only_past_bottom_margin() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut fall = Fall::new(Rc::new(Sprite::placeholder(Color::CORAL)), 0.0, 30, &mut rng);
        let step = 0.5 / fall.speed();
        while fall.is_alive() {
            assert!(fall.y() <= 30.0 + FALL_MARGIN);
            fall.update(step);
        }
        assert!(fall.y() > 30.0 + FALL_MARGIN);
    }
}
