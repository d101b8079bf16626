use std::rc::Rc;

use crate::assets::Sprite;
use crate::renderer::canvas::Canvas;

use super::Animate;

/// Base speed in columns per second, before the caller's slowdown.
pub const DRIFT_SPEED: f64 = 12.0;
/// Columns past either edge where the decoration turns around.
pub const DRIFT_MARGIN: f64 = 5.0;

/// Background decoration that scrolls left forever.
#[derive(Debug, Clone)]
pub struct Drift {
    sprite: Rc<Sprite>,
    x: f64,
    y: f64,
    canvas_width: f64,
}

impl Drift {
    /// `scale` is applied once up front; the sprite never changes size after.
    pub fn new(sprite: &Sprite, lane: f64, scale: f64, canvas_width: u16) -> Self {
        let canvas_width = canvas_width as f64;
        Drift {
            sprite: Rc::new(sprite.scaled(scale)),
            x: canvas_width + DRIFT_MARGIN,
            y: lane,
            canvas_width,
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}

impl Animate for Drift {
    fn update(&mut self, dt: f64) {
        self.x -= DRIFT_SPEED * dt;
        if self.x + (self.sprite.width() as f64) < -DRIFT_MARGIN {
            self.x = self.canvas_width + DRIFT_MARGIN;
        }
    }

    fn draw(&self, canvas: &mut Canvas) {
        canvas.blit(&self.sprite, self.x as i32, self.y as i32);
    }

    fn is_alive(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    #[test]
    fn wraps_to_right_edge_and_never_dies() {
        let sprite = Sprite::placeholder(Color::GRAY);
        let mut drift = Drift::new(&sprite, 4.0, 1.0, 40);
        assert_eq!(drift.x(), 45.0);

        // 45 + 10 + 5 = 60 columns to clear the left margin.
        drift.update(59.0 / DRIFT_SPEED);
        assert!(drift.x() < 0.0);
        drift.update(2.0 / DRIFT_SPEED);
        assert_eq!(drift.x(), 45.0);
        assert!(drift.is_alive());
    }
}
