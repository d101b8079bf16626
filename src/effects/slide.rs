use std::rc::Rc;

use crate::assets::Sprite;
use crate::renderer::canvas::Canvas;

use super::Animate;

/// Columns per second.
pub const SLIDE_SPEED: f64 = 45.0;
/// How far past the left edge the sprite's right side must travel before
/// the effect ends.
pub const SLIDE_MARGIN: f64 = 10.0;
/// Starting offset beyond the right edge.
const SLIDE_ENTRY: f64 = 1.0;

/// Logo that crosses the screen from right to left.
#[derive(Debug, Clone)]
pub struct Slide {
    sprite: Rc<Sprite>,
    x: f64,
    y: f64,
    alive: bool,
}

impl Slide {
    pub fn new(sprite: Rc<Sprite>, y: f64, canvas_width: u16) -> Self {
        Slide {
            sprite,
            x: canvas_width as f64 + SLIDE_ENTRY,
            y,
            alive: true,
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}

impl Animate for Slide {
    fn update(&mut self, dt: f64) {
        if !self.alive {
            return;
        }
        self.x -= SLIDE_SPEED * dt;
        if self.x + (self.sprite.width() as f64) < -SLIDE_MARGIN {
            self.alive = false;
        }
    }

    fn draw(&self, canvas: &mut Canvas) {
        if self.alive {
            canvas.blit(&self.sprite, self.x as i32, self.y as i32);
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

    #[test]
    fn lives_until_past_left_margin() {
        let sprite = Rc::new(Sprite::placeholder(Color::WHITE));
        let mut slide = Slide::new(sprite.clone(), 9.0, 80);
        assert_eq!(slide.x(), 81.0);

        // Roughly one column per step.
        let step = 1.0 / SLIDE_SPEED;
        let mut steps = 0;
        while slide.is_alive() {
            slide.update(step);
            steps += 1;
            if slide.is_alive() {
                assert!(slide.x() + sprite.width() as f64 >= -SLIDE_MARGIN);
            }
            assert!(steps < 1_000);
        }
        assert!(slide.x() + (sprite.width() as f64) < -SLIDE_MARGIN);
        // 81 + 10 + 10 = 101 columns to cover.
        assert!((101..=102).contains(&steps), "took {steps} steps");
    }
}
