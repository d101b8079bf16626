use std::rc::Rc;

use crate::assets::Sprite;
use crate::renderer::canvas::Canvas;

use super::Animate;

pub const POP_START_SCALE: f64 = 0.2;
/// Scale gained per second.
pub const POP_GROWTH: f64 = 0.5;
pub const POP_MAX_SCALE: f64 = 5.0;

/// Logo that grows out of a fixed point until it fills the screen.
#[derive(Debug, Clone)]
pub struct Pop {
    sprite: Rc<Sprite>,
    cx: f64,
    cy: f64,
    scale: f64,
    alive: bool,
}

impl Pop {
    pub fn new(sprite: Rc<Sprite>, cx: f64, cy: f64) -> Self {
        Pop {
            sprite,
            cx,
            cy,
            scale: POP_START_SCALE,
            alive: true,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn center(&self) -> (f64, f64) {
        (self.cx, self.cy)
    }
}

impl Animate for Pop {
    fn update(&mut self, dt: f64) {
        if !self.alive {
            return;
        }
        self.scale += POP_GROWTH * dt;
        if self.scale > POP_MAX_SCALE {
            self.alive = false;
        }
    }

    fn draw(&self, canvas: &mut Canvas) {
        if !self.alive {
            return;
        }
        let scaled = self.sprite.scaled(self.scale);
        let x = self.cx - scaled.width() as f64 / 2.0;
        let y = self.cy - scaled.height() as f64 / 2.0;
        canvas.blit(&scaled, x.round() as i32, y.round() as i32);
    }

    fn is_alive(&self) -> bool {
        self.alive
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    fn pop() -> Pop {
        Pop::new(Rc::new(Sprite::placeholder(Color::GOLD)), 20.0, 10.0)
    }

    #[test]
    fn dies_only_once_scale_passes_threshold() {
        let mut pop = pop();
        // 0.2 + 9 * 0.5 = 4.7
        for _ in 0..9 {
            pop.update(1.0);
            assert!(pop.is_alive(), "died early at scale {}", pop.scale());
        }
        pop.update(1.0);
        assert!(!pop.is_alive());
    }

    #[test]
    fn stays_dead() {
        let mut pop = pop();
        pop.update(100.0);
        assert!(!pop.is_alive());
        let scale = pop.scale();
        pop.update(1.0);
        assert_eq!(pop.scale(), scale);
    }

    #[test]
    fn draws_centered_on_anchor() {
        let mut canvas = Canvas::new(40, 20);
        let mut pop = pop();
        pop.update(1.6); // scale 1.0
        pop.draw(&mut canvas);
        // 10x3 placeholder centred on (20, 10) spans columns 15..25, rows 9..12.
        assert_eq!(canvas.get(15, 9).map(|c| c.ch), Some('█'));
        assert_eq!(canvas.get(24, 11).map(|c| c.ch), Some('█'));
        assert_eq!(canvas.get(14, 9).map(|c| c.ch), Some(' '));
        assert_eq!(canvas.get(25, 9).map(|c| c.ch), Some(' '));
    }
}
