use crate::renderer::canvas::Canvas;

use super::{Animate, Effect};

/// Owns every live celebratory effect.
#[derive(Debug, Clone, Default)]
pub struct EffectRegistry {
    effects: Vec<Effect>,
}

impl EffectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, effect: Effect) {
        self.effects.push(effect);
    }

    pub fn extend(&mut self, effects: impl IntoIterator<Item = Effect>) {
        self.effects.extend(effects);
    }

    /// Update every effect. Effects are independent, so order is irrelevant.
    pub fn advance_all(&mut self, dt: f64) {
        for effect in &mut self.effects {
            effect.update(dt);
        }
    }

    /// Drop dead effects. Run after `advance_all` and before drawing.
    pub fn prune(&mut self) {
        self.effects.retain(Animate::is_alive);
    }

    /// Draw in insertion order; later effects paint over earlier ones.
    pub fn draw_all(&self, canvas: &mut Canvas) {
        for effect in &self.effects {
            effect.draw(canvas);
        }
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Effect> {
        self.effects.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::assets::Sprite;
    use crate::effects::{Pop, Slide};
    use crate::types::Color;

    #[test]
    fn prune_removes_only_dead_effects() {
        let sprite = Rc::new(Sprite::placeholder(Color::WHITE));
        let mut registry = EffectRegistry::new();
        registry.add(Effect::Pop(Pop::new(sprite.clone(), 10.0, 5.0)));
        registry.add(Effect::Slide(Slide::new(sprite, 3.0, 40)));

        // Enough to finish the slide (61 columns at 45/s) but not the pop.
        registry.advance_all(2.0);
        registry.prune();
        assert_eq!(registry.len(), 1);
        assert!(matches!(registry.iter().next(), Some(Effect::Pop(_))));

        registry.advance_all(20.0);
        registry.prune();
        assert!(registry.is_empty());
    }
}
