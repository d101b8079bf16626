use std::time::{Duration, Instant};

/// Longest step a single frame may take, in seconds. Keeps a stalled
/// terminal from teleporting effects across the screen.
pub const MAX_FRAME_DT: f64 = 0.25;

/// Caps the loop at a fixed frame rate and measures time between frames.
#[derive(Debug, Clone)]
pub struct FrameClock {
    budget: Duration,
    last: Instant,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        FrameClock {
            budget: Duration::from_secs(1) / fps.max(1),
            last: Instant::now(),
        }
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Time left before the current frame is due.
    pub fn remaining(&self) -> Duration {
        self.budget.saturating_sub(self.last.elapsed())
    }

    /// Start the next frame, returning seconds since the previous one.
    pub fn tick(&mut self) -> f64 {
        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f64();
        self.last = now;
        dt.min(MAX_FRAME_DT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_matches_fps() {
        assert_eq!(FrameClock::new(50).budget(), Duration::from_millis(20));
        assert_eq!(FrameClock::new(0).budget(), Duration::from_secs(1));
    }

    #[test]
    fn tick_is_clamped_and_non_negative() {
        let mut clock = FrameClock::new(60);
        let dt = clock.tick();
        assert!((0.0..=MAX_FRAME_DT).contains(&dt));
        assert!(clock.remaining() <= clock.budget());
    }
}
