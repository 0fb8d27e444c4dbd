//! Toy lifecycle: fall, rest on the seabed, rise and reset
//!
//! A toy cycles Falling -> Resting -> Rising indefinitely until collected.
//! Its radius tracks phase progress: it shrinks toward `TOY_MIN_RADIUS` while
//! sinking, holds there while resting, and grows back to `TOY_INITIAL_RADIUS`
//! while rising.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of a toy's cycle, exactly one active at a time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ToyPhase {
    /// Sinking from the surface, shrinking
    Falling,
    /// Sitting on the seabed; `rest_ticks` counts down to the rise
    Resting { rest_ticks: u32 },
    /// Floating back up, growing
    Rising,
}

/// A collectible toy entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Toy {
    pub pos: Vec2,
    pub radius: f32,
    /// Sink/rise speed in pixels per tick, fixed at spawn
    pub speed: f32,
    pub phase: ToyPhase,
    /// Removal-pending flag set by a successful collection attempt
    pub collected: bool,
}

impl Toy {
    /// Spawn a fresh toy at the surface at a random horizontal position
    pub fn spawn(rng: &mut impl Rng) -> Self {
        let x = rng.random_range(0.0..PLAYFIELD_WIDTH);
        let speed = rng.random_range(TOY_MIN_SPEED..TOY_MAX_SPEED);
        Self::spawn_at(x, speed)
    }

    /// Spawn a fresh toy at the surface with explicit parameters
    pub fn spawn_at(x: f32, speed: f32) -> Self {
        Self {
            pos: Vec2::new(x, 0.0),
            radius: TOY_INITIAL_RADIUS,
            speed,
            phase: ToyPhase::Falling,
            collected: false,
        }
    }

    /// Advance the toy by one simulation tick.
    ///
    /// Returns `true` when the toy completed a full uncollected cycle (rose
    /// back to the surface) and reset to Falling - the caller turns that into
    /// the missed cue. The horizontal position is deliberately kept on reset;
    /// only collection spawns at a new random x.
    pub fn advance(&mut self) -> bool {
        if self.collected {
            return false;
        }
        match self.phase {
            ToyPhase::Falling => {
                self.pos.y += self.speed;
                let progress = self.pos.y / (PLAYFIELD_HEIGHT - self.radius);
                self.radius = (TOY_INITIAL_RADIUS
                    - (TOY_INITIAL_RADIUS - TOY_MIN_RADIUS) * progress)
                    .max(TOY_MIN_RADIUS);
                if self.pos.y >= PLAYFIELD_HEIGHT - self.radius {
                    self.phase = ToyPhase::Resting {
                        rest_ticks: TOY_REST_SECONDS * TICK_HZ,
                    };
                }
                false
            }
            ToyPhase::Resting { rest_ticks } => {
                let remaining = rest_ticks.saturating_sub(1);
                self.phase = if remaining == 0 {
                    ToyPhase::Rising
                } else {
                    ToyPhase::Resting {
                        rest_ticks: remaining,
                    }
                };
                false
            }
            ToyPhase::Rising => {
                self.pos.y -= self.speed;
                let progress = (PLAYFIELD_HEIGHT - self.pos.y) / PLAYFIELD_HEIGHT;
                self.radius = (TOY_MIN_RADIUS
                    + (TOY_INITIAL_RADIUS - TOY_MIN_RADIUS) * progress)
                    .min(TOY_INITIAL_RADIUS);
                if self.pos.y <= 0.0 {
                    self.pos.y = 0.0;
                    self.radius = TOY_INITIAL_RADIUS;
                    self.phase = ToyPhase::Falling;
                    return true;
                }
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn radius_in_bounds(toy: &Toy) -> bool {
        toy.radius >= TOY_MIN_RADIUS && toy.radius <= TOY_INITIAL_RADIUS
    }

    #[test]
    fn test_falling_shrinks_until_seabed() {
        let mut toy = Toy::spawn_at(100.0, 2.0);
        let mut last_radius = toy.radius;

        while toy.phase == ToyPhase::Falling {
            toy.advance();
            assert!(radius_in_bounds(&toy));
            assert!(toy.radius <= last_radius, "radius grew while falling");
            last_radius = toy.radius;
        }

        assert!(matches!(toy.phase, ToyPhase::Resting { .. }));
        assert!(toy.pos.y >= PLAYFIELD_HEIGHT - toy.radius);
    }

    #[test]
    fn test_rest_lasts_exactly_five_seconds() {
        let mut toy = Toy::spawn_at(50.0, 1.5);
        while toy.phase == ToyPhase::Falling {
            toy.advance();
        }

        let mut rest_ticks = 0u32;
        while matches!(toy.phase, ToyPhase::Resting { .. }) {
            toy.advance();
            rest_ticks += 1;
        }

        assert_eq!(rest_ticks, TOY_REST_SECONDS * TICK_HZ);
        assert_eq!(toy.phase, ToyPhase::Rising);
    }

    #[test]
    fn test_rising_grows_back_to_initial() {
        let mut toy = Toy::spawn_at(200.0, 1.0);
        toy.pos.y = PLAYFIELD_HEIGHT - TOY_MIN_RADIUS;
        toy.radius = TOY_MIN_RADIUS;
        toy.phase = ToyPhase::Rising;

        let mut last_radius = toy.radius;
        while toy.phase == ToyPhase::Rising {
            toy.advance();
            assert!(radius_in_bounds(&toy));
            assert!(toy.radius >= last_radius, "radius shrank while rising");
            last_radius = toy.radius;
        }
    }

    #[test]
    fn test_missed_reset_keeps_horizontal_position() {
        let mut toy = Toy::spawn_at(333.0, 1.0);
        toy.pos.y = 0.5;
        toy.radius = TOY_INITIAL_RADIUS - 0.1;
        toy.phase = ToyPhase::Rising;

        let missed = toy.advance();

        assert!(missed, "surfacing uncollected should report a miss");
        assert_eq!(toy.pos.y, 0.0);
        assert_eq!(toy.radius, TOY_INITIAL_RADIUS);
        assert_eq!(toy.phase, ToyPhase::Falling);
        // Missed resets keep their x; only collection re-randomizes it.
        assert_eq!(toy.pos.x, 333.0);
    }

    #[test]
    fn test_cycle_repeats_indefinitely() {
        let mut toy = Toy::spawn_at(400.0, 2.0);
        let mut misses = 0;
        // Long enough for several full fall/rest/rise cycles at speed 2.
        for _ in 0..8 * TOY_REST_SECONDS * TICK_HZ {
            if toy.advance() {
                misses += 1;
            }
        }
        assert!(misses >= 2, "expected repeated cycles, got {misses}");
    }

    #[test]
    fn test_collected_toy_stops_advancing() {
        let mut toy = Toy::spawn_at(10.0, 1.0);
        toy.collected = true;
        let y = toy.pos.y;
        assert!(!toy.advance());
        assert_eq!(toy.pos.y, y);
    }

    proptest! {
        #[test]
        fn prop_radius_stays_in_bounds(
            x in 0.0f32..PLAYFIELD_WIDTH,
            speed in TOY_MIN_SPEED..TOY_MAX_SPEED,
            ticks in 1usize..4000,
        ) {
            let mut toy = Toy::spawn_at(x, speed);
            for _ in 0..ticks {
                toy.advance();
                prop_assert!(radius_in_bounds(&toy));
            }
        }
    }
}
