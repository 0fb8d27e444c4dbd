//! Round state and core simulation types
//!
//! Everything that describes one round lives here: the diver, the active toy
//! set, score, countdown and the cue queue the host drains for audio.

use glam::Vec2;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use super::toy::Toy;

/// Round lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Waiting for the start command; configuration is accepted here only
    Idle,
    /// Active gameplay
    Running,
    /// Countdown exhausted, feedback on screen
    Ended,
}

/// Diver facing direction, used only for rendering orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// The player's diver sprite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diver {
    /// Top-left corner, clamped to the playfield rectangle
    pub pos: Vec2,
    pub facing: Direction,
}

impl Default for Diver {
    fn default() -> Self {
        Self {
            pos: Vec2::new(DIVER_START_X, DIVER_START_Y),
            facing: Direction::Down,
        }
    }
}

impl Diver {
    /// Move one step in the given direction, clamped to the playfield.
    ///
    /// Facing updates even when the move clamps against an edge.
    pub fn step(&mut self, dir: Direction) {
        self.facing = dir;
        match dir {
            Direction::Up => self.pos.y -= DIVER_STEP,
            Direction::Down => self.pos.y += DIVER_STEP,
            Direction::Left => self.pos.x -= DIVER_STEP,
            Direction::Right => self.pos.x += DIVER_STEP,
        }
        self.pos.x = self.pos.x.clamp(0.0, PLAYFIELD_WIDTH - DIVER_WIDTH);
        self.pos.y = self.pos.y.clamp(0.0, PLAYFIELD_HEIGHT - DIVER_HEIGHT);
    }

    /// Sprite center, the reference point for collection reach
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::new(DIVER_WIDTH / 2.0, DIVER_HEIGHT / 2.0)
    }

    pub fn half_width(&self) -> f32 {
        DIVER_WIDTH / 2.0
    }
}

/// Fire-and-forget audio cue, drained by the host each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    RoundStart,
    /// A toy was collected
    Collect,
    /// A toy rose back to the surface uncollected
    ToyMissed,
    RoundEnd,
}

/// End-of-round feedback bucket from fixed score thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedbackTier {
    Pro,
    Great,
    Good,
    Practice,
}

impl FeedbackTier {
    pub fn from_score(score: u32) -> Self {
        if score >= 15 {
            FeedbackTier::Pro
        } else if score >= 10 {
            FeedbackTier::Great
        } else if score >= 5 {
            FeedbackTier::Good
        } else {
            FeedbackTier::Practice
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            FeedbackTier::Pro => "Amazing! You're a pro at this!",
            FeedbackTier::Great => "Great Job!",
            FeedbackTier::Good => "Good effort, keep practicing!",
            FeedbackTier::Practice => "Keep practicing, you'll get better!",
        }
    }
}

/// Round configuration, settable only while Idle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    /// Round duration in seconds
    pub round_secs: u32,
    /// Active toy population, held constant while running
    pub max_toys: usize,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            round_secs: DEFAULT_ROUND_SECS,
            max_toys: DEFAULT_MAX_TOYS,
        }
    }
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    /// Hand out a generator on a fresh PCG stream so successive spawns draw
    /// distinct values while staying replayable from (seed, stream).
    pub fn next_rng(&mut self) -> Pcg32 {
        self.stream += 1;
        Pcg32::new(self.seed, self.stream)
    }
}

/// Complete round state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundState {
    /// Round seed for reproducibility
    pub seed: u64,
    pub rng_state: RngState,
    pub config: RoundConfig,
    pub phase: RoundPhase,
    /// Collected-toy counter, only ever increments
    pub score: u32,
    /// Seconds left on the 1 Hz countdown
    pub time_remaining: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub diver: Diver,
    /// Active toys; |toys| == config.max_toys while running
    pub toys: Vec<Toy>,
    /// Pending audio cues (not gameplay-affecting)
    #[serde(skip)]
    pub cues: Vec<Cue>,
}

impl RoundState {
    /// Create an idle round with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng_state: RngState::new(seed),
            config: RoundConfig::default(),
            phase: RoundPhase::Idle,
            score: 0,
            time_remaining: DEFAULT_ROUND_SECS,
            time_ticks: 0,
            diver: Diver::default(),
            toys: Vec::new(),
            cues: Vec::new(),
        }
    }

    /// Apply configuration; accepted only while Idle
    pub fn configure(&mut self, config: RoundConfig) -> bool {
        if self.phase != RoundPhase::Idle {
            return false;
        }
        self.config = config;
        self.time_remaining = config.round_secs;
        true
    }

    /// Spawn one fresh toy from the round's RNG
    pub fn spawn_toy(&mut self) -> Toy {
        Toy::spawn(&mut self.rng_state.next_rng())
    }

    /// Feedback bucket for the current score
    pub fn feedback(&self) -> FeedbackTier {
        FeedbackTier::from_score(self.score)
    }

    /// Drain pending cues for the host to play
    pub fn take_cues(&mut self) -> Vec<Cue> {
        std::mem::take(&mut self.cues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_diver_clamps_at_left_edge_and_faces_left() {
        let mut diver = Diver::default();
        diver.pos.x = 0.0;
        diver.step(Direction::Left);
        assert_eq!(diver.pos.x, 0.0);
        assert_eq!(diver.facing, Direction::Left);
    }

    #[test]
    fn test_diver_clamps_at_bottom_edge() {
        let mut diver = Diver::default();
        diver.pos.y = PLAYFIELD_HEIGHT - DIVER_HEIGHT;
        diver.step(Direction::Down);
        assert_eq!(diver.pos.y, PLAYFIELD_HEIGHT - DIVER_HEIGHT);
        assert_eq!(diver.facing, Direction::Down);
    }

    #[test]
    fn test_diver_moves_by_fixed_step() {
        let mut diver = Diver::default();
        let start = diver.pos;
        diver.step(Direction::Right);
        assert_eq!(diver.pos.x, start.x + DIVER_STEP);
        diver.step(Direction::Up);
        assert_eq!(diver.pos.y, start.y - DIVER_STEP);
    }

    #[test]
    fn test_feedback_thresholds() {
        assert_eq!(FeedbackTier::from_score(0), FeedbackTier::Practice);
        assert_eq!(FeedbackTier::from_score(4), FeedbackTier::Practice);
        assert_eq!(FeedbackTier::from_score(5), FeedbackTier::Good);
        assert_eq!(FeedbackTier::from_score(9), FeedbackTier::Good);
        assert_eq!(FeedbackTier::from_score(10), FeedbackTier::Great);
        assert_eq!(FeedbackTier::from_score(12), FeedbackTier::Great);
        assert_eq!(FeedbackTier::from_score(14), FeedbackTier::Great);
        assert_eq!(FeedbackTier::from_score(15), FeedbackTier::Pro);
        assert_eq!(FeedbackTier::from_score(100), FeedbackTier::Pro);
    }

    #[test]
    fn test_configure_only_while_idle() {
        let mut state = RoundState::new(7);
        let cfg = RoundConfig {
            round_secs: 30,
            max_toys: 3,
        };
        assert!(state.configure(cfg));
        assert_eq!(state.config.round_secs, 30);
        assert_eq!(state.time_remaining, 30);

        state.phase = RoundPhase::Running;
        assert!(!state.configure(RoundConfig::default()));
        assert_eq!(state.config.max_toys, 3);
    }

    #[test]
    fn test_rng_streams_are_replayable() {
        let mut a = RngState::new(42);
        let mut b = RngState::new(42);
        let toy_a = Toy::spawn(&mut a.next_rng());
        let toy_b = Toy::spawn(&mut b.next_rng());
        assert_eq!(toy_a.pos.x, toy_b.pos.x);
        assert_eq!(toy_a.speed, toy_b.speed);
    }

    proptest! {
        #[test]
        fn prop_diver_never_leaves_playfield(moves in proptest::collection::vec(0u8..4, 0..500)) {
            let mut diver = Diver::default();
            for m in moves {
                let dir = match m {
                    0 => Direction::Up,
                    1 => Direction::Down,
                    2 => Direction::Left,
                    _ => Direction::Right,
                };
                diver.step(dir);
                prop_assert!(diver.pos.x >= 0.0);
                prop_assert!(diver.pos.x <= PLAYFIELD_WIDTH - DIVER_WIDTH);
                prop_assert!(diver.pos.y >= 0.0);
                prop_assert!(diver.pos.y <= PLAYFIELD_HEIGHT - DIVER_HEIGHT);
            }
        }
    }
}
