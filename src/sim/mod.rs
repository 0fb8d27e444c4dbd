//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Tick-counted time only (60 Hz frames, 1 Hz countdown)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;
pub mod toy;

pub use collision::diver_overlaps_toy;
pub use state::{Cue, Direction, Diver, FeedbackTier, RoundConfig, RoundPhase, RoundState};
pub use tick::{advance_frame, advance_second, attempt_collect, move_diver, start_round};
pub use toy::{Toy, ToyPhase};
