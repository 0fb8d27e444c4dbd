//! Round controller operations
//!
//! The host drives a round through these entry points: `start_round` from the
//! start/restart buttons, `advance_frame` from the 60 Hz interval,
//! `advance_second` from the 1 Hz countdown, and `move_diver` /
//! `attempt_collect` directly from key events (immediate, not buffered into
//! the tick).

use super::collision::diver_overlaps_toy;
use super::state::{Cue, Direction, RoundPhase, RoundState};

/// Begin a round: reset score and countdown, repopulate the toy set.
///
/// Valid from Idle and from Ended (restart re-enters through the same
/// transition). The caller is responsible for (re)starting its timers.
pub fn start_round(state: &mut RoundState) {
    state.score = 0;
    state.time_remaining = state.config.round_secs;
    state.time_ticks = 0;
    state.toys.clear();
    for _ in 0..state.config.max_toys {
        let toy = state.spawn_toy();
        state.toys.push(toy);
    }
    state.phase = RoundPhase::Running;
    state.cues.push(Cue::RoundStart);
    log::info!(
        "Round started: {}s, {} toys, seed {}",
        state.config.round_secs,
        state.config.max_toys,
        state.seed
    );
}

/// Advance every toy by one simulation tick, queueing a missed cue for each
/// toy that surfaced uncollected
pub fn advance_frame(state: &mut RoundState) {
    if state.phase != RoundPhase::Running {
        return;
    }
    state.time_ticks += 1;
    let mut missed = 0;
    for toy in &mut state.toys {
        if toy.advance() {
            missed += 1;
        }
    }
    for _ in 0..missed {
        state.cues.push(Cue::ToyMissed);
    }
}

/// Tick the 1 Hz countdown; ends the round when it reaches zero
pub fn advance_second(state: &mut RoundState) {
    if state.phase != RoundPhase::Running {
        return;
    }
    if state.time_remaining > 0 {
        state.time_remaining -= 1;
    }
    if state.time_remaining == 0 {
        state.phase = RoundPhase::Ended;
        state.cues.push(Cue::RoundEnd);
        log::info!(
            "Round over: score {}, tier {:?}",
            state.score,
            state.feedback()
        );
    }
}

/// Move the diver one step; processed immediately on key-down
pub fn move_diver(state: &mut RoundState, dir: Direction) {
    state.diver.step(dir);
}

/// Attempt to collect every toy in reach. All simultaneous hits are honored.
///
/// Collected toys are filtered out and replaced in the same pass so the
/// active set size never changes. Returns the number of toys collected.
pub fn attempt_collect(state: &mut RoundState) -> u32 {
    if state.phase != RoundPhase::Running {
        return 0;
    }

    let center = state.diver.center();
    let half_width = state.diver.half_width();
    for toy in &mut state.toys {
        if !toy.collected && diver_overlaps_toy(center, half_width, toy.pos, toy.radius) {
            toy.collected = true;
        }
    }

    // Collect-then-rebuild: drop the collected toys, then append fresh
    // spawns to hold the population constant.
    let before = state.toys.len();
    state.toys.retain(|toy| !toy.collected);
    let hits = (before - state.toys.len()) as u32;
    for _ in 0..hits {
        let toy = state.spawn_toy();
        state.toys.push(toy);
        state.cues.push(Cue::Collect);
    }
    state.score += hits;
    hits
}
