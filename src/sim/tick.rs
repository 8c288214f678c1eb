//! Per-frame simulation tick
//!
//! `tick` never mutates its input: it takes the previous composite state and
//! returns the next one. Cross-entity reads (the AI watching the ball) always
//! look at the previous state.

use rand::Rng;

use super::controller::{ControlState, drive_ai, drive_human};
use super::physics;
use super::state::SimulationState;
use crate::config::MatchConfig;

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Held human controls
    pub controls: ControlState,
}

/// Advance the match by one frame.
///
/// Outside `Playing` this returns an unchanged copy of `prev`.
pub fn tick<R: Rng>(
    prev: &SimulationState,
    input: &TickInput,
    config: &MatchConfig,
    rng: &mut R,
) -> SimulationState {
    let mut next = prev.clone();
    if !prev.match_state.is_playing() {
        return next;
    }

    next.events.clear();
    next.tick_count += 1;

    // Paddles first so the ball collides against this frame's positions
    drive_human(&mut next.player_paddle, input.controls, config);
    drive_ai(&mut next.ai_paddle, prev.ball.pos.y, config);

    next.particles.advance();
    physics::step(&mut next, rng, config);

    next
}
