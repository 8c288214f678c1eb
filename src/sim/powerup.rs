//! Power-up marker spawner
//!
//! Markers are decorative: nothing picks them up, they stay until reset.

use glam::Vec2;
use rand::Rng;

use super::state::{PowerUpKind, PowerUpMarker, SimulationState};
use crate::config::MatchConfig;
use crate::consts::POWER_UP_INSET;

/// Roll for a marker after a player hit. A spawned marker is appended to the
/// match state and a copy returned.
pub fn maybe_spawn<R: Rng>(
    state: &mut SimulationState,
    rng: &mut R,
    config: &MatchConfig,
) -> Option<PowerUpMarker> {
    if !rng.random_bool(config.power_up_chance) {
        return None;
    }

    let pos = Vec2::new(
        random_inset(rng, config.field_width),
        random_inset(rng, config.field_height),
    );
    let kind = PowerUpKind::ALL[rng.random_range(0..PowerUpKind::ALL.len())];
    let marker = PowerUpMarker {
        id: state.next_entity_id(),
        pos,
        kind,
    };
    state.match_state.power_ups.push(marker.clone());
    Some(marker)
}

/// Uniform coordinate in [inset, extent - inset), or the midpoint on tiny fields
fn random_inset<R: Rng>(rng: &mut R, extent: f32) -> f32 {
    let lo = POWER_UP_INSET;
    let hi = extent - POWER_UP_INSET;
    if hi > lo {
        rng.random_range(lo..hi)
    } else {
        extent / 2.0
    }
}
