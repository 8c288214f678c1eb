//! Ball integration and collision response
//!
//! One call to [`step`] moves the ball a single tick and resolves, in order:
//! top/bottom walls, the player paddle, the AI paddle, then goals. The paddle
//! response is the interesting part: the outgoing angle depends on where the
//! ball struck the paddle face, and the speed on how long the rally has been.

use glam::Vec2;
use rand::Rng;

use super::difficulty::ball_speed;
use super::powerup;
use super::state::{Ball, MatchEvent, Paddle, ParticleColor, Side, SimulationState};
use crate::config::MatchConfig;
use crate::consts::*;

/// Clamped y if the ball touches or crosses the top or bottom wall
pub fn wall_contact(pos: Vec2, config: &MatchConfig) -> Option<f32> {
    let top = config.ball_radius;
    let bottom = config.field_height - config.ball_radius;
    if pos.y <= top || pos.y >= bottom {
        Some(pos.y.clamp(top, bottom))
    } else {
        None
    }
}

/// x coordinate of the ball centre when resting against a paddle face
pub fn paddle_face_x(side: Side, config: &MatchConfig) -> f32 {
    match side {
        Side::Player => config.paddle_width + config.ball_radius,
        Side::Ai => config.field_width - config.paddle_width - config.ball_radius,
    }
}

/// Whether the ball strikes `paddle` this tick.
///
/// The ball must be travelling toward the paddle, have its leading edge at or
/// past the face, and sit within the paddle span grown by one radius at each
/// end (so corner hits count).
pub fn paddle_contact(ball: &Ball, paddle: &Paddle, side: Side, config: &MatchConfig) -> bool {
    let face = paddle_face_x(side, config);
    let reaches_face = match side {
        Side::Player => ball.vel.x < 0.0 && ball.pos.x <= face,
        Side::Ai => ball.vel.x > 0.0 && ball.pos.x >= face,
    };
    let r = config.ball_radius;
    reaches_face && ball.pos.y >= paddle.y - r && ball.pos.y <= paddle.bottom() + r
}

/// Outgoing velocity after a paddle hit at height `ball_y`
pub fn deflect(ball_y: f32, paddle: &Paddle, speed: f32, side: Side, config: &MatchConfig) -> Vec2 {
    // -1 at the top tip, +1 at the bottom tip
    let relative = ((ball_y - paddle.center_y()) / (paddle.height / 2.0)).clamp(-1.0, 1.0);
    let vx = match side {
        Side::Player => speed,
        Side::Ai => -speed,
    };
    Vec2::new(vx, relative * speed * config.deflection_factor)
}

/// Side that scores when the ball centre is at `x`, if any
pub fn goal_scorer(x: f32, config: &MatchConfig) -> Option<Side> {
    if x < 0.0 {
        Some(Side::Ai)
    } else if x > config.field_width {
        Some(Side::Player)
    } else {
        None
    }
}

/// A fresh centred ball served horizontally toward `toward`
pub fn serve_ball<R: Rng>(rng: &mut R, toward: Side, config: &MatchConfig) -> Ball {
    let vx = match toward {
        Side::Player => -config.initial_ball_speed,
        Side::Ai => config.initial_ball_speed,
    };
    let half = config.serve_spread / 2.0;
    let vy = if half > 0.0 {
        rng.random_range(-half..half)
    } else {
        0.0
    };
    Ball::centered(config, Vec2::new(vx, vy))
}

/// Advance the ball one tick against the (already moved) paddles
pub fn step<R: Rng>(state: &mut SimulationState, rng: &mut R, config: &MatchConfig) {
    let prev_pos = state.ball.pos;
    state.ball.record_trail(prev_pos);
    state.ball.pos += state.ball.vel;

    if let Some(clamped_y) = wall_contact(state.ball.pos, config) {
        let impact = state.ball.pos;
        state.ball.vel.y = -state.ball.vel.y;
        state.ball.pos.y = clamped_y;
        state.events.push(MatchEvent::WallBounce { pos: impact });
        state
            .particles
            .spawn_burst(rng, impact, ParticleColor::Wall, WALL_BURST);
    }

    let hit = [Side::Player, Side::Ai]
        .into_iter()
        .find(|&side| paddle_contact(&state.ball, state.paddle(side), side, config));

    match hit {
        Some(side) => resolve_paddle_hit(state, side, rng, config),
        None => {
            if let Some(scorer) = goal_scorer(state.ball.pos.x, config) {
                resolve_goal(state, scorer, rng, config);
            }
        }
    }
}

fn resolve_paddle_hit<R: Rng>(
    state: &mut SimulationState,
    side: Side,
    rng: &mut R,
    config: &MatchConfig,
) {
    // Speed comes from the hit count before this hit
    let speed = ball_speed(state.match_state.total_hits, config);
    let vel = deflect(state.ball.pos.y, state.paddle(side), speed, side, config);
    state.ball.vel = vel;
    state.ball.pos.x = paddle_face_x(side, config);

    let pos = state.ball.pos;
    state.events.push(MatchEvent::PaddleHit { side, pos, speed });
    state
        .particles
        .spawn_burst(rng, pos, side.into(), PADDLE_BURST);
    state.match_state.record_hit(side);
    log::debug!(
        "{} hit #{} at y={:.1}, speed {:.2}",
        side,
        state.match_state.total_hits,
        pos.y,
        speed
    );

    if side == Side::Player {
        if let Some(marker) = powerup::maybe_spawn(state, rng, config) {
            log::debug!("Power-up {} spawned at {:?}", marker.kind.label(), marker.pos);
            state.events.push(MatchEvent::PowerUpSpawned {
                id: marker.id,
                kind: marker.kind,
            });
        }
    }
}

fn resolve_goal<R: Rng>(
    state: &mut SimulationState,
    scorer: Side,
    rng: &mut R,
    config: &MatchConfig,
) {
    let mouth_x = match scorer {
        Side::Ai => GOAL_BURST_INSET,
        Side::Player => config.field_width - GOAL_BURST_INSET,
    };
    let mouth = Vec2::new(mouth_x, config.field_height / 2.0);
    state
        .particles
        .spawn_burst(rng, mouth, scorer.into(), GOAL_BURST);
    state.events.push(MatchEvent::Goal { scorer });

    // Next serve heads toward the side that just scored
    state.ball = serve_ball(rng, scorer, config);

    let winner = state.match_state.award_point(scorer, config);
    log::info!(
        "{} scores: Player {} - {} AI",
        scorer,
        state.match_state.player_score,
        state.match_state.ai_score
    );
    if let Some(winner) = winner {
        log::info!("{} wins the match", winner);
        state.events.push(MatchEvent::MatchWon { winner });
    }
}
