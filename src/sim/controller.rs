//! Paddle controllers
//!
//! The human paddle follows the held control signals; the AI paddle tracks
//! the ball with a deliberately imperfect proportional step.

use serde::{Deserialize, Serialize};

use super::state::Paddle;
use crate::config::MatchConfig;

/// Control direction for the human paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
}

/// Snapshot of which human controls are held this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlState {
    pub up: bool,
    pub down: bool,
}

impl ControlState {
    pub fn set(&mut self, direction: Direction, active: bool) {
        match direction {
            Direction::Up => self.up = active,
            Direction::Down => self.down = active,
        }
    }
}

/// Move the human paddle one tick.
///
/// `up` is applied before `down`, each clamped on its own. Holding both
/// cancels out mid-field; pinned against the top edge, `down` wins.
pub fn drive_human(paddle: &mut Paddle, controls: ControlState, config: &MatchConfig) {
    if controls.up {
        paddle.shift(-paddle.speed, config.field_height);
    }
    if controls.down {
        paddle.shift(paddle.speed, config.field_height);
    }
}

/// Move the AI paddle one tick toward `ball_y`
pub fn drive_ai(paddle: &mut Paddle, ball_y: f32, config: &MatchConfig) {
    let diff = ball_y - paddle.center_y();
    let step = paddle.speed.min(diff.abs()) * config.ai_reaction;
    paddle.shift(step.copysign(diff), config.field_height);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Side;
    use proptest::prelude::*;

    fn paddles() -> (MatchConfig, Paddle, Paddle) {
        let config = MatchConfig::default();
        let player = Paddle::new(&config, Side::Player);
        let ai = Paddle::new(&config, Side::Ai);
        (config, player, ai)
    }

    #[test]
    fn test_human_moves_by_speed() {
        let (config, mut paddle, _) = paddles();
        let start = paddle.y;
        drive_human(&mut paddle, ControlState { up: true, down: false }, &config);
        assert_eq!(paddle.y, start - config.player_paddle_speed);
        drive_human(&mut paddle, ControlState { up: false, down: true }, &config);
        assert_eq!(paddle.y, start);
    }

    #[test]
    fn test_human_both_held() {
        let (config, mut paddle, _) = paddles();
        let start = paddle.y;
        let both = ControlState { up: true, down: true };
        drive_human(&mut paddle, both, &config);
        assert_eq!(paddle.y, start);

        // At the top edge the up step is swallowed by the clamp
        paddle.y = 0.0;
        drive_human(&mut paddle, both, &config);
        assert_eq!(paddle.y, config.player_paddle_speed);
    }

    #[test]
    fn test_human_clamped_at_bottom() {
        let (config, mut paddle, _) = paddles();
        paddle.y = config.paddle_max_y() - 1.0;
        drive_human(&mut paddle, ControlState { up: false, down: true }, &config);
        assert_eq!(paddle.y, config.paddle_max_y());
    }

    #[test]
    fn test_ai_step_is_capped() {
        let (config, _, mut ai) = paddles();
        let start = ai.y;
        // Ball far below: full speed times reaction
        drive_ai(&mut ai, config.field_height, &config);
        assert!((ai.y - (start + config.ai_paddle_speed * config.ai_reaction)).abs() < 1e-5);
    }

    #[test]
    fn test_ai_closes_small_gap_proportionally() {
        let (config, _, mut ai) = paddles();
        let center = ai.center_y();
        drive_ai(&mut ai, center - 1.0, &config);
        assert!((ai.center_y() - (center - config.ai_reaction)).abs() < 1e-5);
    }

    #[test]
    fn test_ai_holds_when_aligned() {
        let (config, _, mut ai) = paddles();
        let start = ai.y;
        let center = ai.center_y();
        drive_ai(&mut ai, center, &config);
        assert_eq!(ai.y, start);
    }

    proptest! {
        #[test]
        fn prop_paddles_stay_on_field(
            moves in proptest::collection::vec((any::<bool>(), any::<bool>(), 0.0f32..400.0), 1..200)
        ) {
            let (config, mut player, mut ai) = paddles();
            for (up, down, ball_y) in moves {
                drive_human(&mut player, ControlState { up, down }, &config);
                drive_ai(&mut ai, ball_y, &config);
                prop_assert!(player.y >= 0.0 && player.y <= config.paddle_max_y());
                prop_assert!(ai.y >= 0.0 && ai.y <= config.paddle_max_y());
            }
        }
    }
}
