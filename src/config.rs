//! Match configuration
//!
//! Every tunable the simulation reads lives here. Values are checked once at
//! construction so the per-tick code can assume a sane playfield.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Rejected configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("playfield must have finite positive size, got {width}x{height}")]
    InvalidField { width: f32, height: f32 },

    #[error("paddle height {height} must be positive and smaller than field height {field_height}")]
    InvalidPaddleHeight { height: f32, field_height: f32 },

    #[error("paddle width {0} must be positive")]
    InvalidPaddleWidth(f32),

    #[error("paddles and ball do not fit across a field of width {0}")]
    PaddlesOverlap(f32),

    #[error("ball radius {0} must be positive")]
    InvalidBallRadius(f32),

    #[error("ball radius {radius} is too large for field height {field_height}")]
    BallTooLarge { radius: f32, field_height: f32 },

    #[error("winning score must be at least 1")]
    InvalidWinningScore,

    #[error("initial ball speed {0} must be positive")]
    InvalidInitialSpeed(f32),

    #[error("max ball speed {max} is below initial speed {initial}")]
    MaxBelowInitial { max: f32, initial: f32 },

    #[error("{name} must be finite and non-negative, got {value}")]
    Negative { name: &'static str, value: f32 },

    #[error("power-up chance {0} is outside [0, 1]")]
    InvalidChance(f64),

    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Tuning for one match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    // === Playfield ===
    pub field_width: f32,
    pub field_height: f32,

    // === Paddles ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub player_paddle_speed: f32,
    pub ai_paddle_speed: f32,
    /// Fraction of the ideal tracking step the AI takes (keeps it beatable)
    pub ai_reaction: f32,

    // === Ball ===
    pub ball_radius: f32,
    pub initial_ball_speed: f32,
    pub max_ball_speed: f32,
    /// Speed multiplier gained per paddle hit
    pub hit_speedup: f32,
    pub deflection_factor: f32,
    pub serve_spread: f32,

    // === Scoring ===
    pub winning_score: u32,

    // === Effects ===
    pub power_up_chance: f64,
    pub max_particles: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            player_paddle_speed: PLAYER_PADDLE_SPEED,
            ai_paddle_speed: AI_PADDLE_SPEED,
            ai_reaction: AI_REACTION,

            ball_radius: BALL_RADIUS,
            initial_ball_speed: BALL_START_SPEED,
            max_ball_speed: BALL_MAX_SPEED,
            hit_speedup: HIT_SPEEDUP,
            deflection_factor: DEFLECTION_FACTOR,
            serve_spread: SERVE_SPREAD,

            winning_score: WINNING_SCORE,

            power_up_chance: POWER_UP_CHANCE,
            max_particles: MAX_PARTICLES,
        }
    }
}

impl MatchConfig {
    /// Parse a (possibly partial) JSON config; missing fields keep defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every setup-time contract the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |value: f32| value.is_finite() && value > 0.0;
        if !(positive(self.field_width) && positive(self.field_height)) {
            return Err(ConfigError::InvalidField {
                width: self.field_width,
                height: self.field_height,
            });
        }
        if !(self.paddle_height > 0.0 && self.paddle_height < self.field_height) {
            return Err(ConfigError::InvalidPaddleHeight {
                height: self.paddle_height,
                field_height: self.field_height,
            });
        }
        if !positive(self.paddle_width) {
            return Err(ConfigError::InvalidPaddleWidth(self.paddle_width));
        }
        if !positive(self.ball_radius) {
            return Err(ConfigError::InvalidBallRadius(self.ball_radius));
        }
        if 2.0 * self.ball_radius >= self.field_height {
            return Err(ConfigError::BallTooLarge {
                radius: self.ball_radius,
                field_height: self.field_height,
            });
        }
        // Both paddle faces plus the ball must leave room in the middle
        if 2.0 * (self.paddle_width + self.ball_radius) >= self.field_width {
            return Err(ConfigError::PaddlesOverlap(self.field_width));
        }
        if self.winning_score == 0 {
            return Err(ConfigError::InvalidWinningScore);
        }
        if !positive(self.initial_ball_speed) {
            return Err(ConfigError::InvalidInitialSpeed(self.initial_ball_speed));
        }
        if !(self.max_ball_speed.is_finite() && self.max_ball_speed >= self.initial_ball_speed)
        {
            return Err(ConfigError::MaxBelowInitial {
                max: self.max_ball_speed,
                initial: self.initial_ball_speed,
            });
        }
        for (name, value) in [
            ("player_paddle_speed", self.player_paddle_speed),
            ("ai_paddle_speed", self.ai_paddle_speed),
            ("ai_reaction", self.ai_reaction),
            ("hit_speedup", self.hit_speedup),
            ("deflection_factor", self.deflection_factor),
            ("serve_spread", self.serve_spread),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Negative { name, value });
            }
        }
        if !(0.0..=1.0).contains(&self.power_up_chance) {
            return Err(ConfigError::InvalidChance(self.power_up_chance));
        }
        Ok(())
    }

    /// Top edge of a vertically centred paddle
    pub fn centered_paddle_y(&self) -> f32 {
        (self.field_height - self.paddle_height) / 2.0
    }

    /// Lowest legal paddle top edge
    pub fn paddle_max_y(&self) -> f32 {
        self.field_height - self.paddle_height
    }
}
