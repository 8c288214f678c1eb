//! Epic Pong - frame-driven paddle-and-ball simulation core
//!
//! Core modules:
//! - `sim`: Simulation (physics, controllers, particles, match state)
//! - `engine`: Per-frame driver and the interface exposed to renderers/input
//! - `config`: Match tuning with construction-time validation

pub mod config;
pub mod engine;
pub mod sim;

pub use config::{ConfigError, MatchConfig};
pub use engine::Engine;

/// Reference tuning values (the defaults of [`MatchConfig`])
pub mod consts {
    /// Playfield dimensions (pixels, origin at top-left, +y down)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 400.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    /// Human paddle travel per tick
    pub const PLAYER_PADDLE_SPEED: f32 = 6.0;
    /// AI paddle travel per tick (before the reaction factor)
    pub const AI_PADDLE_SPEED: f32 = 4.0;
    /// Fraction of the ideal step the AI actually takes
    pub const AI_REACTION: f32 = 0.8;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    /// Serve speed (pixels per tick)
    pub const BALL_START_SPEED: f32 = 3.0;
    /// Hard cap on horizontal ball speed
    pub const BALL_MAX_SPEED: f32 = 8.0;
    /// Multiplier increment per paddle hit
    pub const HIT_SPEEDUP: f32 = 0.1;
    /// Vertical speed at the paddle tip, as a fraction of horizontal speed
    pub const DEFLECTION_FACTOR: f32 = 0.8;
    /// Full width of the random vertical serve component
    pub const SERVE_SPREAD: f32 = 3.0;

    /// First side to reach this many points wins
    pub const WINNING_SCORE: u32 = 7;

    /// Number of trail samples kept behind the ball
    pub const TRAIL_LENGTH: usize = 9;

    /// Chance of a power-up marker per player hit
    pub const POWER_UP_CHANCE: f64 = 0.3;
    /// Markers never spawn closer than this to the field edge
    pub const POWER_UP_INSET: f32 = 20.0;

    /// Particle defaults
    pub const MAX_PARTICLES: usize = 256;
    pub const PARTICLE_DECAY: f32 = 0.02;
    pub const PARTICLE_DAMPING: f32 = 0.98;
    /// Burst velocity range per axis is [-PARTICLE_SPREAD, PARTICLE_SPREAD)
    pub const PARTICLE_SPREAD: f32 = 4.0;
    pub const PARTICLE_MIN_SIZE: f32 = 2.0;
    pub const PARTICLE_MAX_SIZE: f32 = 6.0;

    /// Burst sizes
    pub const WALL_BURST: usize = 5;
    pub const PADDLE_BURST: usize = 8;
    pub const GOAL_BURST: usize = 15;
    /// Goal bursts appear this far in from the side edge
    pub const GOAL_BURST_INSET: f32 = 50.0;
}
