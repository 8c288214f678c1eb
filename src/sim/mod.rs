//! Simulation module
//!
//! All gameplay logic lives here. No rendering, input capture or timing:
//! - One call to `tick` is one frame
//! - `tick` takes the previous state and returns the next
//! - Randomness comes in through the caller's RNG

pub mod controller;
pub mod difficulty;
pub mod match_state;
pub mod particles;
pub mod physics;
pub mod powerup;
pub mod state;
pub mod tick;

pub use controller::{ControlState, Direction, drive_ai, drive_human};
pub use difficulty::{ball_speed, speed_multiplier};
pub use match_state::{MatchPhase, MatchState};
pub use particles::ParticleSystem;
pub use physics::{deflect, goal_scorer, paddle_contact, serve_ball, wall_contact};
pub use state::{
    Ball, MatchEvent, Paddle, Particle, ParticleColor, PowerUpKind, PowerUpMarker, Side,
    SimulationState, TrailPoint,
};
pub use tick::{TickInput, tick};
