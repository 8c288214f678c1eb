//! Entity model and the composite simulation state
//!
//! Plain data. Behaviour lives in the sibling modules.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::match_state::MatchState;
use super::particles::ParticleSystem;
use crate::config::MatchConfig;
use crate::consts::TRAIL_LENGTH;

/// One side of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Human, left paddle
    Player,
    /// Computer, right paddle
    Ai,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Player => "Player",
            Side::Ai => "AI",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trail sample for ball rendering
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrailPoint {
    pub pos: Vec2,
    /// 1.0 for the newest sample, fading linearly to 0.0 for the oldest slot
    pub opacity: f32,
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Recent positions (newest first), at most `TRAIL_LENGTH`
    pub trail: Vec<TrailPoint>,
}

impl Ball {
    /// Fresh ball at the field centre
    pub fn centered(config: &MatchConfig, vel: Vec2) -> Self {
        Self {
            pos: Vec2::new(config.field_width / 2.0, config.field_height / 2.0),
            vel,
            trail: Vec::with_capacity(TRAIL_LENGTH),
        }
    }

    /// Record a position at the head of the trail and refresh every opacity
    pub fn record_trail(&mut self, pos: Vec2) {
        self.trail.insert(0, TrailPoint { pos, opacity: 1.0 });
        self.trail.truncate(TRAIL_LENGTH);

        let span = (TRAIL_LENGTH - 1) as f32;
        for (i, point) in self.trail.iter_mut().enumerate() {
            point.opacity = (span - i as f32) / span;
        }
    }
}

/// A paddle. `y` is the top edge; the x position is fixed by its side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub y: f32,
    pub height: f32,
    pub width: f32,
    /// Maximum travel per tick
    pub speed: f32,
}

impl Paddle {
    /// Vertically centred paddle for the given side
    pub fn new(config: &MatchConfig, side: Side) -> Self {
        let speed = match side {
            Side::Player => config.player_paddle_speed,
            Side::Ai => config.ai_paddle_speed,
        };
        Self {
            y: config.centered_paddle_y(),
            height: config.paddle_height,
            width: config.paddle_width,
            speed,
        }
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Move by `dy`, keeping the paddle fully on the field
    pub fn shift(&mut self, dy: f32, field_height: f32) {
        self.y = (self.y + dy).clamp(0.0, field_height - self.height);
    }
}

/// Particle colour tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleColor {
    /// Wall impacts
    Wall,
    /// Player paddle hits and player goals
    Player,
    /// AI paddle hits and AI goals
    Ai,
}

impl ParticleColor {
    /// 0xRRGGBB
    pub fn rgb(&self) -> u32 {
        match self {
            ParticleColor::Wall => 0x4ade80,
            ParticleColor::Player => 0x3b82f6,
            ParticleColor::Ai => 0xef4444,
        }
    }
}

impl From<Side> for ParticleColor {
    fn from(side: Side) -> Self {
        match side {
            Side::Player => ParticleColor::Player,
            Side::Ai => ParticleColor::Ai,
        }
    }
}

/// A particle for visual effects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// 0-1, decreases every tick
    pub life: f32,
    pub color: ParticleColor,
    pub size: f32,
}

/// Power-up marker types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    Speed,
    Size,
    MultiBall,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 3] = [PowerUpKind::Speed, PowerUpKind::Size, PowerUpKind::MultiBall];

    /// Marker fill colour, 0xRRGGBB
    pub fn rgb(&self) -> u32 {
        match self {
            PowerUpKind::Speed => 0xf59e0b,
            PowerUpKind::Size => 0x8b5cf6,
            PowerUpKind::MultiBall => 0x10b981,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PowerUpKind::Speed => "speed",
            PowerUpKind::Size => "size",
            PowerUpKind::MultiBall => "multiball",
        }
    }
}

/// A decorative power-up marker. Persists until the match is reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerUpMarker {
    pub id: u32,
    pub pos: Vec2,
    pub kind: PowerUpKind,
}

/// Something that happened during the last tick (for audio/render hooks)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MatchEvent {
    WallBounce { pos: Vec2 },
    PaddleHit { side: Side, pos: Vec2, speed: f32 },
    PowerUpSpawned { id: u32, kind: PowerUpKind },
    Goal { scorer: Side },
    MatchWon { winner: Side },
}

/// Everything the simulation owns for one match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    pub ball: Ball,
    /// Left paddle (human)
    pub player_paddle: Paddle,
    /// Right paddle (AI)
    pub ai_paddle: Paddle,
    pub particles: ParticleSystem,
    pub match_state: MatchState,
    /// Events emitted by the most recent tick
    pub events: Vec<MatchEvent>,
    /// Ticks simulated since the last reset
    pub tick_count: u64,
    /// Next entity ID
    next_id: u32,
}

impl SimulationState {
    /// Initial state: centred paddles, ball served toward the AI
    pub fn new(config: &MatchConfig) -> Self {
        Self::with_ball(
            config,
            Ball::centered(config, Vec2::new(config.initial_ball_speed, 2.0)),
        )
    }

    /// Initial state around a specific ball
    pub fn with_ball(config: &MatchConfig, ball: Ball) -> Self {
        Self {
            ball,
            player_paddle: Paddle::new(config, Side::Player),
            ai_paddle: Paddle::new(config, Side::Ai),
            particles: ParticleSystem::new(Vec::new(), config.max_particles),
            match_state: MatchState::default(),
            events: Vec::new(),
            tick_count: 0,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Player => &self.player_paddle,
            Side::Ai => &self.ai_paddle,
        }
    }
}
