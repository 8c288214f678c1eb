//! Simulation driver
//!
//! Owns the match for its whole lifetime and is what a renderer/input layer
//! talks to. The frame scheduler calls [`Engine::tick`] once per frame;
//! `&mut self` rules out overlapping ticks, and pausing simply makes further
//! ticks no-ops.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::{ConfigError, MatchConfig};
use crate::sim::{
    Direction, MatchPhase, Side, SimulationState, TickInput, serve_ball, tick,
};

/// Match driver: state machine transitions, held controls and the RNG
#[derive(Debug, Clone)]
pub struct Engine {
    config: MatchConfig,
    state: SimulationState,
    input: TickInput,
    rng: Pcg32,
}

impl Engine {
    /// Validate `config` and set up a fresh match seeded from entropy
    pub fn new(config: MatchConfig) -> Result<Self, ConfigError> {
        Self::with_seed(config, rand::random())
    }

    /// Like [`Engine::new`] with an explicit RNG seed
    pub fn with_seed(config: MatchConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = SimulationState::new(&config);
        log::info!(
            "Match ready: {}x{} field, first to {}",
            config.field_width,
            config.field_height,
            config.winning_score
        );
        Ok(Self {
            config,
            state,
            input: TickInput::default(),
            rng: Pcg32::seed_from_u64(seed),
        })
    }

    /// Begin (or resume) play
    pub fn start_match(&mut self) {
        if self.state.match_state.start() {
            log::info!("Match started");
        }
    }

    /// Pause a running match or resume a paused one
    pub fn pause_toggle(&mut self) {
        if self.state.match_state.toggle_pause() {
            log::info!(
                "Match {}",
                if self.state.match_state.is_paused() {
                    "paused"
                } else {
                    "resumed"
                }
            );
        }
    }

    /// Back to `NotStarted` with a fresh ball, centred paddles, zeroed
    /// scores and no particles or power-ups
    pub fn reset_match(&mut self) {
        let toward = if self.rng.random_bool(0.5) {
            Side::Ai
        } else {
            Side::Player
        };
        let ball = serve_ball(&mut self.rng, toward, &self.config);
        self.state = SimulationState::with_ball(&self.config, ball);
        self.input = TickInput::default();
        log::info!("Match reset");
    }

    /// Feed the human controller
    pub fn set_human_control(&mut self, direction: Direction, active: bool) {
        self.input.controls.set(direction, active);
    }

    /// Advance one frame. Returns whether the simulation actually moved.
    pub fn tick(&mut self) -> bool {
        if self.state.match_state.phase != MatchPhase::Playing {
            return false;
        }
        self.state = tick(&self.state, &self.input, &self.config, &mut self.rng);
        true
    }

    /// Run up to `frames` ticks, stopping early once play stops
    pub fn run_frames(&mut self, frames: u32) -> u32 {
        let mut ran = 0;
        while ran < frames && self.tick() {
            ran += 1;
        }
        ran
    }

    /// Read-only view of everything a renderer needs
    pub fn snapshot(&self) -> &SimulationState {
        &self.state
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }
}
