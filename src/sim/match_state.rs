//! Match progression: scores, combo, hit count and win detection

use serde::{Deserialize, Serialize};

use super::difficulty::ball_speed;
use super::state::{PowerUpMarker, Side};
use crate::config::MatchConfig;

/// Current phase of the match
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Waiting for the start action
    #[default]
    NotStarted,
    /// Active gameplay; the only phase in which ticks run
    Playing,
    /// Suspended without losing any state
    Paused,
    /// Terminal until reset
    Won(Side),
}

/// Scoreboard and progression
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    pub player_score: u32,
    pub ai_score: u32,
    /// Player hits since the AI last scored
    pub combo: u32,
    /// All paddle hits since reset (drives difficulty)
    pub total_hits: u32,
    pub phase: MatchPhase,
    /// Decorative markers spawned by player hits
    pub power_ups: Vec<PowerUpMarker>,
}

impl MatchState {
    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            MatchPhase::Won(side) => Some(side),
            _ => None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == MatchPhase::Playing
    }

    pub fn is_paused(&self) -> bool {
        self.phase == MatchPhase::Paused
    }

    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player_score,
            Side::Ai => self.ai_score,
        }
    }

    /// Enter `Playing` from `NotStarted` or `Paused`. Returns whether it did.
    pub fn start(&mut self) -> bool {
        match self.phase {
            MatchPhase::NotStarted | MatchPhase::Paused => {
                self.phase = MatchPhase::Playing;
                true
            }
            MatchPhase::Playing => false,
            MatchPhase::Won(winner) => {
                log::warn!("Start ignored: match already won by {}", winner);
                false
            }
        }
    }

    /// Flip between `Playing` and `Paused`. Returns whether anything changed.
    pub fn toggle_pause(&mut self) -> bool {
        match self.phase {
            MatchPhase::Playing => self.phase = MatchPhase::Paused,
            MatchPhase::Paused => self.phase = MatchPhase::Playing,
            other => {
                log::warn!("Pause ignored in {:?}", other);
                return false;
            }
        }
        true
    }

    /// Count a paddle hit
    pub fn record_hit(&mut self, side: Side) {
        self.total_hits += 1;
        if side == Side::Player {
            self.combo += 1;
        }
    }

    /// Award a point to `scorer`; returns the winner if this point ends the match
    pub fn award_point(&mut self, scorer: Side, config: &MatchConfig) -> Option<Side> {
        if !self.is_playing() {
            return None;
        }

        let score = match scorer {
            Side::Player => &mut self.player_score,
            Side::Ai => {
                self.combo = 0;
                &mut self.ai_score
            }
        };
        *score += 1;

        if *score >= config.winning_score {
            self.phase = MatchPhase::Won(scorer);
            Some(scorer)
        } else {
            None
        }
    }

    /// Ball speed a paddle hit would produce now, rounded to one decimal for display
    pub fn current_speed(&self, config: &MatchConfig) -> f32 {
        (ball_speed(self.total_hits, config) * 10.0).round() / 10.0
    }

    /// Hot streak indicator for the scoreboard
    pub fn on_fire(&self) -> bool {
        self.combo > 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing() -> MatchState {
        MatchState {
            phase: MatchPhase::Playing,
            ..Default::default()
        }
    }

    #[test]
    fn test_transitions() {
        let mut state = MatchState::default();
        assert_eq!(state.phase, MatchPhase::NotStarted);
        assert!(!state.toggle_pause());

        assert!(state.start());
        assert!(state.is_playing());
        assert!(!state.start());

        assert!(state.toggle_pause());
        assert!(state.is_paused());
        assert!(state.toggle_pause());
        assert!(state.is_playing());

        assert!(state.toggle_pause());
        assert!(state.start());
        assert!(state.is_playing());
    }

    #[test]
    fn test_ai_point_resets_combo() {
        let config = MatchConfig::default();
        let mut state = playing();
        state.record_hit(Side::Player);
        state.record_hit(Side::Player);
        state.record_hit(Side::Ai);
        assert_eq!(state.combo, 2);
        assert_eq!(state.total_hits, 3);

        state.award_point(Side::Player, &config);
        assert_eq!(state.combo, 2);
        state.award_point(Side::Ai, &config);
        assert_eq!(state.combo, 0);
        assert_eq!(state.total_hits, 3);
        assert_eq!((state.player_score, state.ai_score), (1, 1));
    }

    #[test]
    fn test_won_exactly_at_threshold() {
        let config = MatchConfig::default();
        let mut state = playing();
        for _ in 0..config.winning_score - 1 {
            assert_eq!(state.award_point(Side::Ai, &config), None);
            assert_eq!(state.winner(), None);
        }
        assert_eq!(state.award_point(Side::Ai, &config), Some(Side::Ai));
        assert_eq!(state.winner(), Some(Side::Ai));
        assert_eq!(state.phase, MatchPhase::Won(Side::Ai));

        // Terminal
        assert_eq!(state.award_point(Side::Player, &config), None);
        assert_eq!(state.player_score, 0);
        assert!(!state.start());
        assert!(!state.toggle_pause());
        assert_eq!(state.phase, MatchPhase::Won(Side::Ai));
    }

    #[test]
    fn test_no_points_while_paused() {
        let config = MatchConfig::default();
        let mut state = playing();
        state.toggle_pause();
        assert_eq!(state.award_point(Side::Player, &config), None);
        assert_eq!(state.player_score, 0);
    }

    #[test]
    fn test_scoreboard_helpers() {
        let config = MatchConfig::default();
        let mut state = playing();
        assert_eq!(state.current_speed(&config), 3.0);
        for _ in 0..4 {
            state.record_hit(Side::Player);
        }
        assert!(state.on_fire());
        assert_eq!(state.current_speed(&config), 4.2);
        state.total_hits = 100;
        assert_eq!(state.current_speed(&config), 8.0);
    }
}
