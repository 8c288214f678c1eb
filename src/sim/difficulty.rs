//! Adaptive difficulty: the ball speeds up with every paddle hit

use crate::config::MatchConfig;

/// Ball speed multiplier after `total_hits` paddle hits.
///
/// Grows linearly by `hit_speedup` per hit and saturates at
/// `max_ball_speed / initial_ball_speed`.
pub fn speed_multiplier(total_hits: u32, config: &MatchConfig) -> f32 {
    let cap = config.max_ball_speed / config.initial_ball_speed;
    (1.0 + total_hits as f32 * config.hit_speedup).min(cap)
}

/// Horizontal ball speed after `total_hits` paddle hits
pub fn ball_speed(total_hits: u32, config: &MatchConfig) -> f32 {
    (config.initial_ball_speed * speed_multiplier(total_hits, config)).min(config.max_ball_speed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_starts_at_one() {
        let config = MatchConfig::default();
        assert_eq!(speed_multiplier(0, &config), 1.0);
        assert_eq!(ball_speed(0, &config), config.initial_ball_speed);
    }

    #[test]
    fn test_linear_before_cap() {
        let config = MatchConfig::default();
        assert!((speed_multiplier(5, &config) - 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_saturates_at_cap() {
        let config = MatchConfig::default();
        let cap = config.max_ball_speed / config.initial_ball_speed;
        assert_eq!(speed_multiplier(20, &config), cap);
        assert_eq!(speed_multiplier(10_000, &config), cap);
        assert!(ball_speed(10_000, &config) <= config.max_ball_speed);
    }

    proptest! {
        #[test]
        fn prop_monotonic_and_bounded(hits in 0u32..5_000) {
            let config = MatchConfig::default();
            let cap = config.max_ball_speed / config.initial_ball_speed;
            let here = speed_multiplier(hits, &config);
            let next = speed_multiplier(hits + 1, &config);
            prop_assert!(next >= here);
            prop_assert!(here <= cap);
            prop_assert!(here >= 1.0);
        }
    }
}
