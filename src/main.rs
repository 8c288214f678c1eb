//! Epic Pong headless runner
//!
//! Plays a match without a renderer: the left paddle is driven by a simple
//! ball-chasing script through the same control interface a keyboard would
//! use, the right paddle by the built-in AI.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use epic_pong::sim::{Direction, Side};
use epic_pong::{Engine, MatchConfig};

/// Play a headless Epic Pong match: scripted player against the AI
#[derive(Parser, Debug)]
#[command(name = "epic-pong", version, long_about = None)]
struct Cli {
    /// JSON match config; missing fields keep their defaults
    config: Option<PathBuf>,

    /// Frame budget before giving up on the match
    #[arg(long, default_value_t = DEFAULT_FRAMES)]
    frames: u32,

    /// RNG seed (entropy when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Dump the final snapshot as JSON
    #[arg(long)]
    json: bool,
}

/// Default frame budget: ten minutes at 60 fps
const DEFAULT_FRAMES: u32 = 60 * 60 * 10;

fn load_config(path: Option<&Path>) -> Result<MatchConfig, String> {
    let Some(path) = path else {
        return Ok(MatchConfig::default());
    };
    let json =
        std::fs::read_to_string(path).map_err(|e| format!("{}: {e}", path.display()))?;
    MatchConfig::from_json(&json).map_err(|e| format!("{}: {e}", path.display()))
}

/// Hold up/down so the paddle centre chases the ball
fn steer_player(engine: &mut Engine) {
    let state = engine.snapshot();
    let target = state.ball.pos.y;
    let center = state.player_paddle.center_y();
    let deadzone = state.player_paddle.height / 4.0;
    let (up, down) = (target < center - deadzone, target > center + deadzone);
    engine.set_human_control(Direction::Up, up);
    engine.set_human_control(Direction::Down, down);
}

fn run(cli: Cli) -> Result<(), String> {
    let config = load_config(cli.config.as_deref())?;
    let mut engine = match cli.seed {
        Some(seed) => Engine::with_seed(config, seed),
        None => Engine::new(config),
    }
    .map_err(|e| e.to_string())?;

    engine.start_match();
    let mut frames = 0;
    while frames < cli.frames {
        steer_player(&mut engine);
        if !engine.tick() {
            break;
        }
        frames += 1;
    }

    let state = engine.snapshot();
    let m = &state.match_state;
    match m.winner() {
        Some(winner) => log::info!("{} wins after {} frames", winner, frames),
        None => log::info!("Frame budget exhausted after {} frames", frames),
    }

    if cli.json {
        let json = serde_json::to_string_pretty(state).map_err(|e| e.to_string())?;
        println!("{json}");
    } else {
        println!(
            "{} {} - {} {}",
            Side::Player,
            m.score(Side::Player),
            m.score(Side::Ai),
            Side::Ai
        );
        println!(
            "Hits: {}  Combo: {}{}  Speed: {}",
            m.total_hits,
            m.combo,
            if m.on_fire() { " (on fire)" } else { "" },
            m.current_speed(engine.config())
        );
        println!(
            "Power-ups: {}  Particles: {}",
            m.power_ups.len(),
            state.particles.len()
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Epic Pong (headless) starting...");

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_defaults_and_flags() {
        let cli = Cli::try_parse_from(["epic-pong"]).unwrap();
        assert_eq!(cli.frames, DEFAULT_FRAMES);
        assert!(cli.config.is_none() && cli.seed.is_none() && !cli.json);

        let cli = Cli::try_parse_from([
            "epic-pong", "match.json", "--frames", "120", "--seed", "7", "--json",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("match.json")));
        assert_eq!((cli.frames, cli.seed, cli.json), (120, Some(7), true));

        assert!(Cli::try_parse_from(["epic-pong", "--frames", "lots"]).is_err());
    }
}
