//! Rally Pong entry point
//!
//! Wires the terminal input source and presenter around the fixed-rate
//! control loop. Each pass drains pending input, advances the simulation by
//! exactly one tick, draws, and sleeps until the next tick boundary.

use std::io;
use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use rally_pong::Config;
use rally_pong::platform::{InputSource, Presenter, TerminalInput, TerminalPresenter};
use rally_pong::platform::terminal::TerminalGuard;
use rally_pong::sim::{GameState, tick};

/// Read the optional JSON config override; anything wrong falls back to
/// defaults with a warning rather than refusing to start.
fn load_config() -> Config {
    let Ok(path) = std::env::var("RALLY_PONG_CONFIG") else {
        return Config::default();
    };
    let json = match std::fs::read_to_string(&path) {
        Ok(json) => json,
        Err(err) => {
            log::warn!("could not read config {path}: {err}; using defaults");
            return Config::default();
        }
    };
    match Config::from_json(&json) {
        Ok(config) => {
            log::info!("loaded config from {path}");
            config
        }
        Err(err) => {
            log::warn!("invalid config {path}: {err}; using defaults");
            Config::default()
        }
    }
}

fn main() -> io::Result<()> {
    env_logger::init();

    let config = load_config();
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("rally-pong starting (seed {seed})");

    let guard = TerminalGuard::new()?;
    let mut input = TerminalInput::new(guard.release_events());
    let mut presenter = TerminalPresenter::new(config.clone());
    let mut state = GameState::new(seed, &config);

    let tick_dt = Duration::from_secs_f32(config.tick_dt());
    loop {
        let frame_start = Instant::now();

        let events = input.poll_events(state.phase)?;
        tick(&mut state, &events, &config);
        if state.exit_requested {
            break;
        }

        presenter.present(&state.snapshot())?;

        // Fixed-rate pacing: yield whatever remains of this tick
        if let Some(remaining) = tick_dt.checked_sub(frame_start.elapsed()) {
            thread::sleep(remaining);
        }
    }

    drop(guard);
    log::info!("rally-pong exited cleanly");
    Ok(())
}
