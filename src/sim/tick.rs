//! Fixed timestep simulation tick
//!
//! One call advances the match by exactly one step: drain control events,
//! apply the phase transition they imply, and (only while Playing) run the
//! entity updates, collision/scoring resolution, and the opponent policy.

use crate::config::Config;

use super::ai::{self, Difficulty};
use super::collision;
use super::state::{GameEvent, GamePhase, GameState, Side};

/// Discrete control events consumed by the core, in arrival order.
///
/// This is the whole input contract; the core does not know whether they
/// came from a keyboard, a script, or a test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    /// Terminate the match loop, valid in any phase
    Quit,
    /// Start a new match from NotStarted or GameOver
    StartOrRestart,
    /// Human paddle begins moving up
    MoveUpBegin,
    /// Human paddle stops moving up
    MoveUpEnd,
    /// Human paddle begins moving down
    MoveDownBegin,
    /// Human paddle stops moving down
    MoveDownEnd,
}

/// Advance the match by one fixed tick.
///
/// Order within the tick: input events, then (in Playing only) ball and
/// paddle motion, paddle reflection, out-of-bounds scoring, the win check,
/// and finally the opponent controller setting its intent for the next tick.
/// A `Quit` event stops event processing immediately; nothing simulates
/// afterward. Events with no transition defined for the current phase are
/// no-ops.
pub fn tick(state: &mut GameState, events: &[ControlEvent], config: &Config) {
    state.events.clear();

    for &event in events {
        match event {
            ControlEvent::Quit => {
                log::info!("quit requested");
                state.exit_requested = true;
                return;
            }
            ControlEvent::StartOrRestart => {
                if matches!(state.phase, GamePhase::NotStarted | GamePhase::GameOver) {
                    state.start_match(config);
                    log::info!("match started (seed {})", state.seed);
                }
            }
            ControlEvent::MoveUpBegin => state.left_paddle.dy = -config.paddle_speed,
            ControlEvent::MoveDownBegin => state.left_paddle.dy = config.paddle_speed,
            // Either release halts the paddle, matching the reference input
            // handling (any movement-key release zeroes intent)
            ControlEvent::MoveUpEnd | ControlEvent::MoveDownEnd => state.left_paddle.dy = 0.0,
        }
    }

    // Entities are frozen outside of Playing
    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;

    state.ball.advance(config);
    state.left_paddle.advance(config);
    state.right_paddle.advance(config);

    collision::resolve_paddle_hits(&mut state.ball, &state.left_paddle, &state.right_paddle);

    if let Some(scorer) = collision::out_of_bounds(&state.ball, config) {
        match scorer {
            Side::Left => state.left_score += 1,
            Side::Right => state.right_score += 1,
        }
        state.ball.reset(config, &mut state.rng);
        state.difficulty = Difficulty::for_scores(state.left_score, state.right_score);
        state.events.push(GameEvent::PointScored(scorer));
        log::info!(
            "point for {:?}: {} - {} (opponent tier {})",
            scorer,
            state.left_score,
            state.right_score,
            state.difficulty.tier()
        );
    }

    // Win check runs after scoring resolution; only one side can score per
    // tick, so the threshold is reached by exactly one side
    if state.left_score >= config.winning_score || state.right_score >= config.winning_score {
        let winner = if state.left_score > state.right_score {
            Side::Left
        } else {
            Side::Right
        };
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::MatchOver(winner));
        log::info!("match over, {:?} wins", winner);
        return;
    }

    // Opponent intent applies on the next tick's paddle advance
    ai::drive_opponent(
        &mut state.right_paddle,
        &state.ball,
        state.difficulty,
        config,
        &mut state.rng,
    );
}
