//! Rule-based opponent controller
//!
//! The computer paddle runs a per-tick reactive policy: each tick it draws a
//! uniform value and, with a tier-dependent probability, moves toward the
//! ball at full paddle speed; otherwise it holds still for that tick. The
//! draw is independent every tick, so a "missed" reaction corrects itself on
//! the very next one.
//!
//! Difficulty rubber-bands against the human: the opponent gets weaker while
//! it is winning or tied and stronger as the human pulls ahead.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::Config;

use super::state::{Ball, Paddle};

/// Opponent difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Difficulty {
    /// Tier 1: reacts correctly 40% of ticks
    #[default]
    Easy,
    /// Tier 2: reacts correctly 60% of ticks
    Medium,
    /// Tier 3: reacts correctly 80% of ticks
    Hard,
}

impl Difficulty {
    /// Probability per tick that the opponent reacts toward the ball
    pub fn reaction_probability(&self) -> f64 {
        match self {
            Difficulty::Easy => 0.4,
            Difficulty::Medium => 0.6,
            Difficulty::Hard => 0.8,
        }
    }

    /// Tier number (1-3) for display
    pub fn tier(&self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    /// Regrade the tier from a score pair. Invoked only on scoring events.
    ///
    /// Tier 1 while the opponent is ahead or tied, tier 2 while the human
    /// leads by at most 2, tier 3 once the human leads by more.
    pub fn for_scores(left_score: u32, right_score: u32) -> Self {
        if right_score >= left_score {
            Difficulty::Easy
        } else if left_score - right_score <= 2 {
            Difficulty::Medium
        } else {
            Difficulty::Hard
        }
    }
}

/// Set the opponent paddle's vertical intent for the next tick.
///
/// One independent coin flip per tick: below the tier's reaction probability
/// the paddle heads toward the ball (down when the ball is below the paddle
/// center, up otherwise); above it the paddle holds still.
pub fn drive_opponent(
    paddle: &mut Paddle,
    ball: &Ball,
    difficulty: Difficulty,
    config: &Config,
    rng: &mut impl Rng,
) {
    if rng.random::<f64>() < difficulty.reaction_probability() {
        paddle.dy = if ball.pos.y > paddle.center_y() {
            config.paddle_speed
        } else {
            -config.paddle_speed
        };
    } else {
        paddle.dy = 0.0;
    }
}
