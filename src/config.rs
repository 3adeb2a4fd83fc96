//! Immutable startup configuration
//!
//! Loaded once by the host before the control loop starts and shared
//! read-only with every component. The simulation core never touches a file;
//! JSON loading lives behind `from_json` for hosts that want overrides.

use serde::{Deserialize, Serialize};

use crate::consts;

/// Playfield and match configuration
///
/// Defaults mirror the reference constants in [`crate::consts`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Playfield width (playfield units)
    pub field_width: f32,
    /// Playfield height (playfield units)
    pub field_height: f32,
    /// Paddle width (the near-face column the ball reflects off)
    pub paddle_width: f32,
    /// Paddle height
    pub paddle_height: f32,
    /// Vertical paddle speed per tick
    pub paddle_speed: f32,
    /// Horizontal position of the left paddle column
    pub left_paddle_x: f32,
    /// Offset of the right paddle column from the right wall
    pub right_paddle_inset: f32,
    /// Base ball speed per axis at reset
    pub ball_speed: f32,
    /// Ball radius
    pub ball_radius: f32,
    /// Per-tick horizontal speed multiplier near a side wall
    pub speed_growth: f32,
    /// Score a side needs to win the match
    pub winning_score: u32,
    /// Simulation tick rate (Hz)
    pub tick_rate: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: consts::FIELD_WIDTH,
            field_height: consts::FIELD_HEIGHT,
            paddle_width: consts::PADDLE_WIDTH,
            paddle_height: consts::PADDLE_HEIGHT,
            paddle_speed: consts::PADDLE_SPEED,
            left_paddle_x: consts::LEFT_PADDLE_X,
            right_paddle_inset: consts::RIGHT_PADDLE_INSET,
            ball_speed: consts::BALL_SPEED,
            ball_radius: consts::BALL_RADIUS,
            speed_growth: consts::SPEED_GROWTH,
            winning_score: consts::WINNING_SCORE,
            tick_rate: consts::TICK_RATE,
        }
    }
}

impl Config {
    /// Parse a configuration from JSON. Missing fields fall back to defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Horizontal position of the right paddle column
    pub fn right_paddle_x(&self) -> f32 {
        self.field_width - self.right_paddle_inset
    }

    /// Exact playfield center
    pub fn center(&self) -> glam::Vec2 {
        glam::Vec2::new(self.field_width / 2.0, self.field_height / 2.0)
    }

    /// Duration of one simulation tick in seconds
    pub fn tick_dt(&self) -> f32 {
        1.0 / self.tick_rate
    }
}
