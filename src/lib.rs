//! Rally Pong - classic two-paddle Pong with an adaptive computer opponent
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, scoring, match state)
//! - `config`: Immutable startup configuration
//! - `platform`: Input source and presentation adapter (terminal)
//! - `ui`: Static screen text layout

pub mod config;
pub mod platform;
pub mod sim;
pub mod ui;

pub use config::Config;

/// Reference playfield constants
///
/// `Config::default()` mirrors these; the rest of the crate reads tuning
/// through `Config` so a host can override any of it at startup.
pub mod consts {
    /// Fixed simulation tick rate (Hz)
    pub const TICK_RATE: f32 = 60.0;

    /// Playfield dimensions (playfield units, origin top-left, y down)
    pub const FIELD_WIDTH: f32 = 1000.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 105.0;
    pub const PADDLE_SPEED: f32 = 9.0;
    /// Horizontal position of the left paddle column
    pub const LEFT_PADDLE_X: f32 = 10.0;
    /// Offset of the right paddle column from the right wall
    pub const RIGHT_PADDLE_INSET: f32 = 20.0;

    /// Ball defaults
    pub const BALL_SPEED: f32 = 6.5;
    pub const BALL_RADIUS: f32 = 10.0;
    /// Multiplicative horizontal speed growth while the ball is within one
    /// paddle-width of a side wall. Applied every tick spent in the zone.
    pub const SPEED_GROWTH: f32 = 1.05;

    /// First side to reach this score wins the match
    pub const WINNING_SCORE: u32 = 6;
}
