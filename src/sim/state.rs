//! Match state and core simulation types
//!
//! Everything needed to reproduce a match deterministically lives here:
//! entities, scores, phase, and the seeded RNG.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::Config;

use super::ai::Difficulty;

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting on the start screen; no simulation runs
    NotStarted,
    /// Active gameplay
    Playing,
    /// Match decided; frozen until an explicit restart
    GameOver,
}

/// Which side of the net
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Human-controlled paddle
    Left,
    /// Computer-controlled paddle
    Right,
}

/// Something a tick produced that the host may care about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A side scored a point
    PointScored(Side),
    /// A side reached the winning score
    MatchOver(Side),
}

/// The ball
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Create a ball already reset to the center
    pub fn new(config: &Config, rng: &mut impl Rng) -> Self {
        let mut ball = Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius: config.ball_radius,
        };
        ball.reset(config, rng);
        ball
    }

    /// Place the ball at the exact playfield center heading along one of the
    /// four diagonals, each axis sign an independent fair coin.
    pub fn reset(&mut self, config: &Config, rng: &mut impl Rng) {
        self.pos = config.center();
        let sx = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let sy = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        self.vel = Vec2::new(sx * config.ball_speed, sy * config.ball_speed);
    }

    /// Advance one tick: integrate velocity, reflect off the horizontal
    /// walls, and apply the side-zone speed growth.
    ///
    /// Two quirks here are contract, not accident:
    /// - The wall bounce is a post-hoc sign flip after the ball has already
    ///   crossed the boundary, so it can tunnel outside by one frame.
    /// - The speed growth fires on every tick the ball spends within one
    ///   paddle-width of a side wall, not once per crossing. A ball lingering
    ///   in the zone keeps accelerating.
    pub fn advance(&mut self, config: &Config) {
        self.pos += self.vel;

        if !(0.0..=config.field_height).contains(&self.pos.y) {
            self.vel.y = -self.vel.y;
        }

        if self.pos.x <= config.paddle_width
            || self.pos.x >= config.field_width - config.paddle_width
        {
            self.vel.x *= config.speed_growth;
        }
    }
}

/// A paddle: fixed column, vertical motion only
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Paddle {
    /// Horizontal position of the paddle column (fixed per side)
    pub x: f32,
    /// Top edge of the paddle
    pub y: f32,
    /// Vertical velocity intent, one of {-speed, 0, +speed}
    pub dy: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    /// Create a paddle vertically centered at the given column
    pub fn new(x: f32, config: &Config) -> Self {
        Self {
            x,
            y: config.field_height / 2.0 - config.paddle_height / 2.0,
            dy: 0.0,
            width: config.paddle_width,
            height: config.paddle_height,
        }
    }

    /// Advance one tick: apply intent, then clamp into the legal range
    pub fn advance(&mut self, config: &Config) {
        self.y += self.dy;
        self.y = self.y.clamp(0.0, config.field_height - self.height);
    }

    /// Vertical center of the paddle face
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Whether a y coordinate lies strictly within the paddle's vertical span
    pub fn spans_y(&self, y: f32) -> bool {
        self.y < y && y < self.y + self.height
    }
}

/// Complete match state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed the match RNG started from, kept for reproducibility
    pub seed: u64,
    /// Match RNG (ball reset directions, opponent reaction draws)
    pub rng: Pcg32,
    pub ball: Ball,
    /// Human paddle
    pub left_paddle: Paddle,
    /// Computer paddle
    pub right_paddle: Paddle,
    pub left_score: u32,
    pub right_score: u32,
    pub phase: GamePhase,
    /// Current opponent difficulty tier; regraded on every scoring event
    pub difficulty: Difficulty,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events produced by the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Set once a quit signal arrives; the control loop stops on it
    #[serde(skip)]
    pub exit_requested: bool,
}

impl GameState {
    /// Create a fresh match on the start screen
    pub fn new(seed: u64, config: &Config) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let ball = Ball::new(config, &mut rng);
        Self {
            seed,
            rng,
            ball,
            left_paddle: Paddle::new(config.left_paddle_x, config),
            right_paddle: Paddle::new(config.right_paddle_x(), config),
            left_score: 0,
            right_score: 0,
            phase: GamePhase::NotStarted,
            difficulty: Difficulty::default(),
            time_ticks: 0,
            events: Vec::new(),
            exit_requested: false,
        }
    }

    /// Start or restart the match: scores cleared, ball recentered,
    /// difficulty back to the lowest tier.
    pub fn start_match(&mut self, config: &Config) {
        self.left_score = 0;
        self.right_score = 0;
        self.difficulty = Difficulty::default();
        self.ball.reset(config, &mut self.rng);
        self.phase = GamePhase::Playing;
    }

    /// Read-only view of everything the presentation adapter needs
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            ball_pos: self.ball.pos,
            ball_radius: self.ball.radius,
            left_paddle: self.left_paddle,
            right_paddle: self.right_paddle,
            left_score: self.left_score,
            right_score: self.right_score,
            phase: self.phase,
        }
    }
}

/// Per-tick render view handed to the presentation adapter
///
/// Coordinates are playfield units: origin top-left, x right, y down.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Snapshot {
    pub ball_pos: Vec2,
    pub ball_radius: f32,
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
    pub left_score: u32,
    pub right_score: u32,
    pub phase: GamePhase,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn test_rng() -> Pcg32 {
        Pcg32::seed_from_u64(7)
    }

    #[test]
    fn test_ball_reset_centers_and_picks_diagonal() {
        let config = Config::default();
        let mut rng = test_rng();
        let mut ball = Ball::new(&config, &mut rng);

        for _ in 0..32 {
            ball.pos = Vec2::new(123.0, 456.0);
            ball.reset(&config, &mut rng);
            assert_eq!(ball.pos, config.center());
            assert_eq!(ball.vel.x.abs(), config.ball_speed);
            assert_eq!(ball.vel.y.abs(), config.ball_speed);
        }
    }

    #[test]
    fn test_ball_reset_reaches_all_four_diagonals() {
        let config = Config::default();
        let mut rng = test_rng();
        let mut ball = Ball::new(&config, &mut rng);

        let mut seen = std::collections::HashSet::new();
        for _ in 0..64 {
            ball.reset(&config, &mut rng);
            seen.insert((ball.vel.x > 0.0, ball.vel.y > 0.0));
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_ball_wall_bounce_flips_dy_after_crossing() {
        let config = Config::default();
        let mut rng = test_rng();
        let mut ball = Ball::new(&config, &mut rng);

        ball.pos = Vec2::new(500.0, 2.0);
        ball.vel = Vec2::new(6.5, -6.5);
        ball.advance(&config);
        // Crossed the top wall this tick; dy flipped post hoc
        assert!(ball.pos.y < 0.0);
        assert!(ball.vel.y > 0.0);
    }

    #[test]
    fn test_ball_speed_growth_every_tick_in_zone() {
        let config = Config::default();
        let mut rng = test_rng();
        let mut ball = Ball::new(&config, &mut rng);

        // Crawl through the left zone: growth applies each tick spent there
        ball.pos = Vec2::new(14.0, 300.0);
        ball.vel = Vec2::new(-0.5, 0.0);
        ball.advance(&config);
        let after_one = ball.vel.x.abs();
        assert!((after_one - 0.5 * config.speed_growth).abs() < 1e-6);
        ball.advance(&config);
        assert!(ball.vel.x.abs() > after_one);
    }

    #[test]
    fn test_paddle_advance_clamps_to_field() {
        let config = Config::default();
        let mut paddle = Paddle::new(10.0, &config);

        paddle.y = 2.0;
        paddle.dy = -config.paddle_speed;
        paddle.advance(&config);
        assert_eq!(paddle.y, 0.0);

        paddle.y = config.field_height - paddle.height - 2.0;
        paddle.dy = config.paddle_speed;
        paddle.advance(&config);
        assert_eq!(paddle.y, config.field_height - paddle.height);
    }

    #[test]
    fn test_paddle_spans_y_is_strict() {
        let config = Config::default();
        let paddle = Paddle::new(10.0, &config);

        assert!(!paddle.spans_y(paddle.y));
        assert!(!paddle.spans_y(paddle.y + paddle.height));
        assert!(paddle.spans_y(paddle.center_y()));
    }

    proptest! {
        #[test]
        fn prop_paddle_never_leaves_field(
            start in 0.0f32..495.0,
            intents in proptest::collection::vec(-1i8..=1, 1..200),
        ) {
            let config = Config::default();
            let mut paddle = Paddle::new(10.0, &config);
            paddle.y = start;

            for intent in intents {
                paddle.dy = intent as f32 * config.paddle_speed;
                paddle.advance(&config);
                prop_assert!(paddle.y >= 0.0);
                prop_assert!(paddle.y <= config.field_height - paddle.height);
            }
        }
    }
}
