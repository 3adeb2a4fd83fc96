//! Collision and scoring resolution
//!
//! Flat-court geometry: the ball reflects off a paddle's near face on the
//! x-axis only (no impact-point angling, no vertical change), and a ball past
//! a side boundary scores for the opposite side. Paddle hits are resolved
//! before out-of-bounds every tick; the two are independent, so a ball that
//! misses a paddle's vertical span and crosses the boundary in the same tick
//! simply scores.

use crate::config::Config;

use super::state::{Ball, Paddle, Side};

/// Whether the ball has reached a side's paddle this tick.
///
/// Hit = the ball's horizontal edge facing the paddle has reached or passed
/// the paddle's near face, while the ball's center lies strictly within the
/// paddle's vertical span.
pub fn paddle_hit(ball: &Ball, paddle: &Paddle, side: Side) -> bool {
    let reached = match side {
        Side::Left => ball.pos.x - ball.radius < paddle.x + paddle.width,
        Side::Right => ball.pos.x + ball.radius > paddle.x,
    };
    reached && paddle.spans_y(ball.pos.y)
}

/// Resolve paddle reflections for the tick.
///
/// Both side checks run every tick regardless of ball direction; given the
/// ball's heading only one is normally reachable. A hit negates horizontal
/// velocity and nothing else.
pub fn resolve_paddle_hits(ball: &mut Ball, left: &Paddle, right: &Paddle) {
    if paddle_hit(ball, left, Side::Left) {
        ball.vel.x = -ball.vel.x;
    }
    if paddle_hit(ball, right, Side::Right) {
        ball.vel.x = -ball.vel.x;
    }
}

/// Which side scores if the ball is past a side boundary, if any.
///
/// Past the left wall the right side scores; past the right wall the left
/// side scores.
pub fn out_of_bounds(ball: &Ball, config: &Config) -> Option<Side> {
    if ball.pos.x < 0.0 {
        Some(Side::Right)
    } else if ball.pos.x > config.field_width {
        Some(Side::Left)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn setup() -> (Config, Ball, Paddle, Paddle) {
        let config = Config::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let ball = Ball::new(&config, &mut rng);
        let left = Paddle::new(config.left_paddle_x, &config);
        let right = Paddle::new(config.right_paddle_x(), &config);
        (config, ball, left, right)
    }

    #[test]
    fn test_left_hit_requires_edge_past_face_and_span() {
        let (_config, mut ball, left, _right) = setup();

        // Edge past the near face, center within span
        ball.pos = Vec2::new(left.x + left.width + ball.radius - 1.0, left.center_y());
        assert!(paddle_hit(&ball, &left, Side::Left));

        // Same x but center above the paddle
        ball.pos.y = left.y - 1.0;
        assert!(!paddle_hit(&ball, &left, Side::Left));

        // Within span but edge short of the face
        ball.pos = Vec2::new(left.x + left.width + ball.radius + 1.0, left.center_y());
        assert!(!paddle_hit(&ball, &left, Side::Left));
    }

    #[test]
    fn test_right_hit_uses_leading_edge() {
        let (_config, mut ball, _left, right) = setup();

        ball.pos = Vec2::new(right.x - ball.radius + 1.0, right.center_y());
        assert!(paddle_hit(&ball, &right, Side::Right));

        ball.pos.x = right.x - ball.radius - 1.0;
        assert!(!paddle_hit(&ball, &right, Side::Right));
    }

    #[test]
    fn test_reflection_negates_x_only() {
        let (_config, mut ball, left, right) = setup();

        ball.pos = Vec2::new(left.x + left.width, left.center_y());
        ball.vel = Vec2::new(-6.5, 4.0);
        resolve_paddle_hits(&mut ball, &left, &right);
        assert_eq!(ball.vel, Vec2::new(6.5, 4.0));
    }

    #[test]
    fn test_out_of_bounds_sides() {
        let (config, mut ball, _left, _right) = setup();

        ball.pos = Vec2::new(-1.0, 300.0);
        assert_eq!(out_of_bounds(&ball, &config), Some(Side::Right));

        ball.pos = Vec2::new(config.field_width + 1.0, 300.0);
        assert_eq!(out_of_bounds(&ball, &config), Some(Side::Left));

        ball.pos = Vec2::new(500.0, 300.0);
        assert_eq!(out_of_bounds(&ball, &config), None);
    }

    #[test]
    fn test_missed_span_and_past_boundary_scores_without_reflection() {
        let (config, mut ball, left, right) = setup();

        // Ball beyond the left paddle's vertical span and already past the wall
        ball.pos = Vec2::new(-1.0, left.y - 30.0);
        ball.vel = Vec2::new(-6.5, 0.0);

        resolve_paddle_hits(&mut ball, &left, &right);
        assert_eq!(ball.vel.x, -6.5);
        assert_eq!(out_of_bounds(&ball, &config), Some(Side::Right));
    }
}
