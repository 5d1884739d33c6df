//! The ball: integration, wall bounce, paddle rebound, scoring and serve

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::paddle::Paddle;
use super::serve::ServeTimer;
use super::state::Side;
use crate::consts::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Bounding box of the circle (size = 2 * radius)
    pub body: Entity,
    pub radius: f32,
    pub serve: ServeTimer,
}

impl Ball {
    /// Centred, stationary ball with its first serve scheduled
    pub fn new(now: f64) -> Self {
        let mut ball = Self {
            body: Entity::new(Vec2::ZERO, Vec2::splat(BALL_RADIUS * 2.0)),
            radius: BALL_RADIUS,
            serve: ServeTimer::new(),
        };
        ball.reset(now);
        ball
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.body.pos
    }

    #[inline]
    pub fn vel(&self) -> Vec2 {
        self.body.vel
    }

    pub fn is_waiting_for_serve(&self) -> bool {
        self.body.vel == Vec2::ZERO
    }

    /// Recenter, stop, and schedule the next serve
    pub fn reset(&mut self, now: f64) {
        self.body.pos = Vec2::new(
            COURT_WIDTH / 2.0 - self.radius,
            COURT_HEIGHT / 2.0 - self.radius,
        );
        self.body.vel = Vec2::ZERO;
        let generation = self.serve.schedule(now, SERVE_DELAY);
        log::debug!(
            "Ball reset, serve generation {} due at {:.2}s",
            generation,
            now + SERVE_DELAY
        );
    }

    /// Fire the pending serve if it is due. Returns true if the ball was armed.
    pub fn poll_serve<R: Rng + ?Sized>(
        &mut self,
        now: f64,
        last_winner: Option<Side>,
        rng: &mut R,
    ) -> bool {
        if !self.serve.poll(now) {
            return false;
        }
        self.arm(last_winner, rng);
        true
    }

    /// Give the ball its serve velocity
    pub fn arm<R: Rng + ?Sized>(&mut self, last_winner: Option<Side>, rng: &mut R) {
        let dx = match last_winner {
            Some(Side::Right) => BASE_BALL_SPEED,
            Some(Side::Left) => -BASE_BALL_SPEED,
            None => {
                if rng.random_bool(0.5) {
                    BASE_BALL_SPEED
                } else {
                    -BASE_BALL_SPEED
                }
            }
        };
        let dy = rng.random_range(-1.0f32..1.0) * BASE_BALL_SPEED;
        self.body.vel = Vec2::new(dx, dy);
        log::debug!("Serve armed: dx={:.2} dy={:.2}", dx, dy);
    }

    /// Advance one tick. Returns the side that scored, if any; a score
    /// also resets the ball.
    pub fn update(&mut self, left: &Paddle, right: &Paddle, now: f64) -> Option<Side> {
        self.body.integrate();

        // Top/bottom walls: flip only, no position correction
        if self.body.pos.y <= 0.0 || self.body.bottom() >= COURT_HEIGHT {
            self.body.vel.y = -self.body.vel.y;
        }

        if self.body.vel.x < 0.0 && self.body.overlaps(&left.body) {
            self.rebound(left);
        } else if self.body.vel.x > 0.0 && self.body.overlaps(&right.body) {
            self.rebound(right);
        }

        let scorer = if self.body.pos.x <= 0.0 {
            Some(Side::Right)
        } else if self.body.right() >= COURT_WIDTH {
            Some(Side::Left)
        } else {
            None
        };
        if scorer.is_some() {
            self.reset(now);
        }
        scorer
    }

    fn rebound(&mut self, paddle: &Paddle) {
        self.body.vel.x = -self.body.vel.x;
        self.body.vel *= PADDLE_BOOST;

        // Angle from impact offset; overwrites the boosted dy
        let half = paddle.height() / 2.0;
        let offset = (self.body.pos.y + self.radius) - (paddle.y() + half);
        self.body.vel.y = offset / half * BASE_BALL_SPEED;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::paddle::Control;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn paddles() -> (Paddle, Paddle) {
        (
            Paddle::new(Side::Left, Control::Human),
            Paddle::new(Side::Right, Control::Human),
        )
    }

    /// Ball whose next integration lands it with its top-left at `at`
    fn ball_arriving(at: Vec2, vel: Vec2) -> Ball {
        let mut ball = Ball::new(0.0);
        ball.body.vel = vel;
        ball.body.pos = at - vel;
        ball
    }

    #[test]
    fn test_new_ball_is_centred_and_still() {
        let ball = Ball::new(0.0);
        assert_eq!(ball.pos(), Vec2::new(390.0, 290.0));
        assert!(ball.is_waiting_for_serve());
        assert_eq!(ball.serve.generation(), 1);
    }

    #[test]
    fn test_serve_waits_for_delay() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut ball = Ball::new(0.0);
        assert!(!ball.poll_serve(0.5, None, &mut rng));
        assert!(ball.is_waiting_for_serve());
        assert!(ball.poll_serve(1.0, None, &mut rng));
        assert_eq!(ball.vel().x.abs(), BASE_BALL_SPEED);
        assert!(ball.vel().y.abs() <= BASE_BALL_SPEED);
    }

    #[test]
    fn test_double_reset_arms_once() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut ball = Ball::new(0.0);
        ball.reset(0.6);
        // Stale serve from the first reset is due but must not arm
        assert!(!ball.poll_serve(1.0, None, &mut rng));
        assert!(ball.is_waiting_for_serve());
        assert!(ball.poll_serve(1.6, None, &mut rng));
    }

    #[test]
    fn test_wall_reflection_keeps_overshoot() {
        let (left, right) = paddles();
        let mut ball = ball_arriving(Vec2::new(400.0, -1.0), Vec2::new(0.5, 5.0));
        // Moving down yet above the wall: still flips
        ball.update(&left, &right, 0.0);
        assert_eq!(ball.vel().y, -5.0);
        assert_eq!(ball.pos().y, -1.0);

        let mut ball = ball_arriving(Vec2::new(400.0, -3.0), Vec2::new(0.5, -5.0));
        ball.update(&left, &right, 0.0);
        assert_eq!(ball.vel().y, 5.0);
        assert_eq!(ball.pos().y, -3.0);
    }

    #[test]
    fn test_bottom_wall_reflection() {
        let (left, right) = paddles();
        let mut ball = ball_arriving(Vec2::new(400.0, COURT_HEIGHT - 18.0), Vec2::new(1.0, 4.0));
        ball.update(&left, &right, 0.0);
        assert_eq!(ball.vel().y, -4.0);
    }

    #[test]
    fn test_centre_hit_is_flat() {
        let (left, right) = paddles();
        let at = Vec2::new(left.body.right() - 5.0, left.y() + 40.0);
        let mut ball = ball_arriving(at, Vec2::new(-BASE_BALL_SPEED, 0.0));
        ball.update(&left, &right, 0.0);
        assert!(ball.vel().x > 0.0);
        assert!(ball.vel().y.abs() < 1e-5);
    }

    #[test]
    fn test_edge_hits_are_steepest() {
        let (left, right) = paddles();
        let dy_for = |ball_y: f32| {
            let at = Vec2::new(left.body.right() - 5.0, ball_y);
            let mut ball = ball_arriving(at, Vec2::new(-BASE_BALL_SPEED, 0.0));
            ball.update(&left, &right, 0.0);
            ball.vel().y
        };
        let top = dy_for(left.y() - 19.0);
        let centre = dy_for(left.y() + 40.0);
        let bottom = dy_for(left.body.bottom() - 1.0);

        assert!(top < centre && centre < bottom);
        assert!((top - (-59.0 / 50.0 * BASE_BALL_SPEED)).abs() < 1e-4);
        assert!((bottom - (59.0 / 50.0 * BASE_BALL_SPEED)).abs() < 1e-4);
    }

    #[test]
    fn test_moving_away_never_hits_paddle() {
        let (left, right) = paddles();
        let at = Vec2::new(left.body.right() - 5.0, left.y() + 40.0);
        let mut ball = ball_arriving(at, Vec2::new(BASE_BALL_SPEED, 1.0));
        ball.update(&left, &right, 0.0);
        assert_eq!(ball.vel(), Vec2::new(BASE_BALL_SPEED, 1.0));
    }

    #[test]
    fn test_boost_compounds_on_dx_only() {
        let (left, right) = paddles();
        let mut ball = Ball::new(0.0);
        ball.body.vel = Vec2::new(-BASE_BALL_SPEED, 2.0);

        for n in 1..=8 {
            let paddle = if ball.vel().x < 0.0 { &left } else { &right };
            // Land slightly above centre so dy is non-zero
            let x = if ball.vel().x < 0.0 {
                paddle.body.right() - 5.0
            } else {
                paddle.body.pos.x - 15.0
            };
            ball.body.pos = Vec2::new(x, paddle.y() + 30.0) - ball.vel();
            ball.update(&left, &right, 0.0);

            let expected = BASE_BALL_SPEED * PADDLE_BOOST.powi(n);
            assert!((ball.vel().x.abs() - expected).abs() < 1e-3, "hit {}", n);
            // 10 px above centre over a 50 px half-height
            assert!((ball.vel().y - (-0.2 * BASE_BALL_SPEED)).abs() < 1e-4, "hit {}", n);
        }
    }

    #[test]
    fn test_left_wall_scores_for_right() {
        let (left, right) = paddles();
        let mut ball = ball_arriving(Vec2::new(0.0, 100.0), Vec2::new(-4.0, 0.0));
        let generation = ball.serve.generation();
        assert_eq!(ball.update(&left, &right, 3.0), Some(Side::Right));
        assert!(ball.is_waiting_for_serve());
        assert_eq!(ball.pos(), Vec2::new(390.0, 290.0));
        assert_eq!(ball.serve.generation(), generation + 1);
    }

    #[test]
    fn test_right_wall_scores_for_left() {
        let (left, right) = paddles();
        let mut ball = ball_arriving(Vec2::new(COURT_WIDTH - 20.0, 100.0), Vec2::new(4.0, 0.0));
        assert_eq!(ball.update(&left, &right, 3.0), Some(Side::Left));
    }

    #[test]
    fn test_serve_bias_is_deterministic() {
        let mut rng = Pcg32::seed_from_u64(11);
        let mut ball = Ball::new(0.0);
        for _ in 0..50 {
            ball.arm(Some(Side::Left), &mut rng);
            assert_eq!(ball.vel().x, -BASE_BALL_SPEED);
            ball.arm(Some(Side::Right), &mut rng);
            assert_eq!(ball.vel().x, BASE_BALL_SPEED);
        }
    }

    #[test]
    fn test_first_serve_direction_is_random() {
        let mut rng = Pcg32::seed_from_u64(99);
        let mut ball = Ball::new(0.0);
        let mut rightward = 0;
        let trials = 1000;
        for _ in 0..trials {
            ball.arm(None, &mut rng);
            if ball.vel().x > 0.0 {
                rightward += 1;
            }
            assert!(ball.vel().y.abs() <= BASE_BALL_SPEED);
        }
        assert!((400..600).contains(&rightward), "rightward serves {}", rightward);
    }
}
