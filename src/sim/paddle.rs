//! Vertical paddles, human or computer driven

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::state::Side;
use crate::consts::*;

/// How well a computer paddle tracks the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    /// Reacts on a fraction of ticks only
    Normal,
    /// Steps toward the ball every tick
    Perfect,
}

/// Who drives a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Control {
    Human,
    Computer(Difficulty),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    pub body: Entity,
    /// Pixels per step
    pub speed: f32,
    pub control: Control,
}

impl Paddle {
    /// Paddle at its side's home column, vertically centred
    pub fn new(side: Side, control: Control) -> Self {
        let x = match side {
            Side::Left => PADDLE_INSET,
            Side::Right => COURT_WIDTH - PADDLE_INSET - PADDLE_WIDTH,
        };
        let y = COURT_HEIGHT / 2.0 - PADDLE_HEIGHT / 2.0;
        Self {
            side,
            body: Entity::new(Vec2::new(x, y), Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT)),
            speed: PADDLE_SPEED,
            control,
        }
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.body.pos.y
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.body.size.y
    }

    pub fn is_computer(&self) -> bool {
        matches!(self.control, Control::Computer(_))
    }

    /// Displace by `delta` pixels. Ignored for computer paddles.
    pub fn move_by_human(&mut self, delta: f32) {
        if self.is_computer() {
            return;
        }
        self.body.pos.y += delta;
        self.clamp_to_court();
    }

    /// Step toward the ball's vertical centre. Ignored for human paddles.
    ///
    /// `ball_y` is the top of the ball's bounding box.
    pub fn move_by_computer<R: Rng + ?Sized>(&mut self, ball_y: f32, rng: &mut R) {
        let Control::Computer(difficulty) = self.control else {
            return;
        };
        let target = ball_y + BALL_RADIUS - self.height() / 2.0;

        let reacts = match difficulty {
            Difficulty::Normal => rng.random_bool(NORMAL_REACTION_CHANCE),
            Difficulty::Perfect => true,
        };
        // Second check sees the first step, so an overshoot from below is
        // undone and the paddle holds within one step of the target
        if reacts {
            if self.body.pos.y < target {
                self.body.pos.y += self.speed;
            }
            if self.body.pos.y > target {
                self.body.pos.y -= self.speed;
            }
        }

        self.clamp_to_court();
    }

    fn clamp_to_court(&mut self) {
        let max_y = COURT_HEIGHT - self.height();
        self.body.pos.y = self.body.pos.y.clamp(0.0, max_y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn in_bounds(p: &Paddle) -> bool {
        p.y() >= 0.0 && p.y() <= COURT_HEIGHT - p.height()
    }

    #[test]
    fn test_new_positions() {
        let left = Paddle::new(Side::Left, Control::Human);
        let right = Paddle::new(Side::Right, Control::Human);
        assert_eq!(left.body.pos.x, 30.0);
        assert_eq!(right.body.pos.x, COURT_WIDTH - 50.0);
        assert_eq!(left.y(), COURT_HEIGHT / 2.0 - 50.0);
    }

    #[test]
    fn test_human_move_clamps() {
        let mut p = Paddle::new(Side::Left, Control::Human);
        p.move_by_human(-10_000.0);
        assert_eq!(p.y(), 0.0);
        p.move_by_human(10_000.0);
        assert_eq!(p.y(), COURT_HEIGHT - PADDLE_HEIGHT);
    }

    #[test]
    fn test_human_move_ignored_on_computer_paddle() {
        let mut p = Paddle::new(Side::Right, Control::Computer(Difficulty::Perfect));
        let before = p.y();
        p.move_by_human(PADDLE_SPEED);
        assert_eq!(p.y(), before);
    }

    #[test]
    fn test_computer_move_ignored_on_human_paddle() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut p = Paddle::new(Side::Right, Control::Human);
        let before = p.y();
        p.move_by_computer(0.0, &mut rng);
        assert_eq!(p.y(), before);
    }

    #[test]
    fn test_perfect_steps_one_speed_unit() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut p = Paddle::new(Side::Right, Control::Computer(Difficulty::Perfect));
        let before = p.y();
        // Ball well above the paddle
        p.move_by_computer(0.0, &mut rng);
        assert_eq!(p.y(), before - PADDLE_SPEED);
        p.move_by_computer(COURT_HEIGHT, &mut rng);
        assert_eq!(p.y(), before);
    }

    #[test]
    fn test_perfect_holds_within_one_step_below_target() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut p = Paddle::new(Side::Right, Control::Computer(Difficulty::Perfect));
        assert_eq!(p.y(), 250.0);
        // Target 253: three pixels below the paddle top
        let ball_y = 253.0 - BALL_RADIUS + PADDLE_HEIGHT / 2.0;
        for _ in 0..7 {
            p.move_by_computer(ball_y, &mut rng);
            assert_eq!(p.y(), 250.0);
        }
    }

    #[test]
    fn test_perfect_settles_from_above_target() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut p = Paddle::new(Side::Right, Control::Computer(Difficulty::Perfect));
        // Target 247: paddle is three pixels too low, one step lands at 244
        let ball_y = 247.0 - BALL_RADIUS + PADDLE_HEIGHT / 2.0;
        p.move_by_computer(ball_y, &mut rng);
        assert_eq!(p.y(), 244.0);
        for _ in 0..5 {
            p.move_by_computer(ball_y, &mut rng);
            assert_eq!(p.y(), 244.0);
        }
    }

    #[test]
    fn test_normal_reacts_on_roughly_forty_percent_of_ticks() {
        let mut rng = Pcg32::seed_from_u64(42);
        let mut moved = 0;
        let trials = 2000;
        for _ in 0..trials {
            let mut p = Paddle::new(Side::Right, Control::Computer(Difficulty::Normal));
            let before = p.y();
            p.move_by_computer(0.0, &mut rng);
            if p.y() != before {
                moved += 1;
            }
        }
        let ratio = moved as f64 / trials as f64;
        assert!((0.33..0.47).contains(&ratio), "reaction ratio {}", ratio);
    }

    proptest! {
        #[test]
        fn prop_paddle_stays_in_court(
            deltas in prop::collection::vec(-50.0f32..50.0, 1..200),
            ball_ys in prop::collection::vec(-100.0f32..700.0, 1..200),
            seed in any::<u64>(),
        ) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut human = Paddle::new(Side::Left, Control::Human);
            let mut bot = Paddle::new(Side::Right, Control::Computer(Difficulty::Normal));
            let mut perfect = Paddle::new(Side::Right, Control::Computer(Difficulty::Perfect));
            for d in &deltas {
                human.move_by_human(*d);
                prop_assert!(in_bounds(&human));
            }
            for y in &ball_ys {
                bot.move_by_computer(*y, &mut rng);
                perfect.move_by_computer(*y, &mut rng);
                prop_assert!(in_bounds(&bot));
                prop_assert!(in_bounds(&perfect));
            }
        }

        #[test]
        fn prop_perfect_converges(
            ball_y in 0.0f32..(COURT_HEIGHT - 2.0 * BALL_RADIUS),
            start in 0.0f32..(COURT_HEIGHT - PADDLE_HEIGHT),
        ) {
            let mut rng = Pcg32::seed_from_u64(0);
            let mut p = Paddle::new(Side::Right, Control::Computer(Difficulty::Perfect));
            p.body.pos.y = start;
            // Nearest reachable spot to the centring target
            let target = (ball_y + BALL_RADIUS - PADDLE_HEIGHT / 2.0)
                .clamp(0.0, COURT_HEIGHT - PADDLE_HEIGHT);
            let mut dist = (p.y() - target).abs();
            for _ in 0..200 {
                p.move_by_computer(ball_y, &mut rng);
                let next = (p.y() - target).abs();
                if dist > PADDLE_SPEED {
                    prop_assert!(next < dist);
                } else {
                    prop_assert!(next <= PADDLE_SPEED);
                }
                dist = next;
            }
        }
    }
}
