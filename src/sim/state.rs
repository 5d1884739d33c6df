//! Match state and core simulation types
//!
//! Everything the simulation step mutates lives in [`Match`]. There is no
//! process-wide state; a match can be built, driven and inspected in tests.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::paddle::{Control, Paddle};

/// A side of the court
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// Points per side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    /// First side (left checked first) at or above `target`
    pub fn winner(&self, target: u32) -> Option<Side> {
        if self.left >= target {
            Some(Side::Left)
        } else if self.right >= target {
            Some(Side::Right)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// One running session: paddles, ball, score and the seeded RNG
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    /// Seed for reproducibility
    pub seed: u64,
    /// Drives computer reactions and serves
    pub rng: Pcg32,
    /// Seconds elapsed since the match was created
    pub clock: f64,
    /// Simulation steps taken (playing phase only)
    pub ticks: u64,
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    pub score: Score,
    /// Side that scored most recently
    pub last_winner: Option<Side>,
}

impl Match {
    /// Two human paddles and a ball waiting for its first serve
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            clock: 0.0,
            ticks: 0,
            left: Paddle::new(Side::Left, Control::Human),
            right: Paddle::new(Side::Right, Control::Human),
            ball: Ball::new(0.0),
            score: Score::default(),
            last_winner: None,
        }
    }

    /// Swap in a fresh right paddle driven by `control`
    pub fn replace_opponent(&mut self, control: Control) {
        self.right = Paddle::new(Side::Right, control);
    }

    /// Move the clock forward and fire the serve if it is due
    pub fn advance_clock(&mut self, dt: f64) {
        self.clock += dt;
        self.ball.poll_serve(self.clock, self.last_winner, &mut self.rng);
    }

    /// Credit a point and remember who scored
    pub fn record_point(&mut self, scorer: Side) {
        self.score.award(scorer);
        self.last_winner = Some(scorer);
        log::debug!(
            "{:?} scores: {} : {}",
            scorer,
            self.score.left,
            self.score.right
        );
    }

    /// Clear score and last winner; paddles and ball are left alone
    pub fn reset_scores(&mut self) {
        self.score.reset();
        self.last_winner = None;
    }
}
