//! Per-frame simulation step
//!
//! Order within a step is fixed: left paddle, right paddle, ball, then the
//! win check. Scoring and the win check happen in the same step, so a match
//! always stops at exactly [`WIN_SCORE`] points.

use serde::{Deserialize, Serialize};

use super::state::{Match, Side};
use crate::consts::*;

/// Held keys for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub left_up: bool,
    pub left_down: bool,
    pub right_up: bool,
    pub right_down: bool,
}

/// Advance paddles and ball by one tick. Returns the match winner once a
/// side reaches the win score.
pub fn step(m: &mut Match, input: &TickInput) -> Option<Side> {
    m.ticks += 1;

    if input.left_up {
        m.left.move_by_human(-PADDLE_SPEED);
    }
    if input.left_down {
        m.left.move_by_human(PADDLE_SPEED);
    }

    if m.right.is_computer() {
        let ball_y = m.ball.pos().y;
        m.right.move_by_computer(ball_y, &mut m.rng);
    } else {
        if input.right_up {
            m.right.move_by_human(-PADDLE_SPEED);
        }
        if input.right_down {
            m.right.move_by_human(PADDLE_SPEED);
        }
    }

    if let Some(scorer) = m.ball.update(&m.left, &m.right, m.clock) {
        m.record_point(scorer);
    }

    m.score.winner(WIN_SCORE)
}
