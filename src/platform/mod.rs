//! Platform abstraction layer
//!
//! Handles the pieces the frame driver feeds into the game:
//! - Frame timing (timestamp → clamped dt)
//! - Keyboard state (key codes → held controls)

pub mod input;

pub use input::KeyState;

use crate::consts::MAX_FRAME_DT;

/// Turns frame timestamps (milliseconds, as `requestAnimationFrame` gives
/// them) into per-frame dt in seconds
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the previous frame, clamped to `[0, MAX_FRAME_DT]`.
    /// The first frame reports zero.
    pub fn advance(&mut self, now_ms: f64) -> f64 {
        let dt = match self.last_ms {
            Some(last) => ((now_ms - last) / 1000.0).clamp(0.0, MAX_FRAME_DT),
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        dt
    }
}
