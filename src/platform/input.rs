//! Keyboard input handling

use crate::settings::Controls;
use crate::sim::TickInput;

/// Held state of the four bound keys
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    controls: Controls,
    held: TickInput,
}

impl KeyState {
    pub fn new(controls: Controls) -> Self {
        Self {
            controls,
            held: TickInput::default(),
        }
    }

    /// Handle key down event. Returns true if the code is bound.
    pub fn key_down(&mut self, code: &str) -> bool {
        self.set(code, true)
    }

    /// Handle key up event. Returns true if the code is bound.
    pub fn key_up(&mut self, code: &str) -> bool {
        self.set(code, false)
    }

    /// Input for the next tick
    pub fn input(&self) -> TickInput {
        self.held
    }

    fn set(&mut self, code: &str, down: bool) -> bool {
        let c = &self.controls;
        let slot = if code == c.left_up {
            &mut self.held.left_up
        } else if code == c.left_down {
            &mut self.held.left_down
        } else if code == c.right_up {
            &mut self.held.right_up
        } else if code == c.right_down {
            &mut self.held.right_down
        } else {
            return false;
        };
        *slot = down;
        true
    }
}
