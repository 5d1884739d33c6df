//! Delayed serve scheduling
//!
//! A reset schedules a serve some time in the future. Every schedule bumps a
//! generation counter; an event only fires if it still carries the current
//! generation, so a second reset inside the delay window invalidates the
//! first serve instead of arming the ball twice.

use serde::{Deserialize, Serialize};

/// One scheduled serve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PendingServe {
    pub generation: u64,
    /// Session clock time (seconds) at which the serve fires
    pub fire_at: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServeTimer {
    generation: u64,
    pending: Vec<PendingServe>,
}

impl ServeTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of events still queued (stale ones included until polled)
    pub fn queued(&self) -> usize {
        self.pending.len()
    }

    /// Queue a serve `delay` seconds after `now`, invalidating older ones
    pub fn schedule(&mut self, now: f64, delay: f64) -> u64 {
        self.generation += 1;
        self.pending.push(PendingServe {
            generation: self.generation,
            fire_at: now + delay,
        });
        self.generation
    }

    /// Drain due events. Returns true if a current-generation serve fired.
    pub fn poll(&mut self, now: f64) -> bool {
        let current = self.generation;
        let mut fired = false;
        self.pending.retain(|event| {
            if event.fire_at > now {
                return true;
            }
            if event.generation == current {
                fired = true;
            } else {
                log::debug!(
                    "Discarding stale serve (generation {} < {})",
                    event.generation,
                    current
                );
            }
            false
        });
        fired
    }
}
