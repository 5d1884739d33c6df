//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per displayed frame
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod ball;
pub mod entity;
pub mod paddle;
pub mod serve;
pub mod state;
pub mod tick;

pub use ball::Ball;
pub use entity::Entity;
pub use paddle::{Control, Difficulty, Paddle};
pub use serve::ServeTimer;
pub use state::{Match, Score, Side};
pub use tick::{TickInput, step};
