//! Court Pong - classic two-paddle Pong on a 2D canvas
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddles, ball, scoring)
//! - `game`: Menu / playing / victory state machine
//! - `renderer`: Per-state drawing onto an abstract 2D surface
//! - `ui`: Menu layout and pointer hit-testing
//! - `platform`: Frame clock and keyboard mapping
//! - `settings`: Controls, labels and colours

pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use game::{Game, GamePhase, OpponentMode};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Court dimensions
    pub const COURT_WIDTH: f32 = 800.0;
    pub const COURT_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Pixels per tick
    pub const PADDLE_SPEED: f32 = 6.0;
    /// Gap between a paddle and its side wall
    pub const PADDLE_INSET: f32 = 30.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Pixels per tick on serve; also scales the rebound angle
    pub const BASE_BALL_SPEED: f32 = 3.0;
    /// Speed boost when ball hits a paddle (multiplicative, compounds)
    pub const PADDLE_BOOST: f32 = 1.05;

    /// Chance per tick that a normal-difficulty computer paddle reacts
    pub const NORMAL_REACTION_CHANCE: f64 = 0.4;

    /// Points needed to win a match
    pub const WIN_SCORE: u32 = 10;

    /// Seconds between a reset and the serve
    pub const SERVE_DELAY: f64 = 1.0;

    /// Nominal frame timestep (60 Hz display)
    pub const FRAME_DT: f64 = 1.0 / 60.0;
    /// Largest dt accepted from the frame driver
    pub const MAX_FRAME_DT: f64 = 0.25;
}
