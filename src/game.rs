//! Top-level game state machine
//!
//! `Menu` → `Playing` (menu pick) → `Victory` (a side reaches the win
//! score) → `Menu` (click). No other transitions exist.

use serde::{Deserialize, Serialize};

use crate::consts::MAX_FRAME_DT;
use crate::renderer::{self, Surface};
use crate::settings::Settings;
use crate::sim::{Control, Difficulty, Match, Side, TickInput, step};
use crate::ui::{self, TextMeasure};

/// Who plays the right paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpponentMode {
    Human,
    ComputerNormal,
    ComputerPerfect,
}

impl OpponentMode {
    pub fn control(self) -> Control {
        match self {
            OpponentMode::Human => Control::Human,
            OpponentMode::ComputerNormal => Control::Computer(Difficulty::Normal),
            OpponentMode::ComputerPerfect => Control::Computer(Difficulty::Perfect),
        }
    }
}

/// Current screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Menu,
    Playing,
    Victory { winner: Side },
}

pub struct Game {
    pub phase: GamePhase,
    pub session: Match,
    pub settings: Settings,
}

impl Game {
    pub fn new(seed: u64, settings: Settings) -> Self {
        log::info!("New game with seed {}", seed);
        Self {
            phase: GamePhase::Menu,
            session: Match::new(seed),
            settings,
        }
    }

    /// Label of the winning side while on the victory screen
    pub fn winner_label(&self) -> Option<&str> {
        match self.phase {
            GamePhase::Victory { winner } => Some(self.settings.labels.side(winner)),
            _ => None,
        }
    }

    /// Advance one frame. The serve timer runs in every phase; the
    /// simulation only steps while playing.
    pub fn tick(&mut self, input: &TickInput, dt: f64) {
        self.session.advance_clock(dt.clamp(0.0, MAX_FRAME_DT));

        if self.phase != GamePhase::Playing {
            return;
        }
        if let Some(winner) = step(&mut self.session, input) {
            log::info!(
                "{:?} wins {} : {}",
                winner,
                self.session.score.left,
                self.session.score.right
            );
            self.phase = GamePhase::Victory { winner };
        }
    }

    /// Tick then draw the current phase
    pub fn frame<S: Surface + ?Sized>(&mut self, input: &TickInput, dt: f64, surface: &mut S) {
        self.tick(input, dt);
        renderer::draw(self, surface);
    }

    /// Leave the menu with a freshly built right paddle. Ignored elsewhere.
    pub fn start(&mut self, mode: OpponentMode) {
        if self.phase != GamePhase::Menu {
            return;
        }
        self.session.replace_opponent(mode.control());
        self.phase = GamePhase::Playing;
        log::info!("Match started: {:?}", mode);
    }

    /// Return from the victory screen, clearing score and last winner
    pub fn acknowledge_victory(&mut self) {
        if !matches!(self.phase, GamePhase::Victory { .. }) {
            return;
        }
        self.session.reset_scores();
        self.phase = GamePhase::Menu;
        log::info!("Back to menu");
    }

    /// Pointer click in court coordinates
    pub fn click<M: TextMeasure + ?Sized>(&mut self, x: f32, y: f32, measure: &M) {
        match self.phase {
            GamePhase::Menu => {
                if let Some(mode) = ui::hit_test(&self.settings.labels, measure, x, y) {
                    self.start(mode);
                }
            }
            GamePhase::Victory { .. } => self.acknowledge_victory(),
            GamePhase::Playing => {}
        }
    }
}
