//! Game settings: key bindings, on-screen text and colours
//!
//! Court size and win score are fixed (see `consts`); only presentation and
//! input are configurable. Settings are read once at startup and never saved.

use serde::{Deserialize, Serialize};

use crate::sim::Side;

/// Key codes (`KeyboardEvent.code`) for the four logical controls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Controls {
    pub left_up: String,
    pub left_down: String,
    pub right_up: String,
    pub right_down: String,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            left_up: "KeyW".into(),
            left_down: "KeyS".into(),
            right_up: "ArrowUp".into(),
            right_down: "ArrowDown".into(),
        }
    }
}

/// All text drawn on screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub title: String,
    pub play_human: String,
    pub play_normal: String,
    pub play_perfect: String,
    pub left_player: String,
    pub right_player: String,
    pub victory: String,
    /// `{winner}` is replaced by the winning side's label
    pub win_format: String,
    pub back_to_menu: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            title: "PONG".into(),
            play_human: "1. Play against another player".into(),
            play_normal: "2. Play against the computer (Normal)".into(),
            play_perfect: "3. Play against the computer (Impossible)".into(),
            left_player: "Left Player".into(),
            right_player: "Right Player".into(),
            victory: "Victory!".into(),
            win_format: "{winner} wins".into(),
            back_to_menu: "Click to return to the menu".into(),
        }
    }
}

impl Labels {
    pub fn side(&self, side: Side) -> &str {
        match side {
            Side::Left => &self.left_player,
            Side::Right => &self.right_player,
        }
    }

    pub fn win_line(&self, side: Side) -> String {
        self.win_format.replace("{winner}", self.side(side))
    }
}

/// CSS colour strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: String,
    pub foreground: String,
    pub left_paddle: String,
    pub right_paddle: String,
    pub ball: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: "black".into(),
            foreground: "white".into(),
            left_paddle: "red".into(),
            right_paddle: "blue".into(),
            ball: "white".into(),
        }
    }
}

impl Palette {
    pub fn paddle(&self, side: Side) -> &str {
        match side {
            Side::Left => &self.left_paddle,
            Side::Right => &self.right_paddle,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub controls: Controls,
    pub labels: Labels,
    pub palette: Palette,
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse `json` if present, falling back to defaults on any error
    pub fn load_or_default(json: Option<&str>) -> Self {
        match json {
            Some(json) => match Self::from_json(json) {
                Ok(settings) => {
                    log::info!("Loaded settings");
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring invalid settings: {}", e);
                    Self::default()
                }
            },
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }
}
