//! Menu layout and pointer hit-testing
//!
//! Option hit regions are derived from the rendered text width, so the
//! clickable area always matches what is on screen.

use crate::consts::{COURT_HEIGHT, COURT_WIDTH};
use crate::game::OpponentMode;
use crate::settings::Labels;

pub const TITLE_FONT: &str = "40px sans-serif";
pub const TEXT_FONT: &str = "30px sans-serif";

/// Anything that can tell how wide a string renders
pub trait TextMeasure {
    fn text_width(&self, font: &str, text: &str) -> f32;
}

/// Axis-aligned click target, inclusive on every edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRegion {
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
}

impl HitRegion {
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }
}

/// One selectable line of the main menu
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem<'a> {
    pub mode: OpponentMode,
    pub label: &'a str,
    /// Text baseline, centred horizontally on the court
    pub baseline: f32,
    /// Vertical click band (top, bottom)
    pub band: (f32, f32),
}

impl MenuItem<'_> {
    pub fn region(&self, measure: &(impl TextMeasure + ?Sized)) -> HitRegion {
        let half = measure.text_width(TEXT_FONT, self.label) / 2.0;
        HitRegion {
            x_min: COURT_WIDTH / 2.0 - half,
            x_max: COURT_WIDTH / 2.0 + half,
            y_min: self.band.0,
            y_max: self.band.1,
        }
    }
}

/// Title baseline
pub fn title_baseline() -> f32 {
    COURT_HEIGHT / 4.0
}

/// The three menu lines, top to bottom
pub fn menu_items(labels: &Labels) -> [MenuItem<'_>; 3] {
    let mid = COURT_HEIGHT / 2.0;
    [
        MenuItem {
            mode: OpponentMode::Human,
            label: &labels.play_human,
            baseline: mid - 60.0,
            band: (mid - 80.0, mid - 40.0),
        },
        MenuItem {
            mode: OpponentMode::ComputerNormal,
            label: &labels.play_normal,
            baseline: mid - 10.0,
            band: (mid - 20.0, mid + 20.0),
        },
        MenuItem {
            mode: OpponentMode::ComputerPerfect,
            label: &labels.play_perfect,
            baseline: mid + 40.0,
            band: (mid + 20.0, mid + 60.0),
        },
    ]
}

/// Mode under the pointer; the first matching line wins where bands touch
pub fn hit_test(
    labels: &Labels,
    measure: &(impl TextMeasure + ?Sized),
    x: f32,
    y: f32,
) -> Option<OpponentMode> {
    menu_items(labels)
        .iter()
        .find(|item| item.region(measure).contains(x, y))
        .map(|item| item.mode)
}
