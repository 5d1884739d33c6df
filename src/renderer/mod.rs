//! Rendering module
//!
//! Drawing goes through [`Surface`], a minimal 2D canvas capability. The web
//! build implements it on `CanvasRenderingContext2d`; [`record::Recorder`]
//! captures commands for headless runs and tests.

pub mod draw;
pub mod record;

pub use draw::draw;

use glam::Vec2;

use crate::ui::TextMeasure;

/// 2D drawing primitives. Colours are CSS colour strings, text is centred
/// horizontally on `x` with `y` as the baseline.
pub trait Surface: TextMeasure {
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &str);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str);
    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: &str);
    fn stroke_dashed_line(&mut self, from: Vec2, to: Vec2, dash: f32, color: &str);
}
