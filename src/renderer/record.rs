//! Recording surface
//!
//! Captures draw calls instead of rasterising them. Text width is estimated
//! from the font's pixel size, which is close enough for menu hit-testing
//! without a real font.

use glam::Vec2;

use super::Surface;
use crate::ui::TextMeasure;

/// Average glyph advance as a fraction of the font size
const GLYPH_ADVANCE: f32 = 0.5;

/// One captured draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    FillRect {
        pos: Vec2,
        size: Vec2,
        color: String,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        color: String,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        font: String,
        color: String,
    },
    DashedLine {
        from: Vec2,
        to: Vec2,
        dash: f32,
        color: String,
    },
}

#[derive(Debug, Default)]
pub struct Recorder {
    commands: Vec<DrawCmd>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCmd] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Text of every `Text` command, in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCmd::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// Leading pixel size of a CSS font shorthand like `30px sans-serif`
fn font_px(font: &str) -> f32 {
    font.split_whitespace()
        .find_map(|part| part.strip_suffix("px"))
        .and_then(|px| px.parse().ok())
        .unwrap_or(10.0)
}

impl TextMeasure for Recorder {
    fn text_width(&self, font: &str, text: &str) -> f32 {
        text.chars().count() as f32 * font_px(font) * GLYPH_ADVANCE
    }
}

impl Surface for Recorder {
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &str) {
        self.commands.push(DrawCmd::FillRect {
            pos,
            size,
            color: color.to_string(),
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) {
        self.commands.push(DrawCmd::FillCircle {
            center,
            radius,
            color: color.to_string(),
        });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: &str) {
        self.commands.push(DrawCmd::Text {
            text: text.to_string(),
            x,
            y,
            font: font.to_string(),
            color: color.to_string(),
        });
    }

    fn stroke_dashed_line(&mut self, from: Vec2, to: Vec2, dash: f32, color: &str) {
        self.commands.push(DrawCmd::DashedLine {
            from,
            to,
            dash,
            color: color.to_string(),
        });
    }
}
