//! Shared test doubles for the layout modules.

use sectorbrief_traits::{Surface, SurfaceError, TextMeasure};
use sectorbrief_types::{Color, FontId, Rect};

/// Fixed-advance metrics: every character is 0.6 em wide. Strictly
/// increasing in size, deterministic, and easy to reason about in tests.
pub struct CharMetrics;

impl TextMeasure for CharMetrics {
    fn width(&self, text: &str, _font: &FontId, size: f32) -> f32 {
        (text.chars().count() as f64 * size as f64 * 0.6) as f32
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    FillColor(Color),
    StrokeColor(Color),
    LineWidth(f32),
    FillRect(Rect),
    RoundRect { rect: Rect, radius: f32 },
    Text { x: f32, y: f32, text: String, size: f32 },
    Image(Rect),
}

/// A surface that records every operation for later assertions.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn texts(&self) -> Vec<&DrawOp> {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Text { .. }))
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn set_fill_color(&mut self, color: Color) {
        self.ops.push(DrawOp::FillColor(color));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.ops.push(DrawOp::StrokeColor(color));
    }

    fn set_line_width(&mut self, width: f32) {
        self.ops.push(DrawOp::LineWidth(width));
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.ops.push(DrawOp::FillRect(rect));
    }

    fn round_rect(&mut self, rect: Rect, corner_radius: f32) {
        self.ops.push(DrawOp::RoundRect {
            rect,
            radius: corner_radius,
        });
    }

    fn draw_string(&mut self, x: f32, y: f32, text: &str, _font: &FontId, size: f32) {
        self.ops.push(DrawOp::Text {
            x,
            y,
            text: text.to_string(),
            size,
        });
    }

    fn draw_image(&mut self, _data: &[u8], rect: Rect) -> Result<(), SurfaceError> {
        self.ops.push(DrawOp::Image(rect));
        Ok(())
    }
}
