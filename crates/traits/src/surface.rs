//! The drawing surface contract.
//!
//! Models the accumulating canvas the layout engine draws onto: stateful
//! fill/stroke colors, text placed at explicit baseline coordinates, and
//! rectangle primitives. Coordinates are PDF points with the origin at
//! the bottom-left of the page.

use sectorbrief_types::{Color, FontId, Rect};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SurfaceError {
    #[error("Unsupported image data: {0}")]
    UnsupportedImage(String),
}

/// An accumulating drawing surface.
///
/// Nothing here reports layout failures: drawing off-page or overflowing
/// a region is permitted (the engine is fail-soft). Only `draw_image`
/// returns a `Result`, because callers choose an explicit fallback when
/// image data cannot be used.
pub trait Surface {
    /// Sets the fill color for subsequent text and fill operations.
    fn set_fill_color(&mut self, color: Color);

    /// Sets the stroke color for subsequent outline operations.
    fn set_stroke_color(&mut self, color: Color);

    /// Sets the outline width for subsequent stroke operations.
    fn set_line_width(&mut self, width: f32);

    /// Fills a rectangle with the current fill color.
    fn fill_rect(&mut self, rect: Rect);

    /// Draws a rounded rectangle, filled with the current fill color and
    /// stroked with the current stroke color and line width.
    fn round_rect(&mut self, rect: Rect, corner_radius: f32);

    /// Draws a single line of text with its baseline origin at (x, y),
    /// using the current fill color.
    fn draw_string(&mut self, x: f32, y: f32, text: &str, font: &FontId, size: f32);

    /// Draws an image scaled into `rect`.
    fn draw_image(&mut self, data: &[u8], rect: Rect) -> Result<(), SurfaceError>;
}
