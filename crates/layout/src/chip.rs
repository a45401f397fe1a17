//! Adaptive label: a single line of text inside an auto-sized rounded
//! rectangle "chip" that grows horizontally to fit the text plus padding.

use sectorbrief_traits::{Surface, TextMeasure};
use sectorbrief_types::{Color, FontId, Rect};

/// Outline width of the chip rectangle. The stroke uses the fill color,
/// so the border is invisible against the fill (flat-chip look).
const CHIP_OUTLINE_WIDTH: f32 = 2.0;

/// Visual parameters of a chip.
#[derive(Debug, Clone)]
pub struct ChipStyle {
    pub padding_x: f32,
    pub padding_y: f32,
    pub corner_radius: f32,
    pub fill: Color,
    pub text_color: Color,
}

/// Computes the rectangle a chip will occupy without drawing it.
///
/// Width is the measured text width plus horizontal padding on both
/// sides; height is the font size plus vertical padding on both sides.
pub fn chip_rect<M: TextMeasure>(
    measure: &M,
    text: &str,
    x: f32,
    y: f32,
    font: &FontId,
    font_size: f32,
    style: &ChipStyle,
) -> Rect {
    let text_width = measure.width(text, font, font_size);
    Rect::new(
        x,
        y,
        text_width + 2.0 * style.padding_x,
        font_size + 2.0 * style.padding_y,
    )
}

/// Draws a chip with its bottom-left corner at (x, y) and returns the
/// rectangle it covered, so the caller can advance past it.
///
/// There is no bounds checking against the page: pathological inputs may
/// render off-page. Empty text produces a chip of bare padding width.
pub fn draw_chip<S: Surface, M: TextMeasure>(
    surface: &mut S,
    measure: &M,
    text: &str,
    x: f32,
    y: f32,
    font: &FontId,
    font_size: f32,
    style: &ChipStyle,
) -> Rect {
    let rect = chip_rect(measure, text, x, y, font, font_size, style);

    surface.set_line_width(CHIP_OUTLINE_WIDTH);
    surface.set_stroke_color(style.fill.clone());
    surface.set_fill_color(style.fill.clone());
    surface.round_rect(rect, style.corner_radius);

    surface.set_fill_color(style.text_color.clone());
    surface.draw_string(
        x + style.padding_x,
        y + style.padding_y + 1.0,
        text,
        font,
        font_size,
    );

    rect
}
