//! Shrink-to-fit: one line of text at the largest font size (within a
//! floor) that keeps it under a maximum width.

use sectorbrief_traits::{Surface, TextMeasure};
use sectorbrief_types::{Color, FontId};

/// Finds the largest integer size in `[min_size, initial_size]` at which
/// `text` fits within `max_width`, or `min_size` when none does.
///
/// This is a linear descent by 1, not a binary search: the size range is
/// small and determinism matters more than speed here.
pub fn fit_size<M: TextMeasure>(
    measure: &M,
    text: &str,
    font: &FontId,
    max_width: f32,
    initial_size: u32,
    min_size: u32,
) -> u32 {
    let mut size = initial_size;
    while size > min_size {
        if measure.width(text, font, size as f32) <= max_width {
            return size;
        }
        size -= 1;
    }
    // The floor is used even when the text still overflows at it.
    size
}

/// Draws `text` at the fitted size. When even `min_size` is too wide the
/// text is drawn anyway and overflows the box; it is never truncated.
#[allow(clippy::too_many_arguments)]
pub fn draw_shrinking<S: Surface, M: TextMeasure>(
    surface: &mut S,
    measure: &M,
    text: &str,
    max_width: f32,
    x: f32,
    y: f32,
    font: &FontId,
    initial_size: u32,
    min_size: u32,
    color: Color,
) {
    let size = fit_size(measure, text, font, max_width, initial_size, min_size);
    if size < initial_size {
        log::debug!(
            "Shrunk '{}' from {} to {} to fit {}pt",
            text,
            initial_size,
            size,
            max_width
        );
    }
    surface.set_fill_color(color);
    surface.draw_string(x, y, text, font, size as f32);
}
