use sectorbrief_types::FontId;

/// Contract for the metrics provider: the rendered width of a string at a
/// given font face and size.
///
/// Implementations must be deterministic for identical inputs, and for a
/// fixed text and face the width must be monotonic in `size`. The layout
/// engine's size search relies on both properties.
pub trait TextMeasure {
    fn width(&self, text: &str, font: &FontId, size: f32) -> f32;
}

impl<T: TextMeasure + ?Sized> TextMeasure for &T {
    fn width(&self, text: &str, font: &FontId, size: f32) -> f32 {
        (**self).width(text, font, size)
    }
}

impl<T: TextMeasure + ?Sized> TextMeasure for std::sync::Arc<T> {
    fn width(&self, text: &str, font: &FontId, size: f32) -> f32 {
        (**self).width(text, font, size)
    }
}
