/// The rectangular region a block of text must fit into.
///
/// (x, y) is the baseline origin of the first line; `max_height` is only
/// meaningful for multi-line reflow. `max_width` must be positive; this
/// is asserted in debug builds and left as caller responsibility in
/// release builds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutBox {
    pub x: f32,
    pub y: f32,
    pub max_width: f32,
    pub max_height: f32,
}

impl LayoutBox {
    pub fn new(x: f32, y: f32, max_width: f32, max_height: f32) -> Self {
        debug_assert!(max_width > 0.0, "LayoutBox max_width must be positive");
        Self {
            x,
            y,
            max_width,
            max_height,
        }
    }
}
