//! The text-layout engine.
//!
//! Three primitives fit arbitrary-length strings into fixed page regions:
//!
//! - [`chip::draw_chip`]: a single line inside an auto-sized rounded
//!   rectangle that grows to fit the text plus padding.
//! - [`shrink::draw_shrinking`]: one line at the largest font size (within
//!   a floor) that stays under a maximum width.
//! - [`reflow::draw_justified`]: a text blob wrapped into lines under a
//!   maximum width, shrunk until the block fits a maximum height, then
//!   justified.
//!
//! All three are fail-soft: text that cannot fit even at the minimum size
//! is drawn anyway and may overflow its region. Nothing here returns an
//! error to the caller.

pub mod chip;
pub mod reflow;
pub mod shrink;

mod layout_box;

pub use chip::{chip_rect, draw_chip, ChipStyle};
pub use layout_box::LayoutBox;
pub use reflow::{draw_justified, reflow, wrap_words, Line, Paragraph};
pub use shrink::{draw_shrinking, fit_size};

#[cfg(test)]
pub(crate) mod test_support;
