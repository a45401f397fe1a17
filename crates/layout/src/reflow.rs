//! Reflow-and-justify: wrap a text blob into lines under a maximum
//! width, shrinking the font size until the whole block fits a maximum
//! height, then justify every line except the last.

use crate::LayoutBox;
use sectorbrief_traits::{Surface, TextMeasure};
use sectorbrief_types::{Color, FontId};

/// An ordered sequence of words packed onto one line. Word order is the
/// original text order; by construction a line never measures wider than
/// the wrap width at the size it was laid out at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub words: Vec<String>,
}

impl Line {
    pub fn text(&self) -> String {
        self.words.join(" ")
    }
}

/// The accepted layout of a text blob: all lines share one font size,
/// because shrinking restarts wrapping from scratch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    pub lines: Vec<Line>,
    pub font_size: u32,
}

impl Paragraph {
    pub fn height(&self, line_spacing: f32) -> f32 {
        self.lines.len() as f32 * (self.font_size as f32 + line_spacing)
    }
}

/// Greedily packs whitespace-delimited words into lines no wider than
/// `max_width` at the given size.
///
/// Literal newlines are flattened into the word stream along with all
/// other whitespace, so paragraph breaks in the source are not preserved
/// as forced breaks. A word too wide for an empty line closes that
/// (empty) line first and then overflows on a line of its own.
pub fn wrap_words<M: TextMeasure>(
    measure: &M,
    text: &str,
    font: &FontId,
    size: f32,
    max_width: f32,
) -> Vec<Line> {
    debug_assert!(max_width > 0.0, "wrap max_width must be positive");

    let mut lines = Vec::new();
    let mut words: Vec<String> = Vec::new();
    let mut line_text = String::new();

    for word in text.split_whitespace() {
        let candidate = if line_text.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", line_text, word)
        };
        if measure.width(&candidate, font, size) <= max_width {
            line_text = candidate;
            words.push(word.to_string());
        } else {
            lines.push(Line {
                words: std::mem::take(&mut words),
            });
            line_text = word.to_string();
            words.push(word.to_string());
        }
    }
    if !words.is_empty() {
        lines.push(Line { words });
    }
    lines
}

/// Joint search over font size and line breaks.
///
/// Starting at `initial_size` and descending by 1, the text is re-wrapped
/// from scratch at each candidate size (a smaller font fits more words
/// per line, so line boundaries cannot be reused) until the block height
/// `lines × (size + line_spacing)` fits within `max_height`. When no size
/// down to `min_size` fits, the `min_size` layout is accepted anyway.
#[allow(clippy::too_many_arguments)]
pub fn reflow<M: TextMeasure>(
    measure: &M,
    text: &str,
    font: &FontId,
    max_width: f32,
    max_height: f32,
    initial_size: u32,
    min_size: u32,
    line_spacing: f32,
) -> Paragraph {
    let mut size = initial_size;
    loop {
        let lines = wrap_words(measure, text, font, size as f32, max_width);
        let total_height = lines.len() as f32 * (size as f32 + line_spacing);
        if total_height <= max_height || size <= min_size {
            if total_height > max_height {
                log::debug!(
                    "Text block of {} lines still {}pt tall at floor size {}; overflowing",
                    lines.len(),
                    total_height,
                    size
                );
            }
            return Paragraph {
                lines,
                font_size: size,
            };
        }
        size -= 1;
    }
}

/// Lays out `text` inside `bounds` and draws it justified, in black.
///
/// Lines are drawn top-to-bottom from the box origin, each one
/// `size + line_spacing` below the previous. The last line, and any line
/// with a single word, is drawn left-aligned with natural spaces; every
/// other line distributes the leftover width evenly between its words so
/// the final word ends flush with the right edge.
#[allow(clippy::too_many_arguments)]
pub fn draw_justified<S: Surface, M: TextMeasure>(
    surface: &mut S,
    measure: &M,
    text: &str,
    bounds: &LayoutBox,
    font: &FontId,
    initial_size: u32,
    min_size: u32,
    line_spacing: f32,
) {
    let paragraph = reflow(
        measure,
        text,
        font,
        bounds.max_width,
        bounds.max_height,
        initial_size,
        min_size,
        line_spacing,
    );
    let size = paragraph.font_size as f32;
    let line_height = size + line_spacing;

    surface.set_fill_color(Color::black());

    let last = paragraph.lines.len().saturating_sub(1);
    let mut y = bounds.y;
    for (i, line) in paragraph.lines.iter().enumerate() {
        if i == last || line.words.len() <= 1 {
            let joined = line.text();
            if !joined.is_empty() {
                surface.draw_string(bounds.x, y, &joined, font, size);
            }
        } else {
            let summed_word_width: f32 = line
                .words
                .iter()
                .map(|w| measure.width(w, font, size))
                .sum();
            let gaps = (line.words.len() - 1) as f32;
            let extra_space = (bounds.max_width - summed_word_width) / gaps;

            let mut word_x = bounds.x;
            for word in &line.words {
                surface.draw_string(word_x, y, word, font, size);
                word_x += measure.width(word, font, size) + extra_space;
            }
        }
        y -= line_height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{CharMetrics, DrawOp, RecordingSurface};

    fn font() -> FontId {
        FontId::regular("Inter")
    }

    const FOX: &str = "The quick brown fox jumps over the lazy dog";

    #[test]
    fn test_wrap_preserves_word_order() {
        let lines = wrap_words(&CharMetrics, FOX, &font(), 12.0, 150.0);
        let flattened: Vec<String> = lines.iter().flat_map(|l| l.words.clone()).collect();
        let expected: Vec<String> = FOX.split_whitespace().map(String::from).collect();
        assert_eq!(flattened, expected);
    }

    #[test]
    fn test_wrap_lines_fit_width() {
        let size = 12.0;
        let max_width = 150.0;
        let lines = wrap_words(&CharMetrics, FOX, &font(), size, max_width);
        assert!(lines.len() >= 2);
        for line in &lines {
            let w = CharMetrics.width(&line.text(), &font(), size);
            assert!(w <= max_width, "line {:?} measures {} > {}", line.text(), w, max_width);
        }
    }

    #[test]
    fn test_wrap_flattens_newlines() {
        let text = "First paragraph.\n\nSecond paragraph.";
        let lines = wrap_words(&CharMetrics, text, &font(), 10.0, 1000.0);
        // Blank lines are whitespace like any other: one packed line.
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text(), "First paragraph. Second paragraph.");
    }

    #[test]
    fn test_wrap_oversized_first_word_closes_empty_line() {
        // Word width at size 10: 20 chars * 6 = 120 > 50.
        let text = "aaaaaaaaaaaaaaaaaaaa tail";
        let lines = wrap_words(&CharMetrics, text, &font(), 10.0, 50.0);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].words.is_empty());
        assert_eq!(lines[1].text(), "aaaaaaaaaaaaaaaaaaaa");
        assert_eq!(lines[2].text(), "tail");
    }

    #[test]
    fn test_wrap_empty_text() {
        assert!(wrap_words(&CharMetrics, "", &font(), 12.0, 100.0).is_empty());
        assert!(wrap_words(&CharMetrics, "   \n  ", &font(), 12.0, 100.0).is_empty());
    }

    #[test]
    fn test_reflow_height_bound_holds_when_satisfiable() {
        let max_height = 120.0;
        let paragraph = reflow(&CharMetrics, FOX, &font(), 100.0, max_height, 20, 8, 2.0);
        assert!(paragraph.height(2.0) <= max_height);
        assert!(paragraph.font_size >= 8 && paragraph.font_size <= 20);
    }

    #[test]
    fn test_reflow_picks_largest_fitting_size() {
        let max_width = 100.0;
        let max_height = 120.0;
        let chosen = reflow(&CharMetrics, FOX, &font(), max_width, max_height, 20, 8, 2.0);
        // One size up must not fit, otherwise the search stopped early.
        if chosen.font_size < 20 {
            let larger = wrap_words(&CharMetrics, FOX, &font(), (chosen.font_size + 1) as f32, max_width);
            let larger_height = larger.len() as f32 * ((chosen.font_size + 1) as f32 + 2.0);
            assert!(larger_height > max_height);
        }
    }

    #[test]
    fn test_reflow_fallback_at_floor_never_empty() {
        // Nothing fits 10pt of height, even at size 8.
        let paragraph = reflow(&CharMetrics, FOX, &font(), 60.0, 10.0, 20, 8, 2.0);
        assert_eq!(paragraph.font_size, 8);
        assert!(!paragraph.lines.is_empty());
        assert!(paragraph.height(2.0) > 10.0);
    }

    #[test]
    fn test_reflow_idempotent() {
        let a = reflow(&CharMetrics, FOX, &font(), 100.0, 120.0, 20, 8, 2.0);
        let b = reflow(&CharMetrics, FOX, &font(), 100.0, 120.0, 20, 8, 2.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_fox_scenario_shrinks_and_wraps() {
        // maxWidth=100, sizes 20 down to 8: the sentence cannot stay on
        // one line at any size, and the height budget forces shrinking
        // through multiple integer sizes.
        let paragraph = reflow(&CharMetrics, FOX, &font(), 100.0, 60.0, 20, 8, 2.0);
        assert!(paragraph.font_size < 19, "must shrink through multiple sizes");
        assert!(paragraph.lines.len() >= 2, "must wrap into at least two lines");
    }

    #[test]
    fn test_justified_lines_end_flush_with_right_edge() {
        let bounds = LayoutBox::new(64.0, 700.0, 150.0, 500.0);
        let mut surface = RecordingSurface::new();
        draw_justified(&mut surface, &CharMetrics, FOX, &bounds, &font(), 12, 8, 2.0);

        // Recompute the layout to know which lines were justified.
        let paragraph = reflow(&CharMetrics, FOX, &font(), 150.0, 500.0, 12, 8, 2.0);
        let size = paragraph.font_size as f32;
        assert!(paragraph.lines.len() >= 3, "scenario needs justified lines");

        let texts = surface.texts();
        let mut op_idx = 0;
        for (i, line) in paragraph.lines.iter().enumerate() {
            let is_justified = i != paragraph.lines.len() - 1 && line.words.len() > 1;
            if is_justified {
                // Last word of the line must end at x + max_width.
                let last_word_op = texts[op_idx + line.words.len() - 1];
                if let DrawOp::Text { x, text, .. } = last_word_op {
                    let end = x + CharMetrics.width(text, &font(), size);
                    assert!(
                        (end - (bounds.x + bounds.max_width)).abs() < 1e-3,
                        "justified line {} ends at {}, expected {}",
                        i,
                        end,
                        bounds.x + bounds.max_width
                    );
                } else {
                    panic!("expected text op");
                }
                op_idx += line.words.len();
            } else {
                op_idx += 1;
            }
        }
    }

    #[test]
    fn test_last_line_left_aligned() {
        let bounds = LayoutBox::new(10.0, 500.0, 150.0, 500.0);
        let mut surface = RecordingSurface::new();
        draw_justified(&mut surface, &CharMetrics, FOX, &bounds, &font(), 12, 8, 2.0);

        let paragraph = reflow(&CharMetrics, FOX, &font(), 150.0, 500.0, 12, 8, 2.0);
        let last_line = paragraph.lines.last().unwrap();

        // The last draw op is the whole last line at the left edge.
        let last_op = surface.texts().into_iter().last().unwrap().clone();
        if let DrawOp::Text { x, text, .. } = last_op {
            assert_eq!(x, 10.0);
            assert_eq!(text, last_line.text());
        } else {
            panic!("expected text op");
        }
    }

    #[test]
    fn test_lines_step_down_by_size_plus_spacing() {
        let bounds = LayoutBox::new(0.0, 400.0, 150.0, 500.0);
        let mut surface = RecordingSurface::new();
        draw_justified(&mut surface, &CharMetrics, FOX, &bounds, &font(), 12, 8, 3.0);

        let paragraph = reflow(&CharMetrics, FOX, &font(), 150.0, 500.0, 12, 8, 3.0);
        let line_height = paragraph.font_size as f32 + 3.0;

        let ys: Vec<f32> = surface
            .texts()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { y, .. } => Some(*y),
                _ => None,
            })
            .collect();
        let mut distinct: Vec<f32> = Vec::new();
        for y in ys {
            if distinct.last().map(|l| (l - y).abs() > 1e-6).unwrap_or(true) {
                distinct.push(y);
            }
        }
        assert_eq!(distinct.len(), paragraph.lines.len());
        for pair in distinct.windows(2) {
            assert!((pair[0] - pair[1] - line_height).abs() < 1e-4);
        }
    }

    #[test]
    fn test_single_word_line_not_justified() {
        // A single long word on its own line must be drawn at the left
        // edge, never stretched.
        let text = "stretchedword a b c d e f g h i j k l m n o p";
        let bounds = LayoutBox::new(0.0, 300.0, 80.0, 500.0);
        let mut surface = RecordingSurface::new();
        draw_justified(&mut surface, &CharMetrics, text, &bounds, &font(), 12, 8, 2.0);

        let texts = surface.texts();
        let first_text = texts.first().expect("text must be drawn");
        if let DrawOp::Text { x, .. } = first_text {
            assert_eq!(*x, 0.0);
        }
    }
}
