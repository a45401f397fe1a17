//! Report styling as data.
//!
//! Every color, coordinate, and asset path the composer uses lives here,
//! so page composition code contains no magic numbers and alternate
//! themes are a matter of constructing a different `Theme` value.

use sectorbrief_layout::ChipStyle;
use sectorbrief_types::{Color, FontId};

/// Fixed styling parameters for one report rendition.
///
/// Vertical positions on the cover are stored as drops from the top edge
/// (the cover artwork was measured that way); the composer converts them
/// to PDF bottom-up coordinates.
#[derive(Debug, Clone)]
pub struct Theme {
    pub page_width: f32,
    pub page_height: f32,

    /// Highlight color for headings and the cover accent word.
    pub accent: Color,
    /// Flat cover background when no cover image is available.
    pub cover_fallback: Color,
    /// Background fill of the content pages.
    pub content_background: Color,

    pub body_font: FontId,
    pub heading_font: FontId,

    /// Left margin shared by all pages.
    pub margin_x: f32,
    /// Heading baseline drop from the top of content pages.
    pub heading_drop: f32,
    /// Body block top drop, width, height, and line spacing.
    pub body_drop: f32,
    pub body_width: f32,
    pub body_height: f32,
    pub body_line_spacing: f32,

    /// Cover layout drops from the top edge.
    pub cover_headline_drop: f32,
    pub cover_chip_drop: f32,
    pub cover_title_drop: f32,
    pub cover_footer_drop: f32,
    /// X position of the accent word in the cover headline.
    pub cover_accent_x: f32,
    /// X position of the recipient email after the "For" label.
    pub cover_email_x: f32,
    /// Maximum width for the shrink-fitted title and email lines.
    pub cover_fit_width: f32,

    pub chip_style: ChipStyle,
    /// Horizontal gap between consecutive chips.
    pub chip_gutter: f32,

    /// Asset paths, resolved through the resource provider.
    pub cover_image_path: String,
    pub font_regular_path: String,
    pub font_bold_path: String,
    pub sectors_config_path: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            page_width: 595.0,
            page_height: 842.0,

            accent: Color::rgb(0xF0, 0x74, 0x8A),
            cover_fallback: Color::rgb(0x1A, 0x36, 0x5D),
            content_background: Color::rgb(0xF7, 0xFA, 0xFC),

            body_font: FontId::regular("Inter"),
            heading_font: FontId::bold("Inter"),

            margin_x: 64.0,
            heading_drop: 120.0,
            body_drop: 180.0,
            body_width: 464.0,
            body_height: 500.0,
            body_line_spacing: 3.0,

            cover_headline_drop: 615.0,
            cover_chip_drop: 664.0,
            cover_title_drop: 705.0,
            cover_footer_drop: 752.0,
            cover_accent_x: 200.0,
            cover_email_x: 105.0,
            cover_fit_width: 400.0,

            chip_style: ChipStyle {
                padding_x: 10.0,
                padding_y: 6.0,
                corner_radius: 5.0,
                fill: Color::white(),
                text_color: Color::rgb(0x91, 0x13, 0x2A),
            },
            chip_gutter: 10.0,

            cover_image_path: "cover.jpg".to_string(),
            font_regular_path: "fonts/Inter-Regular.ttf".to_string(),
            font_bold_path: "fonts/Inter-Bold.ttf".to_string(),
            sectors_config_path: "sectors_config.json".to_string(),
        }
    }
}

impl Theme {
    /// Converts a drop from the top edge into a bottom-up y coordinate.
    pub fn from_top(&self, drop: f32) -> f32 {
        self.page_height - drop
    }
}
