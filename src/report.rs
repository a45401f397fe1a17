//! Page composer: sequences the report pages and produces the document.
//!
//! Composition is pure orchestration — every piece of text on a page
//! goes through the layout primitives (chip, shrink-to-fit, justify)
//! with theme-supplied coordinates. One `compose` call builds one
//! isolated canvas, so concurrent report generations share nothing.

use crate::copy;
use crate::sectors::{SectorCatalog, SectorInfo};
use crate::theme::Theme;
use sectorbrief_fonts::FontLibrary;
use sectorbrief_layout::{draw_chip, draw_justified, draw_shrinking, LayoutBox};
use sectorbrief_render_lopdf::{PdfCanvas, RenderError};
use sectorbrief_traits::{ResourceProvider, SharedResourceData, Surface};
use sectorbrief_types::{Color, Rect};
use std::sync::Arc;
use thiserror::Error;

const HEADLINE_SIZE: f32 = 40.0;
const HEADING_SIZE: f32 = 24.0;
const CHIP_SIZE: f32 = 10.0;
const FOOTER_LABEL_SIZE: f32 = 20.0;

const TITLE_INITIAL: u32 = 20;
const TITLE_MIN: u32 = 5;
const EMAIL_INITIAL: u32 = 18;
const EMAIL_MIN: u32 = 10;
const BODY_INITIAL: u32 = 12;
const METHODOLOGY_INITIAL: u32 = 11;
const BODY_MIN: u32 = 8;

/// The four strings that drive one report.
///
/// `sector`, when non-empty, is expected pre-normalized to
/// capitalized-words form by the caller; empty `sector` or `ticker`
/// skips the corresponding page.
#[derive(Debug, Clone, Default)]
pub struct ReportRequest {
    pub title: String,
    pub email: String,
    pub sector: String,
    pub ticker: String,
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),
}

/// Builds complete report documents from requests.
///
/// Assets (fonts, cover image, sector catalog) are loaded once at
/// construction; every load failure is absorbed into a logged fallback,
/// so a composer always exists and always renders.
pub struct ReportComposer {
    theme: Theme,
    fonts: Arc<FontLibrary>,
    catalog: SectorCatalog,
    cover_image: Option<SharedResourceData>,
}

impl ReportComposer {
    /// A composer with no external assets: built-in font metrics, flat
    /// cover fill, generic sector copy.
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            fonts: Arc::new(FontLibrary::new()),
            catalog: SectorCatalog::default(),
            cover_image: None,
        }
    }

    /// A composer that loads fonts, the cover image, and the sector
    /// catalog through `provider`. Missing or broken assets degrade to
    /// the same fallbacks as [`ReportComposer::new`].
    pub fn with_assets(theme: Theme, provider: &dyn ResourceProvider) -> Self {
        let fonts = FontLibrary::new();

        let font_files = [
            (&theme.body_font, &theme.font_regular_path),
            (&theme.heading_font, &theme.font_bold_path),
        ];
        for (font, path) in font_files {
            match provider.load(path) {
                Ok(data) => {
                    if let Err(e) = fonts.register(&font.family, font.weight, data.to_vec()) {
                        log::warn!("Registering '{}' failed ({}); using built-in face", path, e);
                    }
                }
                Err(e) => {
                    log::warn!("Font '{}' unavailable ({}); using built-in face", path, e);
                }
            }
        }

        let cover_image = match provider.load(&theme.cover_image_path) {
            Ok(data) => Some(data),
            Err(e) => {
                log::warn!("Cover image unavailable ({}); using flat cover fill", e);
                None
            }
        };

        let catalog = SectorCatalog::load(provider, &theme.sectors_config_path);

        Self {
            theme,
            fonts: Arc::new(fonts),
            catalog,
            cover_image,
        }
    }

    /// Renders the full document: cover, optional sector and ticker
    /// pages, methodology. Returns the finalized PDF bytes.
    pub fn compose(&self, request: &ReportRequest) -> Result<Vec<u8>, ReportError> {
        log::debug!(
            "Composing report: title='{}' sector='{}' ticker='{}'",
            request.title,
            request.sector,
            request.ticker
        );
        let mut canvas = PdfCanvas::new(
            self.theme.page_width,
            self.theme.page_height,
            Arc::clone(&self.fonts),
        )?;

        self.compose_cover(&mut canvas, request);
        canvas.show_page()?;

        if !request.sector.is_empty() {
            self.compose_sector(&mut canvas, &request.sector);
            canvas.show_page()?;
        }

        if !request.ticker.is_empty() {
            self.compose_ticker(&mut canvas, &request.ticker);
            canvas.show_page()?;
        }

        self.compose_methodology(&mut canvas);
        canvas.show_page()?;

        Ok(canvas.finish()?)
    }

    fn page_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.theme.page_width, self.theme.page_height)
    }

    fn compose_cover(&self, canvas: &mut PdfCanvas, request: &ReportRequest) {
        let t = &self.theme;

        let mut background_drawn = false;
        if let Some(image) = &self.cover_image {
            match canvas.draw_image(image, self.page_rect()) {
                Ok(()) => background_drawn = true,
                Err(e) => {
                    log::warn!("Cover image not drawable ({}); using flat cover fill", e);
                }
            }
        }
        if !background_drawn {
            canvas.set_fill_color(t.cover_fallback.clone());
            canvas.fill_rect(self.page_rect());
        }

        let headline_y = t.from_top(t.cover_headline_drop);
        canvas.set_fill_color(Color::white());
        canvas.draw_string(t.margin_x, headline_y, "Sector", &t.heading_font, HEADLINE_SIZE);
        canvas.set_fill_color(t.accent.clone());
        canvas.draw_string(
            t.cover_accent_x,
            headline_y,
            "Analysis",
            &t.heading_font,
            HEADLINE_SIZE,
        );

        let mut tags: Vec<&str> = Vec::new();
        if !request.sector.is_empty() {
            tags.push(&request.sector);
        }
        if !request.ticker.is_empty() {
            tags.push(&request.ticker);
        }
        tags.extend(["Market Analyst", "Sector Specialist"]);

        let chip_y = t.from_top(t.cover_chip_drop);
        let mut x = t.margin_x;
        for tag in tags {
            let rect = draw_chip(
                canvas,
                self.fonts.as_ref(),
                tag,
                x,
                chip_y,
                &t.body_font,
                CHIP_SIZE,
                &t.chip_style,
            );
            x += rect.width + t.chip_gutter;
        }

        draw_shrinking(
            canvas,
            self.fonts.as_ref(),
            &request.title,
            t.cover_fit_width,
            t.margin_x,
            t.from_top(t.cover_title_drop),
            &t.heading_font,
            TITLE_INITIAL,
            TITLE_MIN,
            Color::white(),
        );

        let footer_y = t.from_top(t.cover_footer_drop);
        canvas.set_fill_color(Color::white());
        canvas.draw_string(t.margin_x, footer_y, "For", &t.body_font, FOOTER_LABEL_SIZE);
        draw_shrinking(
            canvas,
            self.fonts.as_ref(),
            &request.email,
            t.cover_fit_width,
            t.cover_email_x,
            footer_y,
            &t.heading_font,
            EMAIL_INITIAL,
            EMAIL_MIN,
            t.accent.clone(),
        );
    }

    fn compose_sector(&self, canvas: &mut PdfCanvas, sector: &str) {
        let info = match self.catalog.get(sector) {
            Some(info) => info.clone(),
            None => {
                log::debug!("Sector '{}' not in catalog; using generic copy", sector);
                SectorInfo::default()
            }
        };
        let body = copy::sector_body(sector, &info);
        self.compose_content_page(
            canvas,
            &format!("Sector Analysis: {}", sector),
            &body,
            BODY_INITIAL,
        );
    }

    fn compose_ticker(&self, canvas: &mut PdfCanvas, ticker: &str) {
        let body = copy::ticker_body(ticker);
        self.compose_content_page(
            canvas,
            &format!("Ticker Analysis: {}", ticker),
            &body,
            BODY_INITIAL,
        );
    }

    fn compose_methodology(&self, canvas: &mut PdfCanvas) {
        let body = copy::methodology_body();
        self.compose_content_page(canvas, "Analysis Methodology", &body, METHODOLOGY_INITIAL);
    }

    /// Shared shape of the content pages: flat background, accent
    /// heading, one justified body block.
    fn compose_content_page(
        &self,
        canvas: &mut PdfCanvas,
        heading: &str,
        body: &str,
        initial_size: u32,
    ) {
        let t = &self.theme;

        canvas.set_fill_color(t.content_background.clone());
        canvas.fill_rect(self.page_rect());

        canvas.set_fill_color(t.accent.clone());
        canvas.draw_string(
            t.margin_x,
            t.from_top(t.heading_drop),
            heading,
            &t.heading_font,
            HEADING_SIZE,
        );

        let bounds = LayoutBox::new(
            t.margin_x,
            t.from_top(t.body_drop),
            t.body_width,
            t.body_height,
        );
        draw_justified(
            canvas,
            self.fonts.as_ref(),
            body,
            &bounds,
            &t.body_font,
            initial_size,
            BODY_MIN,
            t.body_line_spacing,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ReportRequest {
        ReportRequest {
            title: "Quarterly Sector Review".to_string(),
            email: "investor@example.com".to_string(),
            sector: "Technology".to_string(),
            ticker: "AAPL".to_string(),
        }
    }

    #[test]
    fn test_compose_produces_pdf_bytes() {
        let composer = ReportComposer::new(Theme::default());
        let bytes = composer.compose(&request()).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.7"));
    }

    #[test]
    fn test_compose_is_deterministic() {
        let composer = ReportComposer::new(Theme::default());
        let a = composer.compose(&request()).unwrap();
        let b = composer.compose(&request()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_new_composer_has_no_assets() {
        let composer = ReportComposer::new(Theme::default());
        assert!(composer.catalog.is_empty());
        assert!(composer.cover_image.is_none());
    }
}
