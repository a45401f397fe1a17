//! Financial-report PDF generator.
//!
//! Four strings in (title, recipient email, sector, ticker), one
//! finalized PDF out. The interesting work is the text-layout engine in
//! `sectorbrief-layout` — adaptive chips, shrink-to-fit lines, and
//! reflow-and-justify blocks — driven here by the page composer with a
//! theme, a sector catalog, and optional disk assets.
//!
//! ```no_run
//! use sectorbrief::{generate_report, ReportRequest};
//!
//! let request = ReportRequest {
//!     title: "Quarterly Sector Review".to_string(),
//!     email: "investor@example.com".to_string(),
//!     sector: "Technology".to_string(),
//!     ticker: "AAPL".to_string(),
//! };
//! let pdf_bytes = generate_report(&request, Some("assets")).unwrap();
//! std::fs::write("report.pdf", pdf_bytes).unwrap();
//! ```

pub mod copy;
pub mod report;
pub mod sectors;
pub mod theme;

pub use report::{ReportComposer, ReportError, ReportRequest};
pub use sectors::{SectorCatalog, SectorInfo};
pub use theme::Theme;

pub use sectorbrief_fonts::FontLibrary;
pub use sectorbrief_resource::{FilesystemResourceProvider, InMemoryResourceProvider};
pub use sectorbrief_traits::{ResourceProvider, Surface, TextMeasure};

use std::path::Path;

/// One-shot convenience wrapper: builds a composer with the default
/// theme (loading assets from `asset_dir` when given) and renders one
/// report.
pub fn generate_report<P: AsRef<Path>>(
    request: &ReportRequest,
    asset_dir: Option<P>,
) -> Result<Vec<u8>, ReportError> {
    let composer = match asset_dir {
        Some(dir) => {
            let provider = FilesystemResourceProvider::new(dir);
            ReportComposer::with_assets(Theme::default(), &provider)
        }
        None => ReportComposer::new(Theme::default()),
    };
    composer.compose(request)
}
