//! PDF drawing surface backed by lopdf.
//!
//! `PdfCanvas` implements the `Surface` trait by accumulating content
//! stream operations per page and assembling the document object graph
//! in memory. Content streams are Flate-compressed; fonts are referenced
//! by PostScript name (Type1, WinAnsi encoding) rather than embedded.

mod canvas;
mod encoding;
mod error;
mod jpeg;

pub use canvas::PdfCanvas;
pub use error::RenderError;
