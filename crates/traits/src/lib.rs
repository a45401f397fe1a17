//! Shared traits for the sectorbrief report engine.
//!
//! These are the seams between the crates: text measurement, the drawing
//! surface, and resource loading. The layout engine is written against
//! these traits only, so it can be tested without a PDF backend.

mod measure;
mod resource;
mod surface;

pub use measure::TextMeasure;
pub use resource::{InMemoryResourceProvider, ResourceError, ResourceProvider, SharedResourceData};
pub use surface::{Surface, SurfaceError};
