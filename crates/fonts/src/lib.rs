//! Font registration and text measurement for the report engine.
//!
//! `FontLibrary` holds TTF faces registered by (family, weight) and
//! measures string widths by shaping with rustybuzz. When a face is not
//! registered (or its data cannot be parsed) measurement falls back to
//! compiled-in Helvetica metrics, so the engine always has a working
//! metrics provider and a face the PDF backend can reference.

mod builtin;
mod library;

pub use builtin::{builtin_postscript_name, builtin_width};
pub use library::{FontError, FontFaceInfo, FontLibrary};
