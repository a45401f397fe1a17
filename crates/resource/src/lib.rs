//! Resource providers for report assets.
//!
//! Fonts, cover backgrounds, and the sector catalog all come through the
//! `ResourceProvider` trait from sectorbrief-traits, so the composer
//! never touches the filesystem directly.
//!
//! - [`FilesystemResourceProvider`]: loads assets from a base directory
//! - [`InMemoryResourceProvider`]: pre-populated store, re-exported from
//!   sectorbrief-traits for tests and embedding

mod filesystem;

pub use filesystem::FilesystemResourceProvider;

pub use sectorbrief_traits::InMemoryResourceProvider;
