//! Filesystem-backed resource provider.
//!
//! Asset paths from configuration are untrusted input, so every lookup is
//! validated to stay inside the base directory. Traversal attempts
//! (`../../../etc/passwd`, absolute paths) come back as `NotFound`.

use sectorbrief_traits::{ResourceError, ResourceProvider, SharedResourceData};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Loads report assets (fonts, background images, sector catalogs) from a
/// base directory on the local filesystem.
#[derive(Debug)]
pub struct FilesystemResourceProvider {
    base_path: PathBuf,
    /// Canonicalized base, used for the containment check.
    canonical_base: Option<PathBuf>,
}

impl FilesystemResourceProvider {
    /// Creates a provider rooted at `base_path`. All resource paths are
    /// resolved relative to it.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        let base = base_path.as_ref().to_path_buf();
        // Canonicalization can fail if the directory does not exist yet.
        let canonical = base.canonicalize().ok();
        Self {
            base_path: base,
            canonical_base: canonical,
        }
    }

    /// Returns the base directory for this provider.
    pub fn base(&self) -> &Path {
        &self.base_path
    }

    /// Resolves `path` against the base directory, returning `None` when
    /// the result would escape it.
    fn resolve_path_safe(&self, path: &str) -> Option<PathBuf> {
        if Path::new(path).is_absolute() {
            return None;
        }

        let full_path = self.base_path.join(path);

        if let Ok(canonical) = full_path.canonicalize()
            && let Some(ref base) = self.canonical_base
        {
            if canonical.starts_with(base) {
                return Some(canonical);
            }
            return None;
        }

        // Canonicalization fails for missing files; fall back to rejecting
        // any path with a parent-directory component.
        for component in Path::new(path).components() {
            if let std::path::Component::ParentDir = component {
                return None;
            }
        }

        Some(full_path)
    }
}

impl ResourceProvider for FilesystemResourceProvider {
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError> {
        let full_path = self.resolve_path_safe(path).ok_or_else(|| {
            ResourceError::NotFound(format!("{} (path traversal blocked)", path))
        })?;

        std::fs::read(&full_path).map(Arc::new).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ResourceError::NotFound(path.to_string())
            } else {
                ResourceError::LoadFailed {
                    path: path.to_string(),
                    message: e.to_string(),
                }
            }
        })
    }

    fn exists(&self, path: &str) -> bool {
        self.resolve_path_safe(path)
            .map(|p| p.exists())
            .unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "FilesystemResourceProvider"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_existing_asset() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("cover_background.jpg"), b"jpeg bytes").unwrap();

        let provider = FilesystemResourceProvider::new(dir.path());
        let data = provider.load("cover_background.jpg").unwrap();
        assert_eq!(&*data, b"jpeg bytes");
    }

    #[test]
    fn test_missing_asset_is_not_found() {
        let dir = tempdir().unwrap();
        let provider = FilesystemResourceProvider::new(dir.path());

        let result = provider.load("missing.ttf");
        assert!(matches!(result, Err(ResourceError::NotFound(_))));
    }

    #[test]
    fn test_exists() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("sectors_config.json"), b"{}").unwrap();

        let provider = FilesystemResourceProvider::new(dir.path());
        assert!(provider.exists("sectors_config.json"));
        assert!(!provider.exists("other.json"));
    }

    #[test]
    fn test_nested_paths_allowed() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("fonts")).unwrap();
        fs::write(dir.path().join("fonts/Inter-Regular.ttf"), b"font data").unwrap();

        let provider = FilesystemResourceProvider::new(dir.path());
        assert!(provider.exists("fonts/Inter-Regular.ttf"));
        assert_eq!(&*provider.load("fonts/Inter-Regular.ttf").unwrap(), b"font data");
    }

    #[test]
    fn test_blocks_path_traversal() {
        let dir = tempdir().unwrap();
        let provider = FilesystemResourceProvider::new(dir.path());

        assert!(provider.load("../../../etc/passwd").is_err());
        assert!(!provider.exists("../../../etc/passwd"));
        assert!(!provider.exists(".."));
        assert!(!provider.exists("fonts/../../secret"));
    }

    #[test]
    fn test_blocks_absolute_paths() {
        let dir = tempdir().unwrap();
        let provider = FilesystemResourceProvider::new(dir.path());

        assert!(provider.load("/etc/passwd").is_err());
        assert!(!provider.exists("/etc/passwd"));
    }
}
