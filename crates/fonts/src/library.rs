use crate::builtin::{builtin_postscript_name, builtin_width};
use sectorbrief_traits::TextMeasure;
use sectorbrief_types::{FontId, FontWeight};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FontError {
    #[error("Invalid font data for '{family}': {message}")]
    InvalidData { family: String, message: String },

    #[error("Font registry lock poisoned")]
    LockPoisoned,
}

/// A registered font face: raw TTF bytes plus the metadata the measurer
/// and the PDF backend need.
struct FaceEntry {
    postscript_name: String,
    units_per_em: f32,
    data: Arc<Vec<u8>>,
}

impl FaceEntry {
    /// Creates a lightweight Face view over the font data. This is cheap
    /// (header parsing) and avoids self-referential struct issues.
    fn as_face(&self) -> Option<rustybuzz::Face<'_>> {
        rustybuzz::Face::from_slice(&self.data, 0)
    }
}

/// Key for the face registry and the measurement cache.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
struct FaceKey {
    family: String,
    weight: FontWeight,
}

impl FaceKey {
    fn new(font: &FontId) -> Self {
        Self {
            family: font.family.to_lowercase(),
            weight: font.weight,
        }
    }
}

/// Metadata about a font face, used by the PDF backend to build its font
/// dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFaceInfo {
    pub postscript_name: String,
    pub family: String,
    pub weight: FontWeight,
}

/// Thread-safe font registry and metrics provider.
///
/// Faces are registered by (family, weight) from raw TTF data. Any face
/// that is not registered resolves to the built-in Helvetica variant of
/// the same weight; resolution never fails.
pub struct FontLibrary {
    faces: RwLock<HashMap<FaceKey, Arc<FaceEntry>>>,
    /// Cache of measured widths, keyed by (text, face, size bits).
    measurements: RwLock<HashMap<(String, FaceKey, u32), f32>>,
}

impl FontLibrary {
    pub fn new() -> Self {
        Self {
            faces: RwLock::new(HashMap::new()),
            measurements: RwLock::new(HashMap::new()),
        }
    }

    /// Registers a TTF face for (family, weight).
    ///
    /// # Errors
    ///
    /// Returns `FontError::InvalidData` if the bytes do not parse as a
    /// font face. Re-registering a key replaces the previous face.
    pub fn register(
        &self,
        family: &str,
        weight: FontWeight,
        data: Vec<u8>,
    ) -> Result<(), FontError> {
        let face = ttf_parser::Face::parse(&data, 0).map_err(|e| FontError::InvalidData {
            family: family.to_string(),
            message: e.to_string(),
        })?;
        let units_per_em = face.units_per_em() as f32;
        let postscript_name = extract_postscript_name(&face)
            .unwrap_or_else(|| format!("{}-{:?}", family.replace(' ', ""), weight));
        log::debug!(
            "Registered font family='{}' weight={:?} as '{}'",
            family,
            weight,
            postscript_name
        );

        let entry = Arc::new(FaceEntry {
            postscript_name,
            units_per_em,
            data: Arc::new(data),
        });
        let key = FaceKey::new(&FontId::new(family, weight));
        self.faces
            .write()
            .map_err(|_| FontError::LockPoisoned)?
            .insert(key, entry);
        Ok(())
    }

    /// True if (family, weight) resolves to registered data rather than
    /// the built-in fallback.
    pub fn is_registered(&self, font: &FontId) -> bool {
        self.faces
            .read()
            .map(|f| f.contains_key(&FaceKey::new(font)))
            .unwrap_or(false)
    }

    /// The PostScript name the PDF backend should reference for `font`.
    /// Unregistered fonts resolve to the built-in face for their weight.
    pub fn postscript_name(&self, font: &FontId) -> String {
        if let Ok(faces) = self.faces.read()
            && let Some(entry) = faces.get(&FaceKey::new(font))
        {
            return entry.postscript_name.clone();
        }
        builtin_postscript_name(font.weight).to_string()
    }

    /// All faces a document using this library may reference: the two
    /// built-in fallbacks plus every registered face, in a stable order.
    pub fn registered_faces(&self) -> Vec<FontFaceInfo> {
        let mut infos = vec![
            FontFaceInfo {
                postscript_name: builtin_postscript_name(FontWeight::Regular).to_string(),
                family: "Helvetica".to_string(),
                weight: FontWeight::Regular,
            },
            FontFaceInfo {
                postscript_name: builtin_postscript_name(FontWeight::Bold).to_string(),
                family: "Helvetica".to_string(),
                weight: FontWeight::Bold,
            },
        ];
        if let Ok(faces) = self.faces.read() {
            let mut registered: Vec<FontFaceInfo> = faces
                .iter()
                .map(|(key, entry)| FontFaceInfo {
                    postscript_name: entry.postscript_name.clone(),
                    family: key.family.clone(),
                    weight: key.weight,
                })
                .collect();
            // HashMap order is arbitrary; keep the font dictionary stable
            // across runs so identical inputs produce identical documents.
            registered.sort_by(|a, b| a.postscript_name.cmp(&b.postscript_name));
            infos.extend(registered);
        }
        infos.dedup_by(|a, b| a.postscript_name == b.postscript_name);
        infos
    }

    fn measure_registered(&self, entry: &FaceEntry, text: &str, size: f32) -> Option<f32> {
        let face = entry.as_face()?;
        let mut buffer = rustybuzz::UnicodeBuffer::new();
        buffer.push_str(text);
        buffer.guess_segment_properties();

        let glyph_buffer = rustybuzz::shape(&face, &[], buffer);
        let scale = size / entry.units_per_em;
        let width: f32 = glyph_buffer
            .glyph_positions()
            .iter()
            .map(|p| p.x_advance as f32 * scale)
            .sum();
        Some(width)
    }
}

impl Default for FontLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasure for FontLibrary {
    fn width(&self, text: &str, font: &FontId, size: f32) -> f32 {
        let key = FaceKey::new(font);

        let entry = match self.faces.read() {
            Ok(faces) => faces.get(&key).cloned(),
            Err(_) => None,
        };
        let Some(entry) = entry else {
            return builtin_width(text, font.weight, size);
        };

        let cache_key = (text.to_string(), key, size.to_bits());
        if let Ok(cache) = self.measurements.read()
            && let Some(&width) = cache.get(&cache_key)
        {
            return width;
        }

        let width = match self.measure_registered(&entry, text, size) {
            Some(w) => w,
            None => {
                log::warn!(
                    "Font data for '{}' failed to parse during shaping; using built-in metrics",
                    font.family
                );
                builtin_width(text, font.weight, size)
            }
        };

        if let Ok(mut cache) = self.measurements.write() {
            cache.insert(cache_key, width);
        }
        width
    }
}

/// Extracts the PostScript name from a parsed face, falling back to the
/// full name and then the family name, spaces stripped.
fn extract_postscript_name(face: &ttf_parser::Face<'_>) -> Option<String> {
    let name_of = |id: u16| {
        face.names()
            .into_iter()
            .find(|n| n.name_id == id)
            .and_then(|n| n.to_string())
    };

    if let Some(ps_name) = name_of(ttf_parser::name_id::POST_SCRIPT_NAME) {
        return Some(ps_name);
    }
    if let Some(full_name) = name_of(ttf_parser::name_id::FULL_NAME) {
        return Some(full_name.replace(' ', ""));
    }
    name_of(ttf_parser::name_id::FAMILY).map(|f| f.replace(' ', ""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_rejects_garbage() {
        let library = FontLibrary::new();
        let result = library.register("Inter", FontWeight::Regular, vec![0, 1, 2, 3]);
        assert!(matches!(result, Err(FontError::InvalidData { .. })));
        assert!(!library.is_registered(&FontId::regular("Inter")));
    }

    #[test]
    fn test_unregistered_family_measures_with_builtin() {
        let library = FontLibrary::new();
        let font = FontId::bold("Inter");
        let w = library.width("Sector", &font, 10.0);
        assert_eq!(w, builtin_width("Sector", FontWeight::Bold, 10.0));
    }

    #[test]
    fn test_unregistered_family_resolves_builtin_name() {
        let library = FontLibrary::new();
        assert_eq!(library.postscript_name(&FontId::regular("Inter")), "Helvetica");
        assert_eq!(library.postscript_name(&FontId::bold("Inter")), "Helvetica-Bold");
    }

    #[test]
    fn test_registered_faces_always_contains_builtins() {
        let library = FontLibrary::new();
        let faces = library.registered_faces();
        let names: Vec<&str> = faces.iter().map(|f| f.postscript_name.as_str()).collect();
        assert!(names.contains(&"Helvetica"));
        assert!(names.contains(&"Helvetica-Bold"));
    }

    #[test]
    fn test_measurement_is_deterministic() {
        let library = FontLibrary::new();
        let font = FontId::regular("Inter");
        let a = library.width("The quick brown fox", &font, 12.0);
        let b = library.width("The quick brown fox", &font, 12.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_measurement_monotonic_in_size() {
        let library = FontLibrary::new();
        let font = FontId::regular("Inter");
        let small = library.width("Methodology", &font, 8.0);
        let large = library.width("Methodology", &font, 9.0);
        assert!(large > small);
    }
}
