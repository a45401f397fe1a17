use serde::{Deserialize, Serialize};

/// Weight variant of a font face. The report engine only distinguishes
/// the two variants its theme actually uses.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

/// Identity of a font face: family name plus weight variant.
///
/// A draw call pairs a `FontId` with a size; the pair is chosen per call
/// and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontId {
    pub family: String,
    pub weight: FontWeight,
}

impl FontId {
    pub fn new(family: impl Into<String>, weight: FontWeight) -> Self {
        Self {
            family: family.into(),
            weight,
        }
    }

    pub fn regular(family: impl Into<String>) -> Self {
        Self::new(family, FontWeight::Regular)
    }

    pub fn bold(family: impl Into<String>) -> Self {
        Self::new(family, FontWeight::Bold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_id_equality() {
        assert_eq!(FontId::bold("Inter"), FontId::new("Inter", FontWeight::Bold));
        assert_ne!(FontId::bold("Inter"), FontId::regular("Inter"));
    }
}
