//! Glyph table construction errors.

use thiserror::Error;

/// Errors that can occur when building a glyph table from raw entries
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GlyphTableError {
    /// A key was registered without any variant sets
    #[error("Character {key:?} has no variant sets")]
    NoVariantSets { key: char },

    /// A variant set has no alternative characters
    #[error("Variant set {index} for character {key:?} is empty")]
    EmptyVariantSet { key: char, index: usize },
}
