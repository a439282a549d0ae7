//! Transformation records.
//!
//! A transformation pairs a source name with one disguised rendering of it.
//! Records are immutable values; the history store keeps them, the caller
//! displays them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One generated disguise of a name.
///
/// `id` identifies the record for storage and removal. Two records with the
/// same `(original, transformed)` pair are the same content even though their
/// ids and timestamps differ; de-duplication and favorite matching use that
/// pair.
///
/// The serialized form uses the field names `id`, `original`, `transformed`
/// and `date`. `createdAt` is accepted in place of `date` when reading.
///
/// # Example
///
/// ```rust
/// use namecloak::core::Transformation;
///
/// let first = Transformation::new("Ada", "Αdα");
/// let second = Transformation::new("Ada", "Αdα");
///
/// assert_ne!(first.id, second.id);
/// assert!(first.same_content(&second));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transformation {
    /// Unique identifier assigned at creation
    pub id: Uuid,
    /// The text as typed
    pub original: String,
    /// The disguised text
    pub transformed: String,
    /// When the record was created
    #[serde(rename = "date", alias = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Transformation {
    /// Create a record with a fresh id, stamped with the current time.
    pub fn new(original: impl Into<String>, transformed: impl Into<String>) -> Self {
        Self::with_timestamp(original, transformed, Utc::now())
    }

    /// Create a record with a fresh id and an explicit timestamp.
    pub fn with_timestamp(
        original: impl Into<String>,
        transformed: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            original: original.into(),
            transformed: transformed.into(),
            created_at,
        }
    }

    /// The `(original, transformed)` pair used for content matching.
    pub fn content_key(&self) -> (&str, &str) {
        (&self.original, &self.transformed)
    }

    /// Whether both records carry the same text pair.
    pub fn same_content(&self, other: &Transformation) -> bool {
        self.content_key() == other.content_key()
    }
}
