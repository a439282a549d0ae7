//! Slot encoding.
//!
//! A slot holds one whole collection, encoded as a single value so a write is
//! always a full replace.

use super::error::StoreError;
use crate::core::Transformation;
use serde::{Deserialize, Serialize};

/// On-disk format for a slot
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotFormat {
    /// JSON array of records
    #[default]
    Json,
    /// Compact bincode encoding
    Binary,
}

impl SlotFormat {
    /// Encode a collection for storage.
    pub fn encode(self, records: &[Transformation]) -> Result<Vec<u8>, StoreError> {
        match self {
            Self::Json => serde_json::to_vec(records)
                .map_err(|e| StoreError::Serialization(e.to_string())),
            Self::Binary => {
                bincode::serialize(records).map_err(|e| StoreError::Serialization(e.to_string()))
            }
        }
    }

    /// Decode a collection read from storage.
    pub fn decode(self, bytes: &[u8]) -> Result<Vec<Transformation>, StoreError> {
        match self {
            Self::Json => serde_json::from_slice(bytes)
                .map_err(|e| StoreError::Deserialization(e.to_string())),
            Self::Binary => bincode::deserialize(bytes)
                .map_err(|e| StoreError::Deserialization(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Transformation> {
        vec![
            Transformation::new("Ada", "Αdα"),
            Transformation::new("Grace Hopper", "Ģŕαçε Ηορρεŕ"),
        ]
    }

    #[test]
    fn json_is_an_array_of_records() {
        let bytes = SlotFormat::Json.encode(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let array = value.as_array().unwrap();
        assert_eq!(array.len(), 2);
        assert_eq!(array[0]["original"], "Ada");
    }

    #[test]
    fn binary_preserves_order_and_fields() {
        let records = sample();
        let bytes = SlotFormat::Binary.encode(&records).unwrap();
        assert_eq!(SlotFormat::Binary.decode(&bytes).unwrap(), records);
    }

    #[test]
    fn empty_collection_roundtrips() {
        for format in [SlotFormat::Json, SlotFormat::Binary] {
            let bytes = format.encode(&[]).unwrap();
            assert!(format.decode(&bytes).unwrap().is_empty());
        }
    }

    #[test]
    fn garbage_is_a_deserialization_error() {
        let err = SlotFormat::Json.decode(b"{not json").unwrap_err();
        assert!(matches!(err, StoreError::Deserialization(_)));

        let err = SlotFormat::Binary.decode(&[0xff; 3]).unwrap_err();
        assert!(matches!(err, StoreError::Deserialization(_)));
    }

    #[test]
    fn format_names_are_lowercase() {
        assert_eq!(serde_json::to_string(&SlotFormat::Binary).unwrap(), "\"binary\"");
        let parsed: SlotFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(parsed, SlotFormat::Json);
    }
}
