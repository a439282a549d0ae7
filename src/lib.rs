//! Namecloak: disguise names with look-alike Unicode glyphs.
//!
//! Namecloak follows a "pure core, imperative shell" layout. The core
//! substitutes each character of a name with a visually similar glyph and
//! performs no I/O. The shell keeps a bounded, de-duplicated history of
//! results and a list of favorites, persisted to a key-value backend.
//!
//! # Core Concepts
//!
//! - **Glyph table**: each mapped character has ordered variant sets of
//!   look-alike glyphs ([`core::GlyphTable`])
//! - **Transform**: picks a variant set by index and a random glyph from it
//!   ([`core::Transformer`])
//! - **Transformation**: an immutable `(original, transformed)` record with
//!   an id and timestamp ([`core::Transformation`])
//! - **History store**: most-recent-first history capped at 50 entries plus
//!   unbounded favorites, written through on every change
//!   ([`store::HistoryStore`])
//! - **Draft session**: optional caller-side debounce and commit policy for
//!   live typing ([`draft::DraftSession`])
//!
//! # Example
//!
//! ```rust
//! use namecloak::core::{transform, Transformation};
//! use namecloak::store::{HistoryStore, MemoryStore};
//!
//! let disguised = transform("Ada Lovelace", 0);
//! assert_eq!(disguised.chars().count(), 12);
//!
//! let mut store = HistoryStore::open(MemoryStore::new());
//! let record = Transformation::new("Ada Lovelace", disguised);
//! store.add_to_history(record.clone());
//! store.toggle_favorite(&record);
//!
//! assert_eq!(store.history().len(), 1);
//! assert!(store.is_favorite(&record));
//! ```

pub mod config;
pub mod core;
pub mod draft;
pub mod store;

// Re-export commonly used types
pub use config::Config;
pub use crate::core::{transform, GlyphTable, Transformation, Transformer};
pub use store::{HistoryStore, SharedHistoryStore};
