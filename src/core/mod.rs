//! Pure core: glyph data, the substitution transform and transformation
//! records.
//!
//! Nothing in this module performs I/O. The transform is pure apart from the
//! random glyph choice, which callers can control by supplying the random
//! source. Persistence lives in [`crate::store`].

mod error;
mod glyphs;
mod transform;
mod transformation;

pub use error::GlyphTableError;
pub use glyphs::{GlyphTable, RawEntry};
pub use transform::{transform, Transformer};
pub use transformation::Transformation;
