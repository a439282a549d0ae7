//! Character substitution.
//!
//! The transformer is a pure mapping from `(text, variant index)` to disguised
//! text. The only impurity is the random glyph choice, which is drawn from an
//! injectable `rand::Rng` so callers and tests can seed it.

use super::glyphs::GlyphTable;
use rand::Rng;
use unicode_segmentation::UnicodeSegmentation;

/// Substitutes characters with look-alike glyphs from a [`GlyphTable`].
///
/// Input is walked one user-perceived character (extended grapheme cluster)
/// at a time. A cluster made of a single `char` with an entry in the table is
/// replaced by one glyph from variant set `variant_index % set_count`, chosen
/// uniformly at random. Every other cluster, including a letter carrying a
/// combining mark or an emoji sequence, passes through untouched. Output
/// always has the same number of `char`s as the input.
///
/// # Example
///
/// ```rust
/// use namecloak::core::Transformer;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let transformer = Transformer::standard();
/// let mut rng = StdRng::seed_from_u64(7);
///
/// let disguised = transformer.transform_with("Ada Lovelace", 0, &mut rng);
/// assert_eq!(disguised.chars().count(), "Ada Lovelace".chars().count());
/// assert_eq!(disguised.chars().nth(3), Some(' '));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Transformer<'t> {
    table: &'t GlyphTable,
}

impl Default for Transformer<'static> {
    fn default() -> Self {
        Self::standard()
    }
}

impl Transformer<'static> {
    /// Transformer over the built-in glyph table.
    pub fn standard() -> Self {
        Self {
            table: GlyphTable::standard(),
        }
    }
}

impl<'t> Transformer<'t> {
    /// Transformer over a custom table.
    pub fn new(table: &'t GlyphTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'t GlyphTable {
        self.table
    }

    /// Disguise `input` using the thread-local random source.
    pub fn transform(&self, input: &str, variant_index: usize) -> String {
        self.transform_with(input, variant_index, &mut rand::rng())
    }

    /// Disguise `input`, drawing glyph choices from `rng`.
    pub fn transform_with<R: Rng>(&self, input: &str, variant_index: usize, rng: &mut R) -> String {
        let mut output = String::with_capacity(input.len());
        for grapheme in input.graphemes(true) {
            match self.substitutes(grapheme, variant_index) {
                Some(set) => output.push(set[rng.random_range(0..set.len())]),
                None => output.push_str(grapheme),
            }
        }
        output
    }

    /// Variant set for a cluster that is exactly one mapped `char`.
    fn substitutes(&self, grapheme: &str, variant_index: usize) -> Option<&'t [char]> {
        let mut chars = grapheme.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self.table.variant_set(c, variant_index),
            _ => None,
        }
    }

    /// Every glyph `c` may become at `variant_index`.
    ///
    /// Unmapped characters can only become themselves.
    pub fn possible_outputs(&self, c: char, variant_index: usize) -> Vec<char> {
        match self.table.variant_set(c, variant_index) {
            Some(set) => set.to_vec(),
            None => vec![c],
        }
    }
}

/// Disguise `input` with the built-in table.
///
/// Shorthand for `Transformer::standard().transform(input, variant_index)`.
pub fn transform(input: &str, variant_index: usize) -> String {
    Transformer::standard().transform(input, variant_index)
}
