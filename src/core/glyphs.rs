//! Look-alike glyph table.
//!
//! Maps a source character to an ordered list of variant sets. Each variant
//! set groups alternatives that are interchangeable with each other; the
//! transformer picks one set by variant index and one glyph from it at random.

use super::error::GlyphTableError;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Raw table entry: a source character and its variant sets.
pub type RawEntry = (char, &'static [&'static [char]]);

static STANDARD: Lazy<GlyphTable> = Lazy::new(|| GlyphTable::from_raw(STANDARD_ENTRIES));

/// Immutable mapping from a character to its variant sets.
///
/// Every key has at least one variant set and every variant set holds at
/// least one character. Tables built through [`GlyphTable::from_entries`]
/// are checked against this; the built-in table satisfies it by construction.
///
/// # Example
///
/// ```rust
/// use namecloak::core::GlyphTable;
///
/// let table = GlyphTable::standard();
/// assert!(table.contains('a'));
/// assert!(!table.contains(' '));
/// assert_eq!(table.variant_set('a', 0), Some(&['α', 'ą', 'ⱥ'][..]));
/// assert_eq!(table.variant_set('a', 2), table.variant_set('a', 0));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GlyphTable {
    entries: HashMap<char, Vec<Vec<char>>>,
}

impl GlyphTable {
    /// The built-in table, constructed once per process.
    pub fn standard() -> &'static GlyphTable {
        &STANDARD
    }

    /// Build a table from owned entries, validating that no key or variant
    /// set is empty. A repeated key replaces the earlier entry.
    ///
    /// # Example
    ///
    /// ```rust
    /// use namecloak::core::{GlyphTable, GlyphTableError};
    ///
    /// let table = GlyphTable::from_entries(vec![('o', vec![vec!['0'], vec!['ο', 'о']])]).unwrap();
    /// assert_eq!(table.variant_count('o'), Some(2));
    ///
    /// let err = GlyphTable::from_entries(vec![('x', vec![vec![]])]).unwrap_err();
    /// assert_eq!(err, GlyphTableError::EmptyVariantSet { key: 'x', index: 0 });
    /// ```
    pub fn from_entries<I>(entries: I) -> Result<Self, GlyphTableError>
    where
        I: IntoIterator<Item = (char, Vec<Vec<char>>)>,
    {
        let mut map = HashMap::new();
        for (key, sets) in entries {
            if sets.is_empty() {
                return Err(GlyphTableError::NoVariantSets { key });
            }
            if let Some(index) = sets.iter().position(|set| set.is_empty()) {
                return Err(GlyphTableError::EmptyVariantSet { key, index });
            }
            map.insert(key, sets);
        }
        Ok(Self { entries: map })
    }

    fn from_raw(raw: &[RawEntry]) -> Self {
        let entries = raw
            .iter()
            .map(|(key, sets)| (*key, sets.iter().map(|set| set.to_vec()).collect()))
            .collect();
        Self { entries }
    }

    /// Whether `c` has substitutes.
    pub fn contains(&self, c: char) -> bool {
        self.entries.contains_key(&c)
    }

    /// All variant sets for `c`, in table order.
    pub fn variant_sets(&self, c: char) -> Option<&[Vec<char>]> {
        self.entries.get(&c).map(Vec::as_slice)
    }

    /// Number of variant sets for `c`.
    pub fn variant_count(&self, c: char) -> Option<usize> {
        self.entries.get(&c).map(Vec::len)
    }

    /// The variant set selected by `variant_index` for `c`.
    ///
    /// Indices wrap around modulo the number of sets, so any index is valid.
    pub fn variant_set(&self, c: char, variant_index: usize) -> Option<&[char]> {
        self.entries
            .get(&c)
            .map(|sets| sets[variant_index % sets.len()].as_slice())
    }

    /// Number of mapped characters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Mapped characters, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = char> + '_ {
        self.entries.keys().copied()
    }
}

#[rustfmt::skip]
const STANDARD_ENTRIES: &[RawEntry] = &[
    // Uppercase
    ('A', &[&['Α', 'Ą', 'Ⱥ'], &['А', 'Ā', 'Ă']]),
    ('B', &[&['Β', 'Ḃ', 'Ḅ'], &['В', 'Ɓ', 'Ḇ']]),
    ('C', &[&['Ϲ', 'Ċ', 'Ḉ'], &['С', 'Ç', 'Ć']]),
    ('D', &[&['Ď', 'Ḋ', 'Ḍ'], &['Ð', 'Đ', 'Ɗ']]),
    ('E', &[&['Ε', 'Ę', 'Ḗ'], &['Е', 'Ē', 'Ė']]),
    ('F', &[&['Ϝ', 'Ƒ', 'Ḟ'], &['Ф', 'Ḟ', 'Ƒ']]),
    ('G', &[&['Ģ', 'Ǥ', 'Ḡ'], &['Ğ', 'Ġ', 'Ǧ']]),
    ('H', &[&['Η', 'Ħ', 'Ḣ'], &['Н', 'Ĥ', 'Ḥ']]),
    ('I', &[&['Ι', 'Į', 'Ḭ'], &['І', 'Ī', 'Ĭ']]),
    ('J', &[&['Ј', 'Ĵ', 'Ɉ'], &['Ј', 'Ɉ', 'Ĵ']]),
    ('K', &[&['Κ', 'Ķ', 'Ḳ'], &['К', 'Ǩ', 'Ḵ']]),
    ('L', &[&['Ļ', 'Ḷ', 'Ḻ'], &['Ł', 'Ĺ', 'Ḽ']]),
    ('M', &[&['Μ', 'Ṁ', 'Ṃ'], &['М', 'Ḿ', 'Ṁ']]),
    ('N', &[&['Ν', 'Ņ', 'Ṅ'], &['Н', 'Ń', 'Ň']]),
    ('O', &[&['Ο', 'Ǫ', 'Ȯ'], &['О', 'Ō', 'Ő']]),
    ('P', &[&['Ρ', 'Ṗ', 'Ṕ'], &['Р', 'Ƥ', 'Ṗ']]),
    ('Q', &[&['Ԛ', 'Ɋ', 'Ǫ'], &['Ԛ', 'Ɋ', 'Q']]),
    ('R', &[&['Ŕ', 'Ṙ', 'Ṛ'], &['Ř', 'Ŗ', 'Ṝ']]),
    ('S', &[&['Ѕ', 'Ṡ', 'Ṣ'], &['Ś', 'Ŝ', 'Ș']]),
    ('T', &[&['Τ', 'Ṫ', 'Ṭ'], &['Т', 'Ť', 'Ț']]),
    ('U', &[&['Υ', 'Ų', 'Ṳ'], &['У', 'Ū', 'Ů']]),
    ('V', &[&['Ѵ', 'Ṿ', 'Ѷ'], &['В', 'Ѵ', 'Ṽ']]),
    ('W', &[&['Ԝ', 'Ẃ', 'Ẅ'], &['Ŵ', 'Ẁ', 'Ẇ']]),
    ('X', &[&['Χ', 'Ẋ', 'Ẍ'], &['Х', 'Ẋ', 'Ẍ']]),
    ('Y', &[&['Υ', 'Ẏ', 'Ỵ'], &['У', 'Ŷ', 'Ỹ']]),
    ('Z', &[&['Ζ', 'Ż', 'Ẓ'], &['З', 'Ź', 'Ž']]),

    // Lowercase
    ('a', &[&['α', 'ą', 'ⱥ'], &['а', 'ā', 'ă']]),
    ('b', &[&['β', 'ḃ', 'ḅ'], &['в', 'ɓ', 'ḇ']]),
    ('c', &[&['ϲ', 'ċ', 'ḉ'], &['с', 'ç', 'ć']]),
    ('d', &[&['ď', 'ḋ', 'ḍ'], &['ð', 'đ', 'ɗ']]),
    ('e', &[&['ε', 'ę', 'ḗ'], &['е', 'ē', 'ė']]),
    ('f', &[&['ϝ', 'ƒ', 'ḟ'], &['ф', 'ḟ', 'ƒ']]),
    ('g', &[&['ģ', 'ǥ', 'ḡ'], &['ğ', 'ġ', 'ǧ']]),
    ('h', &[&['η', 'ħ', 'ḣ'], &['н', 'ĥ', 'ḥ']]),
    ('i', &[&['ι', 'į', 'ḭ'], &['і', 'ī', 'ĭ']]),
    ('j', &[&['ј', 'ĵ', 'ɉ'], &['ј', 'ɉ', 'ĵ']]),
    ('k', &[&['κ', 'ķ', 'ḳ'], &['к', 'ǩ', 'ḵ']]),
    ('l', &[&['ļ', 'ḷ', 'ḻ'], &['ł', 'ĺ', 'ḽ']]),
    ('m', &[&['μ', 'ṁ', 'ṃ'], &['м', 'ḿ', 'ṁ']]),
    ('n', &[&['ν', 'ņ', 'ṅ'], &['н', 'ń', 'ň']]),
    ('o', &[&['ο', 'ǫ', 'ȯ'], &['о', 'ō', 'ő']]),
    ('p', &[&['ρ', 'ṗ', 'ṕ'], &['р', 'ƥ', 'ṗ']]),
    ('q', &[&['ԛ', 'ɋ', 'ǫ'], &['ԛ', 'ɋ', 'q']]),
    ('r', &[&['ŕ', 'ṙ', 'ṛ'], &['ř', 'ŗ', 'ṝ']]),
    ('s', &[&['ѕ', 'ṡ', 'ṣ'], &['ś', 'ŝ', 'ș']]),
    ('t', &[&['τ', 'ṫ', 'ṭ'], &['т', 'ť', 'ț']]),
    ('u', &[&['υ', 'ų', 'ṳ'], &['у', 'ū', 'ů']]),
    ('v', &[&['ѵ', 'ṿ', 'ѷ'], &['в', 'ѵ', 'ṽ']]),
    ('w', &[&['ω', 'ẃ', 'ẅ'], &['ŵ', 'ẁ', 'ẇ']]),
    ('x', &[&['χ', 'ẋ', 'ẍ'], &['х', 'ẋ', 'ẍ']]),
    ('y', &[&['у', 'ẏ', 'ỵ'], &['у', 'ŷ', 'ỹ']]),
    ('z', &[&['ζ', 'ż', 'ẓ'], &['з', 'ź', 'ž']]),

    // Digits
    ('0', &[&['⓪', '⓿', '𝟎'], &['𝟢', '𝟬', '𝟶']]),
    ('1', &[&['①', '⓵', '𝟏'], &['𝟣', '𝟭', '𝟷']]),
    ('2', &[&['②', '⓶', '𝟐'], &['𝟤', '𝟮', '𝟸']]),
    ('3', &[&['③', '⓷', '𝟑'], &['𝟥', '𝟯', '𝟹']]),
    ('4', &[&['④', '⓸', '𝟒'], &['𝟦', '𝟰', '𝟺']]),
    ('5', &[&['⑤', '⓹', '𝟓'], &['𝟧', '𝟱', '𝟻']]),
    ('6', &[&['⑥', '⓺', '𝟔'], &['𝟨', '𝟲', '𝟼']]),
    ('7', &[&['⑦', '⓻', '𝟕'], &['𝟩', '𝟳', '𝟽']]),
    ('8', &[&['⑧', '⓼', '𝟖'], &['𝟪', '𝟴', '𝟾']]),
    ('9', &[&['⑨', '⓽', '𝟗'], &['𝟫', '𝟵', '𝟿']]),

    // Punctuation and symbols
    ('.', &[&['․', '。', '｡'], &['．', '·', '∙']]),
    (',', &[&['،', '、', '︐'], &['，', '፣', '⸲']]),
    ('!', &[&['ǃ', '❗', 'ꜝ'], &['！', '‼', '❣']]),
    ('?', &[&['❓', '？', '؟'], &['⁇', '❔', '꘏']]),
    ('@', &[&['＠', '⒜', 'ⓐ'], &['@', '﹫', '☯']]),
    ('#', &[&['＃', '♯', '⌗'], &['#', '⋕', '⨳']]),
    ('$', &[&['＄', '₮', '₯'], &['$', '₫', '₴']]),
    ('%', &[&['％', '⁒', '٪'], &['%', '⌘', '⌗']]),
    ('&', &[&['＆', '﹠', '＆'], &['&', '⅋', '℆']]),
    ('*', &[&['＊', '⋆', '✱'], &['*', '✲', '✳']]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_upholds_non_empty_invariant() {
        let table = GlyphTable::standard();
        for key in table.keys() {
            let sets = table.variant_sets(key).unwrap();
            assert!(!sets.is_empty(), "{key:?} has no variant sets");
            assert!(sets.iter().all(|set| !set.is_empty()), "{key:?} has an empty set");
        }
    }

    #[test]
    fn standard_table_covers_letters_digits_and_symbols() {
        let table = GlyphTable::standard();
        assert_eq!(table.len(), 72);
        for c in ('A'..='Z').chain('a'..='z').chain('0'..='9') {
            assert!(table.contains(c), "missing {c:?}");
        }
        for c in ['.', ',', '!', '?', '@', '#', '$', '%', '&', '*'] {
            assert!(table.contains(c), "missing {c:?}");
        }
    }

    #[test]
    fn unmapped_characters_are_absent() {
        let table = GlyphTable::standard();
        for c in [' ', '-', '\'', 'é', '中'] {
            assert!(!table.contains(c));
            assert!(table.variant_set(c, 0).is_none());
        }
    }

    #[test]
    fn variant_set_wraps_by_count() {
        let table = GlyphTable::standard();
        assert_eq!(table.variant_set('Z', 0), Some(&['Ζ', 'Ż', 'Ẓ'][..]));
        assert_eq!(table.variant_set('Z', 1), Some(&['З', 'Ź', 'Ž'][..]));
        assert_eq!(table.variant_set('Z', 7), table.variant_set('Z', 1));
        assert_eq!(table.variant_set('Z', usize::MAX), table.variant_set('Z', 1));
    }

    #[test]
    fn from_entries_rejects_key_without_sets() {
        let err = GlyphTable::from_entries(vec![('a', vec![])]).unwrap_err();
        assert_eq!(err, GlyphTableError::NoVariantSets { key: 'a' });
    }

    #[test]
    fn from_entries_reports_first_empty_set() {
        let err = GlyphTable::from_entries(vec![('a', vec![vec!['α'], vec![], vec![]])]).unwrap_err();
        assert_eq!(err, GlyphTableError::EmptyVariantSet { key: 'a', index: 1 });
    }

    #[test]
    fn from_entries_later_key_replaces_earlier() {
        let table = GlyphTable::from_entries(vec![
            ('a', vec![vec!['α']]),
            ('a', vec![vec!['а'], vec!['ā']]),
        ])
        .unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.variant_count('a'), Some(2));
        assert_eq!(table.variant_set('a', 0), Some(&['а'][..]));
    }
}
