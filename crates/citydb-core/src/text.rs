// crates/citydb-core/src/text.rs

//! Text folding used for search comparisons.
//!
//! The comparison rule is "base sensitivity": two strings are equal when
//! they only differ in case or diacritics. Latin-script letters are
//! transliterated to ASCII with `deunicode`, combining marks are dropped,
//! and everything is lowercased. Other scripts keep their letters, so
//! `Москва` never equals `moskva`.
//! A few characters fold to more than one letter (`ß` -> `ss`, `æ` -> `ae`).

/// Convert a string into a folded key suitable for comparison.
///
/// This performs:
/// 1\) Transliterate Latin letters to ASCII (e.g. `Łódź` -> `Lodz`)
/// 2\) Drop combining marks
/// 3\) Normalize to lowercase
///
/// # Examples
///
/// ```rust
/// use citydb_core::text::fold_key;
///
/// assert_eq!(fold_key("Łódź"), "lodz");
/// assert_eq!(fold_key("Straße"), "strasse");
/// assert_eq!(fold_key("Москва"), "москва");
/// ```
pub fn fold_key(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_ascii() {
            out.push(c);
        } else if is_combining_mark(c) {
            continue;
        } else if is_latin_letter(c) {
            match deunicode::deunicode_char(c) {
                Some(ascii) => out.push_str(ascii),
                None => out.push(c),
            }
        } else {
            out.push(c);
        }
    }
    out.to_lowercase()
}

/// Latin-1 Supplement and Latin Extended blocks, minus `×` and `÷`.
fn is_latin_letter(c: char) -> bool {
    matches!(c,
        '\u{00C0}'..='\u{00D6}'
        | '\u{00D8}'..='\u{00F6}'
        | '\u{00F8}'..='\u{024F}'
        | '\u{1E00}'..='\u{1EFF}'
        | '\u{2C60}'..='\u{2C7F}'
        | '\u{A720}'..='\u{A7FF}'
        | '\u{AB30}'..='\u{AB6F}')
}

fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}'
        | '\u{1AB0}'..='\u{1AFF}'
        | '\u{1DC0}'..='\u{1DFF}'
        | '\u{20D0}'..='\u{20FF}'
        | '\u{FE20}'..='\u{FE2F}')
}

/// Compares two strings for equality after folding with [`fold_key`].
///
/// ```rust
/// use citydb_core::text::equals_folded;
///
/// assert!(equals_folded("Zürich", "zurich"));
/// assert!(equals_folded("MÜNCHEN", "München"));
/// assert!(!equals_folded("Berlin", "Paris"));
/// ```
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

/// A search term folded once and compared against many candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldedTerm {
    raw: String,
    folded: String,
}

impl FoldedTerm {
    pub fn new(raw: &str) -> Self {
        Self {
            raw: raw.to_owned(),
            folded: fold_key(raw),
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn folded(&self) -> &str {
        &self.folded
    }

    /// Base-sensitivity equality against an unfolded candidate.
    #[inline]
    pub fn matches(&self, candidate: &str) -> bool {
        fold_key(candidate) == self.folded
    }
}
