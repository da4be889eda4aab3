//! String normalization

use unicode_normalization::UnicodeNormalization;

/// Combining Diacritical Marks block
const DIACRITICS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036f}';

/// Lowercase `s` and strip its diacritical marks
///
/// ```
/// assert_eq!(ayudante::string::normalize("Nestlé"), "nestle");
/// ```
pub fn normalize(s: &str) -> String {
    s.to_lowercase().nfd().filter(|c| !DIACRITICS.contains(c)).collect()
}
