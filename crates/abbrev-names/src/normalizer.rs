// Name normalization: raw name -> letters-only CamelCase
//
// Apostrophes are dropped in place, so "O'Brien" stays a single word. Every
// other run of non-letters separates words. Each word is title-cased and the
// words are concatenated without separators.

use abbrev_core::NormalizedName;
use abbrev_core::case::title_case;
use abbrev_core::character::{CharType, get_char_type};

/// Normalize a raw name into its canonical letters-only CamelCase form.
///
/// A name without any letters normalizes to the empty name.
pub fn normalize(raw: &str) -> NormalizedName {
    let mut chars: Vec<char> = Vec::with_capacity(raw.len());
    let mut word_start = 0;

    for c in raw.chars() {
        match get_char_type(c) {
            CharType::Letter => chars.push(c),
            CharType::Apostrophe => {}
            CharType::Separator => {
                title_case(&mut chars[word_start..]);
                word_start = chars.len();
            }
        }
    }
    title_case(&mut chars[word_start..]);

    NormalizedName::from_chars(chars)
}
