// Character classification and case utilities for personal names.
//
// Only the basic Latin alphabet (A-Z, a-z) counts as letters. Apostrophes
// are classified separately because they are deleted outright during
// normalization, whereas every other non-letter becomes a word separator.

// ---------------------------------------------------------------------------
// Character type classification
// ---------------------------------------------------------------------------

/// Character type classification used by name normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharType {
    /// A basic Latin letter.
    Letter,
    /// ASCII apostrophe (`'`), removed without leaving a word break.
    Apostrophe,
    /// Anything else: whitespace, digits, punctuation, non-Latin letters.
    Separator,
}

/// Returns the character type for a given character.
pub fn get_char_type(c: char) -> CharType {
    if c.is_ascii_alphabetic() {
        CharType::Letter
    } else if c == '\'' {
        CharType::Apostrophe
    } else {
        CharType::Separator
    }
}

/// Check whether a character is a basic Latin letter.
pub fn is_letter(c: char) -> bool {
    get_char_type(c) == CharType::Letter
}

// ---------------------------------------------------------------------------
// Simple case conversion
//
// The standard library's to_lowercase / to_uppercase produce iterators
// because some characters map to multiple characters. For the one-to-one
// mapping used here we only take the first character.
// ---------------------------------------------------------------------------

/// Convert a character to its simple lowercase equivalent.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

/// Convert a character to its simple uppercase equivalent.
pub fn simple_upper(c: char) -> char {
    let mut iter = c.to_uppercase();
    iter.next().unwrap_or(c)
}

/// Check whether a character is an uppercase letter.
pub fn is_upper(c: char) -> bool {
    c != simple_lower(c)
}
