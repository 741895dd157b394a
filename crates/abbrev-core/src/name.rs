// NormalizedName and ScoreVector
//
// A normalized name is letters only, made of concatenated Title-Case words.
// Word boundaries are not stored: a word ends right before an uppercase
// letter or at the end of the string.

use std::fmt;
use std::ops::Index;

use crate::abbreviation::Score;
use crate::character::{is_letter, is_upper};

// ---------------------------------------------------------------------------
// NormalizedName
// ---------------------------------------------------------------------------

/// Canonical letters-only CamelCase form of a raw name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NormalizedName {
    chars: Vec<char>,
}

impl NormalizedName {
    /// Wrap characters that are already in canonical form.
    ///
    /// The caller guarantees that every character is a basic Latin letter.
    pub fn from_chars(chars: Vec<char>) -> Self {
        debug_assert!(chars.iter().all(|&c| is_letter(c)));
        Self { chars }
    }

    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// First letter of the name, if any.
    pub fn first(&self) -> Option<char> {
        self.chars.first().copied()
    }

    /// True if position `i` is the final letter of its word: it is the last
    /// index of the name, or the next letter is uppercase.
    pub fn is_last_letter_of_word(&self, i: usize) -> bool {
        match self.chars.get(i + 1) {
            Some(&next) => is_upper(next),
            None => i + 1 == self.chars.len(),
        }
    }

    /// Iterate over the words of the name.
    pub fn words(&self) -> impl Iterator<Item = &[char]> {
        self.chars.chunk_by(|_, &next| !is_upper(next))
    }
}

impl fmt::Display for NormalizedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &c in &self.chars {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// ScoreVector
// ---------------------------------------------------------------------------

/// Per-letter scores, positionally aligned with a [`NormalizedName`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreVector {
    scores: Vec<Score>,
}

impl ScoreVector {
    pub fn as_slice(&self) -> &[Score] {
        &self.scores
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl From<Vec<Score>> for ScoreVector {
    fn from(scores: Vec<Score>) -> Self {
        Self { scores }
    }
}

impl Index<usize> for ScoreVector {
    type Output = Score;

    fn index(&self, index: usize) -> &Score {
        &self.scores[index]
    }
}
