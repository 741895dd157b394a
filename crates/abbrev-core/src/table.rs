// Letter value table: per-letter base cost for interior letters
//
// The table is loaded once per run and shared read-only by every per-name
// computation. Keys are stored uppercased.

use std::str::FromStr;

use hashbrown::HashMap;

use crate::character::{is_letter, simple_upper};

/// Error type for letter value table parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("line {line}: expected `LETTER VALUE`, got {content:?}")]
    MalformedLine { line: usize, content: String },
    #[error("line {line}: key {key:?} is not a single letter A-Z")]
    InvalidLetter { line: usize, key: String },
    #[error("line {line}: value {value:?} is not a non-negative integer")]
    InvalidValue { line: usize, value: String },
}

/// Mapping from uppercase letter to its non-negative integer value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterValueTable {
    values: HashMap<char, u32>,
}

impl LetterValueTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(letter, value)` pairs. Letters are uppercased;
    /// a repeated letter keeps the last value.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (char, u32)>,
    {
        let mut table = Self::new();
        for (letter, value) in pairs {
            table.insert(letter, value);
        }
        table
    }

    /// Set the value of a letter, replacing any previous value.
    pub fn insert(&mut self, letter: char, value: u32) {
        self.values.insert(simple_upper(letter), value);
    }

    /// Look up the value of a letter (case-insensitive).
    pub fn value(&self, letter: char) -> Option<u32> {
        self.values.get(&simple_upper(letter)).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Letters `A`..=`Z` that have no value in this table, in alphabetical order.
    pub fn missing_letters(&self) -> Vec<char> {
        ('A'..='Z')
            .filter(|c| !self.values.contains_key(c))
            .collect()
    }

    /// Parse the line-oriented text format: one `LETTER VALUE` pair per line,
    /// whitespace separated. Blank lines are skipped and fields after the
    /// value are ignored. Line numbers in errors are 1-based.
    pub fn parse(text: &str) -> Result<Self, TableError> {
        let mut table = Self::new();
        for (idx, raw_line) in text.lines().enumerate() {
            let line = idx + 1;
            let mut fields = raw_line.split_whitespace();
            let Some(key) = fields.next() else {
                continue;
            };
            let Some(value) = fields.next() else {
                return Err(TableError::MalformedLine {
                    line,
                    content: raw_line.to_string(),
                });
            };

            let mut key_chars = key.chars();
            let letter = match (key_chars.next(), key_chars.next()) {
                (Some(c), None) if is_letter(c) => c,
                _ => {
                    return Err(TableError::InvalidLetter {
                        line,
                        key: key.to_string(),
                    });
                }
            };
            let value: u32 = value.parse().map_err(|_| TableError::InvalidValue {
                line,
                value: value.to_string(),
            })?;

            table.insert(letter, value);
        }
        Ok(table)
    }
}

impl FromStr for LetterValueTable {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
