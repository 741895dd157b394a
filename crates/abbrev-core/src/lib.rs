//! Shared types for three-letter name abbreviation.
//!
//! # Architecture
//!
//! - [`character`] -- Latin letter classification and simple case mapping
//! - [`case`] -- Title-casing of name words
//! - [`table`] -- Letter value table and its text format
//! - [`name`] -- Normalized names and their per-letter score vectors
//! - [`abbreviation`] -- Abbreviations and the per-name candidate set

pub mod abbreviation;
pub mod case;
pub mod character;
pub mod name;
pub mod table;

pub use abbreviation::{Abbreviation, CandidateSet, Score};
pub use name::{NormalizedName, ScoreVector};
pub use table::{LetterValueTable, TableError};

/// A letter of a normalized name has no entry in the letter value table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no letter value for '{letter}' at index {index}")]
pub struct MissingLetterValue {
    pub letter: char,
    pub index: usize,
}

/// Error type for abbreviation generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AbbrevError {
    /// Scoring a name needed a letter the table does not define.
    #[error("cannot score name {name:?}: {source}")]
    LookupFailure {
        name: String,
        #[source]
        source: MissingLetterValue,
    },
}
