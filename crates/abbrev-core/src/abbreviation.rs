// Abbreviation candidates and the per-name candidate set

use std::fmt;
use std::str::FromStr;

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;

use crate::character::{is_letter, simple_upper};

/// Score of a letter or of a candidate. Lower is better.
pub type Score = u32;

/// Number of letters in an abbreviation.
pub const ABBREVIATION_LEN: usize = 3;

// ---------------------------------------------------------------------------
// Abbreviation
// ---------------------------------------------------------------------------

/// A three-letter uppercase abbreviation.
///
/// Ordering is lexicographic on the letters, which is what result lists are
/// sorted by.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Abbreviation([char; ABBREVIATION_LEN]);

impl Abbreviation {
    /// Build an abbreviation from three letters, uppercasing each.
    pub fn new(first: char, second: char, third: char) -> Self {
        Self([simple_upper(first), simple_upper(second), simple_upper(third)])
    }

    pub fn chars(&self) -> [char; ABBREVIATION_LEN] {
        self.0
    }

    /// The leading letter, which always comes from the start of the name.
    pub fn first(&self) -> char {
        self.0[0]
    }
}

impl fmt::Display for Abbreviation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{a}{b}{c}")
    }
}

impl fmt::Debug for Abbreviation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Abbreviation({self})")
    }
}

/// Error returned when a string is not exactly three Latin letters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid abbreviation {0:?}: expected exactly three letters A-Z")]
pub struct InvalidAbbreviation(pub String);

impl FromStr for Abbreviation {
    type Err = InvalidAbbreviation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next(), chars.next()) {
            (Some(a), Some(b), Some(c), None) if [a, b, c].iter().all(|&ch| is_letter(ch)) => {
                Ok(Self::new(a, b, c))
            }
            _ => Err(InvalidAbbreviation(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// CandidateSet
// ---------------------------------------------------------------------------

/// Candidate abbreviations of one name, each with its minimum score.
///
/// Keys are unique by construction. Entries are only ever added through
/// [`CandidateSet::insert_min`] and later removed by cross-name
/// deduplication.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    entries: HashMap<Abbreviation, Score>,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert a candidate, keeping the smaller score if the abbreviation is
    /// already present. Returns `true` if the stored score changed.
    pub fn insert_min(&mut self, abbreviation: Abbreviation, score: Score) -> bool {
        match self.entries.entry(abbreviation) {
            Entry::Occupied(entry) if *entry.get() <= score => false,
            Entry::Occupied(mut entry) => {
                entry.insert(score);
                true
            }
            Entry::Vacant(entry) => {
                entry.insert(score);
                true
            }
        }
    }

    pub fn get(&self, abbreviation: &Abbreviation) -> Option<Score> {
        self.entries.get(abbreviation).copied()
    }

    pub fn contains(&self, abbreviation: &Abbreviation) -> bool {
        self.entries.contains_key(abbreviation)
    }

    pub fn remove(&mut self, abbreviation: &Abbreviation) -> Option<Score> {
        self.entries.remove(abbreviation)
    }

    /// Keep only the candidates for which `keep` returns `true`.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&Abbreviation, Score) -> bool,
    {
        self.entries.retain(|abbreviation, score| keep(abbreviation, *score));
    }

    /// Iterate over `(abbreviation, score)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (Abbreviation, Score)> + '_ {
        self.entries.iter().map(|(&a, &s)| (a, s))
    }

    pub fn abbreviations(&self) -> impl Iterator<Item = &Abbreviation> {
        self.entries.keys()
    }

    /// Lowest score in the set, or `None` when empty.
    pub fn min_score(&self) -> Option<Score> {
        self.entries.values().copied().min()
    }
}

impl FromIterator<(Abbreviation, Score)> for CandidateSet {
    fn from_iter<T: IntoIterator<Item = (Abbreviation, Score)>>(iter: T) -> Self {
        let mut set = Self::new();
        for (abbreviation, score) in iter {
            set.insert_min(abbreviation, score);
        }
        set
    }
}
