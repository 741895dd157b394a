// Corpus: ordered names with their candidate sets
//
// Input order is preserved through deduplication and selection, so results
// line up with the names they were read from.

use abbrev_core::{Abbreviation, CandidateSet};
use hashbrown::HashSet;

use crate::dedup;
use crate::select::select_best;

/// The winning abbreviations of one name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameResult {
    /// The raw name exactly as supplied.
    pub name: String,
    /// Minimum-score abbreviations, sorted. Empty when nothing survived.
    pub abbreviations: Vec<Abbreviation>,
}

/// Raw names paired with their candidate sets, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    names: Vec<String>,
    candidates: Vec<CandidateSet>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            names: Vec::with_capacity(capacity),
            candidates: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, name: impl Into<String>, candidates: CandidateSet) {
        self.names.push(name.into());
        self.candidates.push(candidates);
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over `(raw name, candidate set)` pairs in input order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CandidateSet)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.candidates.iter())
    }

    pub fn candidate_sets(&self) -> &[CandidateSet] {
        &self.candidates
    }

    /// Drop every abbreviation shared by two or more names.
    ///
    /// Returns the abbreviations that were removed.
    pub fn remove_collisions(&mut self) -> HashSet<Abbreviation> {
        dedup::remove_collisions(&mut self.candidates)
    }

    /// Parallel equivalent of [`Corpus::remove_collisions`].
    #[cfg(feature = "parallel")]
    pub fn par_remove_collisions(&mut self) -> HashSet<Abbreviation> {
        dedup::par_remove_collisions(&mut self.candidates)
    }

    /// Pick the best abbreviations for every name, in input order.
    pub fn select_best(&self) -> Vec<NameResult> {
        self.iter()
            .map(|(name, candidates)| NameResult {
                name: name.to_string(),
                abbreviations: select_best(candidates),
            })
            .collect()
    }
}

impl<S: Into<String>> FromIterator<(S, CandidateSet)> for Corpus {
    fn from_iter<T: IntoIterator<Item = (S, CandidateSet)>>(iter: T) -> Self {
        let mut corpus = Self::new();
        for (name, candidates) in iter {
            corpus.push(name, candidates);
        }
        corpus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abbr(s: &str) -> Abbreviation {
        s.parse().unwrap()
    }

    fn set(entries: &[(&str, u32)]) -> CandidateSet {
        entries.iter().map(|&(a, s)| (abbr(a), s)).collect()
    }

    #[test]
    fn preserves_input_order() {
        let corpus: Corpus = [
            ("Zed", set(&[("ZED", 1)])),
            ("Amy", set(&[("AMY", 1)])),
            ("Bo", CandidateSet::new()),
        ]
        .into_iter()
        .collect();
        let names: Vec<&str> = corpus.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Zed", "Amy", "Bo"]);
        assert_eq!(corpus.len(), 3);
    }

    #[test]
    fn duplicate_raw_names_lose_everything() {
        let mut corpus: Corpus = [
            ("Anna", set(&[("ANA", 7), ("ANN", 5)])),
            ("Anna", set(&[("ANA", 7), ("ANN", 5)])),
        ]
        .into_iter()
        .collect();
        corpus.remove_collisions();
        let results = corpus.select_best();
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.abbreviations.is_empty()));
    }

    #[test]
    fn select_after_removal() {
        let mut corpus: Corpus = [
            ("Anna", set(&[("ANA", 7), ("ANN", 5)])),
            ("Anne", set(&[("ANE", 23), ("ANN", 5)])),
        ]
        .into_iter()
        .collect();
        let removed = corpus.remove_collisions();
        assert_eq!(removed.len(), 1);

        let results = corpus.select_best();
        assert_eq!(
            results,
            vec![
                NameResult {
                    name: "Anna".to_string(),
                    abbreviations: vec![abbr("ANA")],
                },
                NameResult {
                    name: "Anne".to_string(),
                    abbreviations: vec![abbr("ANE")],
                },
            ]
        );
    }
}
