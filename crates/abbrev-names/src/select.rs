// Best-candidate selection

use abbrev_core::{Abbreviation, CandidateSet};

/// Return every abbreviation in `set` that has the minimum score.
///
/// Ties are all kept. The result is sorted so that output is stable from run
/// to run; an empty set gives an empty result.
pub fn select_best(set: &CandidateSet) -> Vec<Abbreviation> {
    let Some(min) = set.min_score() else {
        return Vec::new();
    };
    let mut best: Vec<Abbreviation> = set
        .iter()
        .filter(|&(_, score)| score == min)
        .map(|(abbreviation, _)| abbreviation)
        .collect();
    best.sort_unstable();
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn abbr(s: &str) -> Abbreviation {
        s.parse().unwrap()
    }

    fn set(entries: &[(&str, u32)]) -> CandidateSet {
        entries.iter().map(|&(a, s)| (abbr(a), s)).collect()
    }

    #[test]
    fn single_minimum() {
        let best = select_best(&set(&[("ANA", 7), ("ANN", 5), ("AAN", 9)]));
        assert_eq!(best, vec![abbr("ANN")]);
    }

    #[test]
    fn two_way_tie_returns_both() {
        let best = select_best(&set(&[("ANA", 4), ("ANN", 4), ("AAN", 9)]));
        let got: HashSet<Abbreviation> = best.into_iter().collect();
        let want: HashSet<Abbreviation> = [abbr("ANA"), abbr("ANN")].into_iter().collect();
        assert_eq!(got, want);
    }

    #[test]
    fn ties_are_sorted() {
        let best = select_best(&set(&[("AZZ", 0), ("ABB", 0), ("AMM", 0)]));
        assert_eq!(best, vec![abbr("ABB"), abbr("AMM"), abbr("AZZ")]);
    }

    #[test]
    fn zero_score_is_a_valid_minimum() {
        let best = select_best(&set(&[("JRT", 0), ("JRO", 5)]));
        assert_eq!(best, vec![abbr("JRT")]);
    }

    #[test]
    fn empty_set_gives_empty_result() {
        assert!(select_best(&CandidateSet::new()).is_empty());
    }
}
