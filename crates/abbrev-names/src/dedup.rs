// Cross-name deduplication
//
// An abbreviation claimed by two or more names is removed from every one of
// them, regardless of score. Collisions inside a single name are handled
// by `CandidateSet::insert_min` instead, which keeps the minimum.
//
// Counting must see every candidate set before anything is removed.

use abbrev_core::{Abbreviation, CandidateSet};
use hashbrown::{HashMap, HashSet};

/// Number of names whose candidate set contains each abbreviation.
pub type OccurrenceCounts = HashMap<Abbreviation, usize>;

/// Count, per abbreviation, how many candidate sets contain it.
///
/// Keys are unique within a set, so each name contributes at most one.
pub fn count_occurrences(sets: &[CandidateSet]) -> OccurrenceCounts {
    let mut counts = OccurrenceCounts::new();
    for set in sets {
        add_counts(&mut counts, set);
    }
    counts
}

fn add_counts(counts: &mut OccurrenceCounts, set: &CandidateSet) {
    for &abbreviation in set.abbreviations() {
        *counts.entry(abbreviation).or_insert(0) += 1;
    }
}

/// Abbreviations that occur in two or more names.
pub fn find_collisions(counts: &OccurrenceCounts) -> HashSet<Abbreviation> {
    counts
        .iter()
        .filter(|&(_, &count)| count >= 2)
        .map(|(&abbreviation, _)| abbreviation)
        .collect()
}

/// Remove every cross-name collision from every candidate set.
///
/// Returns the set of abbreviations that were removed.
pub fn remove_collisions(sets: &mut [CandidateSet]) -> HashSet<Abbreviation> {
    let collisions = find_collisions(&count_occurrences(sets));
    if !collisions.is_empty() {
        for set in sets.iter_mut() {
            set.retain(|abbreviation, _| !collisions.contains(abbreviation));
        }
    }
    collisions
}

// ---------------------------------------------------------------------------
// Parallel variants
//
// Counting is a partitioned fold followed by a merge of the partial maps.
// Removal runs per set once the merged count is complete.
// ---------------------------------------------------------------------------

#[cfg(feature = "parallel")]
mod parallel {
    use rayon::prelude::*;

    use super::*;

    /// Parallel equivalent of [`count_occurrences`].
    pub fn par_count_occurrences(sets: &[CandidateSet]) -> OccurrenceCounts {
        sets.par_iter()
            .fold(OccurrenceCounts::new, |mut counts, set| {
                add_counts(&mut counts, set);
                counts
            })
            .reduce(OccurrenceCounts::new, merge_counts)
    }

    fn merge_counts(mut left: OccurrenceCounts, right: OccurrenceCounts) -> OccurrenceCounts {
        if left.len() < right.len() {
            return merge_counts(right, left);
        }
        for (abbreviation, count) in right {
            *left.entry(abbreviation).or_insert(0) += count;
        }
        left
    }

    /// Parallel equivalent of [`remove_collisions`].
    pub fn par_remove_collisions(sets: &mut [CandidateSet]) -> HashSet<Abbreviation> {
        let collisions = find_collisions(&par_count_occurrences(sets));
        if !collisions.is_empty() {
            sets.par_iter_mut().for_each(|set| {
                set.retain(|abbreviation, _| !collisions.contains(abbreviation));
            });
        }
        collisions
    }
}

#[cfg(feature = "parallel")]
pub use parallel::{par_count_occurrences, par_remove_collisions};

#[cfg(test)]
mod tests {
    use super::*;

    fn abbr(s: &str) -> Abbreviation {
        s.parse().unwrap()
    }

    fn set(entries: &[(&str, u32)]) -> CandidateSet {
        entries.iter().map(|&(a, s)| (abbr(a), s)).collect()
    }

    // -- Counting --

    #[test]
    fn counts_each_name_once() {
        let sets = vec![
            set(&[("ANA", 1), ("ANN", 2)]),
            set(&[("ANA", 9), ("ANE", 3)]),
            set(&[("ANA", 4)]),
        ];
        let counts = count_occurrences(&sets);
        assert_eq!(counts[&abbr("ANA")], 3);
        assert_eq!(counts[&abbr("ANN")], 1);
        assert_eq!(counts[&abbr("ANE")], 1);
        assert_eq!(counts.len(), 3);
    }

    #[test]
    fn collisions_need_two_names() {
        let sets = vec![set(&[("ANA", 1), ("ANN", 2)]), set(&[("ANA", 9)])];
        let collisions = find_collisions(&count_occurrences(&sets));
        assert_eq!(collisions.len(), 1);
        assert!(collisions.contains(&abbr("ANA")));
    }

    // -- Removal --

    #[test]
    fn collision_removed_from_all_names() {
        // ANA is cheapest for the first name, but neither name keeps it
        let mut sets = vec![
            set(&[("ANA", 1), ("ANN", 2)]),
            set(&[("ANA", 9), ("ANE", 3)]),
        ];
        let removed = remove_collisions(&mut sets);
        assert!(removed.contains(&abbr("ANA")));
        assert!(!sets[0].contains(&abbr("ANA")));
        assert!(!sets[1].contains(&abbr("ANA")));
        assert_eq!(sets[0].get(&abbr("ANN")), Some(2));
        assert_eq!(sets[1].get(&abbr("ANE")), Some(3));
    }

    #[test]
    fn no_abbreviation_left_in_two_names() {
        let mut sets = vec![
            set(&[("BOB", 1), ("BOO", 2), ("BBB", 3)]),
            set(&[("BOB", 1), ("BAB", 2)]),
            set(&[("BOO", 5), ("BAB", 2), ("BEE", 7)]),
        ];
        remove_collisions(&mut sets);
        let counts = count_occurrences(&sets);
        assert!(counts.values().all(|&c| c == 1));
        assert_eq!(sets[0].len(), 1);
        assert!(sets[1].is_empty());
        assert_eq!(sets[2].len(), 1);
    }

    #[test]
    fn unique_sets_untouched() {
        let mut sets = vec![set(&[("ANA", 1)]), set(&[("BOB", 1)])];
        let before = sets.clone();
        assert!(remove_collisions(&mut sets).is_empty());
        assert_eq!(sets, before);
    }

    #[test]
    fn empty_corpus() {
        let mut sets: Vec<CandidateSet> = Vec::new();
        assert!(remove_collisions(&mut sets).is_empty());
        assert!(count_occurrences(&sets).is_empty());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_matches_sequential() {
        let sets: Vec<CandidateSet> = (0..64u32)
            .map(|n| {
                let a = char::from(b'A' + (n % 26) as u8);
                let b = char::from(b'A' + (n % 5) as u8);
                let (x, y, z) = (format!("X{a}{b}"), format!("Y{b}{b}"), format!("Z{a}A"));
                set(&[(x.as_str(), n), (y.as_str(), n + 1), (z.as_str(), 2)])
            })
            .collect();

        assert_eq!(par_count_occurrences(&sets), count_occurrences(&sets));

        let mut seq = sets.clone();
        let mut par = sets;
        assert_eq!(remove_collisions(&mut seq), par_remove_collisions(&mut par));
        assert_eq!(seq, par);
    }
}
