//! End-to-end tests for the abbreviation pipeline.
//!
//! Run: cargo test -p abbrev-names --test pipeline
//! With rayon: cargo test -p abbrev-names --features parallel --test pipeline

use std::collections::{HashMap, HashSet};

use abbrev_core::{Abbreviation, LetterValueTable};
use abbrev_names::normalizer::normalize;
use abbrev_names::{Abbreviator, NameResult};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Consonants = 1, vowels = 0.
fn vowel_table() -> LetterValueTable {
    LetterValueTable::from_pairs(('A'..='Z').map(|c| (c, if "AEIOU".contains(c) { 0 } else { 1 })))
}

/// A table with a distinct value per letter, closer to real data.
fn spread_table() -> LetterValueTable {
    LetterValueTable::from_pairs(('A'..='Z').enumerate().map(|(i, c)| (c, (i as u32 * 7) % 25)))
}

fn best_set(result: &NameResult) -> HashSet<String> {
    result.abbreviations.iter().map(|a| a.to_string()).collect()
}

fn set_of(items: &[&str]) -> HashSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

const MESSY_NAMES: &[&str] = &[
    "Anna",
    "Anne",
    "Annie",
    "Mary-Jane O'Neil",
    "mary jane oneil",
    "  Bob ",
    "Bobby",
    "Jo",
    "",
    "1234",
    "Jean-Luc Picard",
    "J. R. R. Tolkien",
    "Ezekiel",
    "ELLE",
    "Rose-Mae",
    "D'Artagnan",
];

// ---------------------------------------------------------------------------
// Worked example
// ---------------------------------------------------------------------------

#[test]
fn anna_and_anne() {
    let abbreviator = Abbreviator::new(vowel_table());

    let anna = abbreviator.candidates_for("Anna").unwrap();
    let anne = abbreviator.candidates_for("Anne").unwrap();
    let ann: Abbreviation = "ANN".parse().unwrap();
    // ANN is the cheapest candidate of both names before deduplication
    assert_eq!(anna.get(&ann), Some(5));
    assert_eq!(anne.get(&ann), Some(5));

    let results = abbreviator.abbreviate_all(&["Anna", "Anne"]).unwrap();
    assert_eq!(results[0].name, "Anna");
    assert_eq!(results[1].name, "Anne");
    assert_eq!(best_set(&results[0]), set_of(&["ANA"]));
    assert_eq!(best_set(&results[1]), set_of(&["ANE"]));
}

#[test]
fn tie_after_collision_returns_both() {
    // Anan: ANA=4, ANN=7, AAN=7. Ana: ANA=7. ANA collides and is dropped.
    let results = Abbreviator::new(vowel_table())
        .abbreviate_all(&["Anan", "Ana"])
        .unwrap();
    assert_eq!(best_set(&results[0]), set_of(&["AAN", "ANN"]));
    assert!(results[1].abbreviations.is_empty());
}

#[test]
fn same_name_twice_leaves_both_empty() {
    let results = Abbreviator::new(vowel_table())
        .abbreviate_all(&["Bobby", "bobby"])
        .unwrap();
    assert!(results.iter().all(|r| r.abbreviations.is_empty()));
}

// ---------------------------------------------------------------------------
// Properties over a messy corpus
// ---------------------------------------------------------------------------

#[test]
fn results_follow_input_order() {
    let results = Abbreviator::new(spread_table())
        .abbreviate_all(MESSY_NAMES)
        .unwrap();
    let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, MESSY_NAMES);
}

#[test]
fn abbreviations_start_with_first_letter() {
    let results = Abbreviator::new(spread_table())
        .abbreviate_all(MESSY_NAMES)
        .unwrap();
    for result in &results {
        let first = normalize(&result.name).first();
        for a in &result.abbreviations {
            assert_eq!(a.to_string().len(), 3);
            assert_eq!(Some(a.first()), first.map(|c| c.to_ascii_uppercase()));
        }
    }
}

#[test]
fn no_abbreviation_owned_by_two_names() {
    let abbreviator = Abbreviator::new(spread_table());
    let mut corpus = abbreviator.build_corpus(MESSY_NAMES).unwrap();
    abbreviator.deduplicate(&mut corpus);

    let mut owners: HashMap<Abbreviation, usize> = HashMap::new();
    for (_, set) in corpus.iter() {
        for &a in set.abbreviations() {
            *owners.entry(a).or_insert(0) += 1;
        }
    }
    assert!(owners.values().all(|&n| n == 1));
}

#[test]
fn surviving_scores_are_untouched_by_deduplication() {
    let abbreviator = Abbreviator::new(spread_table());
    let before = abbreviator.build_corpus(MESSY_NAMES).unwrap();
    let mut after = before.clone();
    abbreviator.deduplicate(&mut after);

    for ((_, b), (_, a)) in before.iter().zip(after.iter()) {
        for (abbreviation, score) in a.iter() {
            assert_eq!(b.get(&abbreviation), Some(score));
        }
    }
}

#[test]
fn unscorable_corpus_needs_no_table() {
    // AlBo scores [0, 5, 0, 5]: ALB = 5, ALO = 10, ABO = 5
    let results = Abbreviator::new(LetterValueTable::new())
        .abbreviate_all(&["Al Bo", "Ed"])
        .unwrap();
    assert_eq!(best_set(&results[0]), set_of(&["ABO", "ALB"]));
    assert!(results[1].abbreviations.is_empty());
}

// ---------------------------------------------------------------------------
// Parallel execution
// ---------------------------------------------------------------------------

#[cfg(feature = "parallel")]
#[test]
fn parallel_matches_sequential() {
    let names: Vec<String> = (0..500)
        .map(|i| {
            let base = MESSY_NAMES[i % MESSY_NAMES.len()];
            format!("{base} {}", ["Smith", "Jones", "Lee", "Taylor", "Brown"][i % 5])
        })
        .collect();

    let mut abbreviator = Abbreviator::new(spread_table());
    let sequential = abbreviator.abbreviate_all(&names).unwrap();
    abbreviator.set_parallel(true);
    let parallel = abbreviator.abbreviate_all(&names).unwrap();

    assert_eq!(sequential, parallel);
}
