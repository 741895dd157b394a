// Candidate generation for a single name
//
// Every candidate is the first letter of the name followed by two later
// letters in order. The second letter is never the last letter of the name;
// the third may be. When two index pairs spell the same abbreviation only
// the lower score is kept.

use abbrev_core::{Abbreviation, CandidateSet, NormalizedName, ScoreVector};

/// Enumerate all candidates of `name` with their minimum scores.
///
/// A candidate built from indices `(i, j)` scores `scores[i] + scores[j]`,
/// saturating at `Score::MAX`; the first letter does not contribute. Names
/// shorter than three letters produce an empty set.
pub fn generate_candidates(name: &NormalizedName, scores: &ScoreVector) -> CandidateSet {
    debug_assert_eq!(name.len(), scores.len());

    let mut set = CandidateSet::new();
    let chars = name.as_chars();
    let Some(&first) = chars.first() else {
        return set;
    };
    let len = chars.len();

    for i in 1..len.saturating_sub(1) {
        for j in (i + 1)..len {
            let abbreviation = Abbreviation::new(first, chars[i], chars[j]);
            set.insert_min(abbreviation, scores[i].saturating_add(scores[j]));
        }
    }

    set
}
