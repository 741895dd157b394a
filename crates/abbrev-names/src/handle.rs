// Abbreviator: top-level entry point for the abbreviation pipeline.
//
// Owns the letter value table and the pipeline options, and runs the
// phases in order:
//
//   normalize -> score -> generate candidates   (per name, independent)
//   remove cross-name collisions                (barrier over all names)
//   select best                                 (per name)
//
// Per-name work only reads the table, so with the `parallel` feature it can
// be spread over a rayon pool. Results always follow input order.

use abbrev_core::{AbbrevError, CandidateSet, LetterValueTable, NormalizedName, ScoreVector};
use tracing::{debug, trace, warn};

use crate::candidates::generate_candidates;
use crate::corpus::{Corpus, NameResult};
use crate::normalizer::normalize;
use crate::scorer::score_letters;

/// What to do with a name whose letters cannot all be scored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop and return the lookup failure for the first such name.
    #[default]
    Abort,
    /// Log a warning and give the name no candidates.
    SkipName,
}

/// Pipeline options.
#[derive(Debug, Clone, Default)]
pub struct AbbreviatorOptions {
    pub failure_policy: FailurePolicy,
    /// Run per-name stages and collision counting in parallel. Ignored
    /// unless the crate is built with the `parallel` feature.
    pub parallel: bool,
}

/// Intermediate results for a single name, before any cross-name step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Explanation {
    pub normalized: NormalizedName,
    pub scores: ScoreVector,
    pub candidates: CandidateSet,
}

/// Computes unique three-letter abbreviations for a corpus of names.
#[derive(Debug, Clone)]
pub struct Abbreviator {
    table: LetterValueTable,
    options: AbbreviatorOptions,
}

impl Abbreviator {
    /// Create an abbreviator with default options.
    pub fn new(table: LetterValueTable) -> Self {
        Self::with_options(table, AbbreviatorOptions::default())
    }

    pub fn with_options(table: LetterValueTable, options: AbbreviatorOptions) -> Self {
        Self { table, options }
    }

    pub fn table(&self) -> &LetterValueTable {
        &self.table
    }

    pub fn options(&self) -> &AbbreviatorOptions {
        &self.options
    }

    pub fn set_failure_policy(&mut self, policy: FailurePolicy) {
        self.options.failure_policy = policy;
    }

    pub fn set_parallel(&mut self, parallel: bool) {
        self.options.parallel = parallel;
    }

    // =======================================================================
    // Per-name stages
    // =======================================================================

    /// Normalize, score and generate the candidates of one raw name.
    pub fn explain(&self, raw: &str) -> Result<Explanation, AbbrevError> {
        let normalized = normalize(raw);
        let scores =
            score_letters(&normalized, &self.table).map_err(|source| AbbrevError::LookupFailure {
                name: raw.to_string(),
                source,
            })?;
        let candidates = generate_candidates(&normalized, &scores);
        trace!(
            name = raw,
            normalized = %normalized,
            candidates = candidates.len(),
            "generated candidates"
        );
        Ok(Explanation {
            normalized,
            scores,
            candidates,
        })
    }

    /// The minimum-reduced candidate set of one raw name.
    pub fn candidates_for(&self, raw: &str) -> Result<CandidateSet, AbbrevError> {
        self.explain(raw).map(|e| e.candidates)
    }

    fn candidates_or_skip(&self, raw: &str) -> Result<CandidateSet, AbbrevError> {
        match self.candidates_for(raw) {
            Err(err) if self.options.failure_policy == FailurePolicy::SkipName => {
                warn!("skipping name: {err}");
                Ok(CandidateSet::new())
            }
            other => other,
        }
    }

    // =======================================================================
    // Whole-corpus pipeline
    // =======================================================================

    /// Generate the candidate sets of every name, in input order.
    ///
    /// Under [`FailurePolicy::Abort`] the error of the earliest failing name
    /// is returned.
    pub fn build_corpus<S>(&self, names: &[S]) -> Result<Corpus, AbbrevError>
    where
        S: AsRef<str> + Sync,
    {
        let sets = self.generate_all(names);
        let mut corpus = Corpus::with_capacity(names.len());
        for (name, set) in names.iter().zip(sets) {
            corpus.push(name.as_ref(), set?);
        }
        debug!(
            names = corpus.len(),
            candidates = corpus.candidate_sets().iter().map(CandidateSet::len).sum::<usize>(),
            "candidate generation complete"
        );
        Ok(corpus)
    }

    #[cfg(feature = "parallel")]
    fn generate_all<S>(&self, names: &[S]) -> Vec<Result<CandidateSet, AbbrevError>>
    where
        S: AsRef<str> + Sync,
    {
        use rayon::prelude::*;

        if self.options.parallel {
            names
                .par_iter()
                .map(|name| self.candidates_or_skip(name.as_ref()))
                .collect()
        } else {
            self.generate_sequential(names)
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn generate_all<S>(&self, names: &[S]) -> Vec<Result<CandidateSet, AbbrevError>>
    where
        S: AsRef<str> + Sync,
    {
        self.generate_sequential(names)
    }

    fn generate_sequential<S: AsRef<str>>(
        &self,
        names: &[S],
    ) -> Vec<Result<CandidateSet, AbbrevError>> {
        names
            .iter()
            .map(|name| self.candidates_or_skip(name.as_ref()))
            .collect()
    }

    /// Remove cross-name collisions from a complete corpus.
    pub fn deduplicate(&self, corpus: &mut Corpus) {
        #[cfg(feature = "parallel")]
        let removed = if self.options.parallel {
            corpus.par_remove_collisions()
        } else {
            corpus.remove_collisions()
        };
        #[cfg(not(feature = "parallel"))]
        let removed = corpus.remove_collisions();

        debug!(removed = removed.len(), "removed shared abbreviations");
    }

    /// Run the whole pipeline and return the best abbreviations of every
    /// name, in input order.
    pub fn abbreviate_all<S>(&self, names: &[S]) -> Result<Vec<NameResult>, AbbrevError>
    where
        S: AsRef<str> + Sync,
    {
        let mut corpus = self.build_corpus(names)?;
        self.deduplicate(&mut corpus);
        let results = corpus.select_best();
        debug!(
            names = results.len(),
            unabbreviated = results.iter().filter(|r| r.abbreviations.is_empty()).count(),
            "selection complete"
        );
        Ok(results)
    }
}
