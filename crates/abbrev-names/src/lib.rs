//! Unique three-letter abbreviations for personal names.
//!
//! Every name is normalized, each of its letters is scored by position, and
//! all candidate abbreviations are generated with their lowest score.
//! Abbreviations claimed by more than one name are then removed from all of
//! them, and each name keeps its lowest-scoring survivors.
//!
//! # Architecture
//!
//! - [`normalizer`] -- Raw name to letters-only CamelCase
//! - [`scorer`] -- Per-letter positional scores
//! - [`candidates`] -- Candidate enumeration with keep-minimum reduction
//! - [`dedup`] -- Cross-name collision removal
//! - [`select`] -- Minimum-score selection
//! - [`corpus`] -- Ordered names and their candidate sets
//! - [`handle`] -- [`Abbreviator`], which runs the whole pipeline
//!
//! # Features
//!
//! - `parallel` -- rayon-backed per-name stages and collision counting

pub mod candidates;
pub mod corpus;
pub mod dedup;
pub mod handle;
pub mod normalizer;
pub mod scorer;
pub mod select;

pub use corpus::{Corpus, NameResult};
pub use handle::{Abbreviator, AbbreviatorOptions, Explanation, FailurePolicy};
