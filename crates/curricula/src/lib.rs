//! # `curricula` Curriculum Binning for Parallel Corpora
//!
//! `curricula` buckets a sentence-aligned bilingual corpus into difficulty
//! levels for curriculum learning. Sentences are ranked by how rare their
//! words are in a frequency vocabulary, and partitioned into ordered bins
//! (easy to hard) keyed by rank thresholds.
//!
//! See:
//! * [`vocab`] to load, count and save word frequency vocabularies.
//! * [`corpus`] to load and save line-aligned parallel corpora.
//! * [`ranking`] to rank a single sentence.
//! * [`binning`] to partition a corpus into bins.
//! * [`output`] to write bins to disk and report on them.
//!
//! ## Crate Features
//!
//! #### feature: ``ahash``
//!
//! This swaps the vocabulary HashMap implementation for ``ahash``.
//! Enabled by default.
//!
//! ## Binning A Corpus
//!
//! ```rust,no_run
//! use curricula::{
//!     binning::{BinningOptions, Thresholds, assign_to_bins},
//!     corpus::{Side, io::load_parallel_corpus_paths},
//!     output::write_bins,
//!     ranking::RankMode,
//!     vocab::io::load_vocab_tsv_path,
//! };
//!
//! fn example() -> curricula::errors::CResult<()> {
//!     let corpus = load_parallel_corpus_paths("train.de", "train.en")?;
//!     let vocab = load_vocab_tsv_path("vocab.en.tsv")?;
//!
//!     let options = BinningOptions::new(Thresholds::new([0, 100, 10_000])?)
//!         .with_side(Side::Target)
//!         .with_mode(RankMode::Minimum);
//!
//!     let bins = assign_to_bins(&corpus, &vocab, &options)?;
//!     write_bins(&bins, "curriculum")?;
//!     Ok(())
//! }
//! ```
#![warn(missing_docs, unused)]

pub mod binning;
pub mod corpus;
pub mod errors;
pub mod output;
pub mod ranking;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use binning::{BinningOptions, CurriculumBins, Thresholds, UnassignedPolicy, assign_to_bins};
#[doc(inline)]
pub use corpus::{ParallelCorpus, SentencePair, Side};
#[doc(inline)]
pub use errors::{CResult, CurriculaError};
#[doc(inline)]
pub use ranking::{EmptySentencePolicy, RankMode, SentenceRanker};
#[doc(inline)]
pub use vocab::FrequencyVocab;
