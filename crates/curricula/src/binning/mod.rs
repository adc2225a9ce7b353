//! # Curriculum Binning
//!
//! Partitions a [`ParallelCorpus`](crate::corpus::ParallelCorpus) into ordered
//! difficulty bins keyed by rank thresholds.
//!
//! With thresholds `[0, 10, 100]`:
//! * bin `100` holds pairs ranked `100` and up;
//! * bin `10` holds pairs ranked `10..100`;
//! * bin `0` holds the rest.
//!
//! ```rust
//! use curricula::{
//!     binning::{BinningOptions, Thresholds, assign_to_bins},
//!     corpus::{ParallelCorpus, SentencePair},
//!     vocab::FrequencyVocab,
//! };
//!
//! let vocab: FrequencyVocab = [("the", 100), ("cat", 50)].into_iter().collect();
//! let corpus: ParallelCorpus = vec![
//!     SentencePair::from_lines("die Katze", "the cat"),
//!     SentencePair::from_lines("der Hund", "the dog"),
//! ]
//! .into();
//!
//! let options = BinningOptions::new(Thresholds::new([10, 100]).unwrap());
//! let bins = assign_to_bins(&corpus, &vocab, &options).unwrap();
//!
//! assert_eq!(bins.thresholds_descending(), vec![10, 0]);
//! assert_eq!(bins.stats.pruned, vec![100]);
//! ```

mod bin_assigner;
mod binning_options;
mod curriculum_bins;
mod thresholds;

#[doc(inline)]
pub use bin_assigner::*;
#[doc(inline)]
pub use binning_options::*;
#[doc(inline)]
pub use curriculum_bins::*;
#[doc(inline)]
pub use thresholds::*;
