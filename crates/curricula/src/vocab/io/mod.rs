//! # Vocabulary IO
//!
//! ## Loading A Vocab
//!
//! ```rust,no_run
//! use curricula::vocab::{FrequencyVocab, io::load_vocab_tsv_path};
//!
//! fn example() -> curricula::errors::CResult<FrequencyVocab> {
//!     let vocab = load_vocab_tsv_path("vocab.tsv")?;
//!     log::info!("{} words", vocab.len());
//!     Ok(vocab)
//! }
//! ```

mod tsv_vocab;

#[doc(inline)]
pub use tsv_vocab::*;
