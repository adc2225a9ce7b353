//! # Vocabulary
//!
//! This module provides the word frequency vocabulary and related io mechanisms.
//!
//! A [`FrequencyVocab`] maps each word to its corpus frequency; it is read from
//! a TSV file via [`io::load_vocab_tsv_path`], or counted from text with a
//! [`FrequencyCounter`].

pub mod io;

mod frequency_counter;
mod frequency_vocab;

#[doc(inline)]
pub use frequency_counter::*;
#[doc(inline)]
pub use frequency_vocab::*;
