//! # Sentence Ranking
//!
//! A sentence's rank is derived from the vocabulary frequencies of its words;
//! a low rank means rare words, and so a harder sentence.
//!
//! Out-of-vocabulary words always count as frequency `0`.

use crate::{types::FrequencyType, vocab::FrequencyVocab};

/// How word frequencies are combined into a sentence rank.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString, serde::Serialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RankMode {
    /// The lowest word frequency; the rarest word decides.
    #[default]
    Minimum,

    /// The mean word frequency, truncated toward zero.
    Averaged,
}

/// What rank to give a sentence with no tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmptySentencePolicy {
    /// Refuse to rank it.
    #[default]
    Reject,

    /// Use this sentinel rank.
    Rank(FrequencyType),
}

/// Rank a tokenized sentence.
///
/// Returns `None` for an empty sentence.
pub fn rank_sentence<S: AsRef<str>>(
    sentence: &[S],
    vocab: &FrequencyVocab,
    mode: RankMode,
) -> Option<FrequencyType> {
    let freqs = sentence.iter().map(|w| vocab.frequency(w.as_ref()));
    match mode {
        RankMode::Minimum => freqs.min(),
        RankMode::Averaged => {
            if sentence.is_empty() {
                return None;
            }
            let total = freqs.fold(0, FrequencyType::saturating_add);
            Some(total / sentence.len() as FrequencyType)
        }
    }
}

/// A configured sentence ranker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SentenceRanker {
    /// How frequencies are combined.
    pub mode: RankMode,

    /// How empty sentences are handled.
    pub empty_policy: EmptySentencePolicy,
}

impl SentenceRanker {
    /// Create a ranker that rejects empty sentences.
    pub fn new(mode: RankMode) -> Self {
        Self {
            mode,
            empty_policy: EmptySentencePolicy::Reject,
        }
    }

    /// Set the empty sentence policy.
    pub fn with_empty_policy(
        self,
        empty_policy: EmptySentencePolicy,
    ) -> Self {
        Self {
            empty_policy,
            ..self
        }
    }

    /// Rank a sentence.
    ///
    /// Returns `None` only for an empty sentence under [`EmptySentencePolicy::Reject`];
    /// the caller knows the corpus position to report.
    pub fn rank<S: AsRef<str>>(
        &self,
        sentence: &[S],
        vocab: &FrequencyVocab,
    ) -> Option<FrequencyType> {
        match rank_sentence(sentence, vocab, self.mode) {
            Some(rank) => Some(rank),
            None => match self.empty_policy {
                EmptySentencePolicy::Reject => None,
                EmptySentencePolicy::Rank(rank) => Some(rank),
            },
        }
    }
}
