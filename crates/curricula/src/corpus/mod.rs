//! # Parallel Corpus
//!
//! A [`ParallelCorpus`] is an ordered list of [`SentencePair`]s, aligned by
//! line position across a source and a target text file.

pub mod io;

use crate::errors::CurriculaError;

/// A whitespace-tokenized sentence.
pub type Sentence = Vec<String>;

/// Split a line into tokens on arbitrary whitespace.
pub fn tokenize(line: &str) -> Sentence {
    line.split_whitespace().map(str::to_string).collect()
}

/// Which half of a [`SentencePair`] to rank.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    serde::Serialize,
)]
#[strum(
    serialize_all = "lowercase",
    parse_err_ty = CurriculaError,
    parse_err_fn = unknown_side
)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The first element; the source language.
    Source,

    /// The second element; the target language.
    #[default]
    Target,
}

fn unknown_side(s: &str) -> CurriculaError {
    CurriculaError::UnknownSide(s.to_string())
}

/// An aligned `(source, target)` sentence pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SentencePair {
    /// The source language sentence.
    pub source: Sentence,

    /// The target language sentence.
    pub target: Sentence,
}

impl SentencePair {
    /// Build a pair from two tokenized sentences.
    pub fn new(
        source: Sentence,
        target: Sentence,
    ) -> Self {
        Self { source, target }
    }

    /// Build a pair by tokenizing two raw lines.
    pub fn from_lines(
        source: &str,
        target: &str,
    ) -> Self {
        Self::new(tokenize(source), tokenize(target))
    }

    /// The sentence on the given side.
    pub fn side(
        &self,
        side: Side,
    ) -> &[String] {
        match side {
            Side::Source => &self.source,
            Side::Target => &self.target,
        }
    }
}

/// An ordered, line-aligned parallel corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParallelCorpus {
    pairs: Vec<SentencePair>,
}

impl From<Vec<SentencePair>> for ParallelCorpus {
    fn from(pairs: Vec<SentencePair>) -> Self {
        Self { pairs }
    }
}

impl FromIterator<SentencePair> for ParallelCorpus {
    fn from_iter<I: IntoIterator<Item = SentencePair>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ParallelCorpus {
    type Item = &'a SentencePair;
    type IntoIter = core::slice::Iter<'a, SentencePair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

impl ParallelCorpus {
    /// Zip two aligned sentence lists into a corpus.
    ///
    /// ## Errors
    /// [`CurriculaError::CorpusLengthMismatch`] if the lists differ in length.
    pub fn try_zip(
        source: Vec<Sentence>,
        target: Vec<Sentence>,
    ) -> Result<Self, CurriculaError> {
        if source.len() != target.len() {
            return Err(CurriculaError::CorpusLengthMismatch {
                source_lines: source.len(),
                target_lines: target.len(),
            });
        }

        Ok(source
            .into_iter()
            .zip(target)
            .map(|(s, t)| SentencePair::new(s, t))
            .collect())
    }

    /// The number of sentence pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Is the corpus empty?
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The pairs, in corpus order.
    pub fn pairs(&self) -> &[SentencePair] {
        &self.pairs
    }

    /// Iterate over the pairs in corpus order.
    pub fn iter(&self) -> core::slice::Iter<'_, SentencePair> {
        self.pairs.iter()
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("  a\tb  c \n"), vec!["a", "b", "c"]);
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_side_parse() {
        for side in Side::iter() {
            assert_eq!(side.to_string().parse::<Side>().unwrap(), side);
        }
        assert_eq!(Side::default(), Side::Target);

        match "Target".parse::<Side>() {
            Err(CurriculaError::UnknownSide(s)) => assert_eq!(s, "Target"),
            other => panic!("unexpected: {other:?}"),
        }
        assert!("".parse::<Side>().is_err());
        assert!(matches!(
            "left".parse::<Side>(),
            Err(CurriculaError::UnknownSide(_))
        ));
    }

    #[test]
    fn test_pair_side() {
        let pair = SentencePair::from_lines("ein Haus", "a house here");
        assert_eq!(pair.side(Side::Source), ["ein", "Haus"]);
        assert_eq!(pair.side(Side::Target), ["a", "house", "here"]);
    }

    #[test]
    fn test_try_zip() {
        let corpus = ParallelCorpus::try_zip(
            vec![tokenize("a b"), tokenize("c")],
            vec![tokenize("x"), tokenize("y z")],
        )
        .unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.pairs()[1], SentencePair::from_lines("c", "y z"));

        match ParallelCorpus::try_zip(vec![tokenize("a")], vec![]) {
            Err(CurriculaError::CorpusLengthMismatch {
                source_lines,
                target_lines,
            }) => {
                assert_eq!(source_lines, 1);
                assert_eq!(target_lines, 0);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }
}
