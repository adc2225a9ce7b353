//! # Word Frequency Counter

use crate::{
    corpus::tokenize,
    types::{CHashMap, FrequencyType, hash_map_with_capacity},
    vocab::FrequencyVocab,
};

/// Options for [`FrequencyCounter`].
#[derive(Debug, Clone)]
pub struct FrequencyCounterOptions {
    /// Expected number of distinct words.
    /// Used when pre-allocating the table.
    pub expected_words: usize,

    /// Words seen fewer times than this are left out of the released vocabulary.
    pub min_frequency: FrequencyType,
}

impl Default for FrequencyCounterOptions {
    fn default() -> Self {
        Self {
            expected_words: 100_000,
            min_frequency: 1,
        }
    }
}

impl FrequencyCounterOptions {
    /// Set the expected number of distinct words.
    pub fn with_expected_words(
        self,
        expected_words: usize,
    ) -> Self {
        Self {
            expected_words,
            ..self
        }
    }

    /// Set the minimum frequency kept on release.
    pub fn with_min_frequency(
        self,
        min_frequency: FrequencyType,
    ) -> Self {
        Self {
            min_frequency,
            ..self
        }
    }
}

/// Counts whitespace-separated words to build a [`FrequencyVocab`].
#[derive(Debug)]
pub struct FrequencyCounter {
    /// The config options.
    pub options: FrequencyCounterOptions,

    /// The word counts.
    pub word_counts: CHashMap<String, FrequencyType>,
}

impl Default for FrequencyCounter {
    fn default() -> Self {
        Self::new(FrequencyCounterOptions::default())
    }
}

impl FrequencyCounter {
    /// Create a new counter.
    pub fn new(options: FrequencyCounterOptions) -> Self {
        let word_counts = hash_map_with_capacity(options.expected_words);
        Self {
            options,
            word_counts,
        }
    }

    /// Count the words of an already tokenized sentence.
    pub fn update_from_sentence<S: AsRef<str>>(
        &mut self,
        sentence: &[S],
    ) {
        for word in sentence {
            let word = word.as_ref();
            match self.word_counts.get_mut(word) {
                Some(count) => *count += 1,
                None => {
                    self.word_counts.insert(word.to_string(), 1);
                }
            }
        }
    }

    /// Count the words of raw text lines.
    pub fn update_from_lines<I>(
        &mut self,
        lines: I,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for line in lines {
            self.update_from_sentence(&tokenize(line.as_ref()));
        }
    }

    /// Release the counts as a vocabulary, applying `min_frequency`.
    pub fn release(self) -> FrequencyVocab {
        let min_frequency = self.options.min_frequency;
        let mut word_counts = self.word_counts;
        word_counts.retain(|_, count| *count >= min_frequency);
        word_counts.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let mut counter = FrequencyCounter::default();
        counter.update_from_lines(["Hello world", "Foo  world\tbar world"]);
        counter.update_from_sentence(&["bar"]);

        let vocab = counter.release();
        assert_eq!(
            vocab.sorted_entries(),
            vec![("world", 3), ("bar", 2), ("Foo", 1), ("Hello", 1)]
        );
    }

    #[test]
    fn test_min_frequency() {
        let mut counter = FrequencyCounter::new(
            FrequencyCounterOptions::default()
                .with_expected_words(16)
                .with_min_frequency(2),
        );
        counter.update_from_lines(["a b a", "c a b"]);

        let vocab = counter.release();
        assert_eq!(vocab.sorted_entries(), vec![("a", 3), ("b", 2)]);
        assert!(!vocab.contains("c"));
    }
}
