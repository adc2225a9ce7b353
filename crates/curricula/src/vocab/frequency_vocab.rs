//! # Frequency Vocabulary

use crate::types::{CHashIter, CHashMap, FrequencyType, hash_map_with_capacity};

/// A word to corpus-frequency table.
///
/// Words absent from the table have frequency `0`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyVocab {
    frequencies: CHashMap<String, FrequencyType>,
}

impl From<CHashMap<String, FrequencyType>> for FrequencyVocab {
    fn from(frequencies: CHashMap<String, FrequencyType>) -> Self {
        Self { frequencies }
    }
}

impl<S: Into<String>> FromIterator<(S, FrequencyType)> for FrequencyVocab {
    fn from_iter<I: IntoIterator<Item = (S, FrequencyType)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut frequencies = hash_map_with_capacity(iter.size_hint().0);
        for (word, freq) in iter {
            frequencies.insert(word.into(), freq);
        }
        Self { frequencies }
    }
}

impl FrequencyVocab {
    /// Create an empty vocabulary with room for `capacity` words.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            frequencies: hash_map_with_capacity(capacity),
        }
    }

    /// The number of words in the vocabulary.
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    /// Is the vocabulary empty?
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Insert a word, returning the frequency it replaced.
    pub fn insert<S: Into<String>>(
        &mut self,
        word: S,
        frequency: FrequencyType,
    ) -> Option<FrequencyType> {
        self.frequencies.insert(word.into(), frequency)
    }

    /// Look up a word, `None` when it is out of vocabulary.
    pub fn get(
        &self,
        word: &str,
    ) -> Option<FrequencyType> {
        self.frequencies.get(word).copied()
    }

    /// The frequency of a word; out-of-vocabulary words count as `0`.
    pub fn frequency(
        &self,
        word: &str,
    ) -> FrequencyType {
        self.get(word).unwrap_or(0)
    }

    /// Does the vocabulary contain the word?
    pub fn contains(
        &self,
        word: &str,
    ) -> bool {
        self.frequencies.contains_key(word)
    }

    /// The highest frequency in the vocabulary.
    pub fn max_frequency(&self) -> Option<FrequencyType> {
        self.frequencies.values().copied().max()
    }

    /// Iterate over `(word, frequency)` entries in arbitrary order.
    pub fn iter(&self) -> CHashIter<'_, String, FrequencyType> {
        self.frequencies.iter()
    }

    /// Entries sorted by descending frequency, ties broken by word.
    pub fn sorted_entries(&self) -> Vec<(&str, FrequencyType)> {
        let mut entries: Vec<(&str, FrequencyType)> = self
            .frequencies
            .iter()
            .map(|(w, f)| (w.as_str(), *f))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let vocab: FrequencyVocab = [("the", 100), ("cat", 50)].into_iter().collect();

        assert_eq!(vocab.len(), 2);
        assert!(!vocab.is_empty());
        assert_eq!(vocab.get("the"), Some(100));
        assert_eq!(vocab.get("xyz"), None);
        assert_eq!(vocab.frequency("cat"), 50);
        assert_eq!(vocab.frequency("xyz"), 0);
        assert!(vocab.contains("cat"));
        assert_eq!(vocab.max_frequency(), Some(100));
    }

    #[test]
    fn test_sorted_entries() {
        let mut vocab = FrequencyVocab::with_capacity(4);
        vocab.insert("b", 5);
        vocab.insert("a", 5);
        vocab.insert("c", 9);
        assert_eq!(vocab.insert("d", 1), None);
        assert_eq!(vocab.insert("d", 2), Some(1));

        assert_eq!(
            vocab.sorted_entries(),
            vec![("c", 9), ("a", 5), ("b", 5), ("d", 2)]
        );
    }
}
