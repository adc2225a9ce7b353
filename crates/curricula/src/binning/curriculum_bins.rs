//! # Curriculum Bins

use std::collections::BTreeMap;

use crate::{binning::Thresholds, corpus::SentencePair, types::FrequencyType};

/// Counters collected while assigning bins.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct BinningStats {
    /// Pairs that were ranked.
    pub ranked: usize,

    /// Pairs ranked below every threshold and dropped.
    pub dropped: usize,

    /// Thresholds whose bins were empty and removed, highest first.
    pub pruned: Vec<FrequencyType>,
}

/// Sentence pairs grouped by difficulty threshold.
///
/// Bin `t` holds the pairs whose rank is at least `t` and below the next
/// higher threshold. Within a bin, pairs keep their corpus order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurriculumBins {
    bins: BTreeMap<FrequencyType, Vec<SentencePair>>,

    /// Assignment counters.
    pub stats: BinningStats,
}

impl CurriculumBins {
    /// Create an empty bin for every threshold.
    pub fn with_thresholds(thresholds: &Thresholds) -> Self {
        Self {
            bins: thresholds
                .descending()
                .iter()
                .map(|&t| (t, Vec::new()))
                .collect(),
            stats: BinningStats::default(),
        }
    }

    /// Append a pair to the bin for `threshold`, creating the bin if needed.
    pub fn push(
        &mut self,
        threshold: FrequencyType,
        pair: SentencePair,
    ) {
        self.bins.entry(threshold).or_default().push(pair);
    }

    /// The number of bins.
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Are there no bins?
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// The pairs in the bin for `threshold`.
    pub fn get(
        &self,
        threshold: FrequencyType,
    ) -> Option<&[SentencePair]> {
        self.bins.get(&threshold).map(Vec::as_slice)
    }

    /// The bin thresholds, highest first.
    pub fn thresholds_descending(&self) -> Vec<FrequencyType> {
        self.bins.keys().rev().copied().collect()
    }

    /// Iterate over `(threshold, pairs)`, highest threshold first.
    pub fn iter_descending(&self) -> impl Iterator<Item = (FrequencyType, &[SentencePair])> {
        self.bins.iter().rev().map(|(t, pairs)| (*t, pairs.as_slice()))
    }

    /// The total number of pairs across all bins.
    pub fn total_pairs(&self) -> usize {
        self.bins.values().map(Vec::len).sum()
    }

    /// Remove empty bins, returning their thresholds highest first.
    pub fn prune_empty(&mut self) -> Vec<FrequencyType> {
        let pruned: Vec<FrequencyType> = self
            .bins
            .iter()
            .rev()
            .filter(|(_, pairs)| pairs.is_empty())
            .map(|(t, _)| *t)
            .collect();

        self.bins.retain(|_, pairs| !pairs.is_empty());
        pruned
    }
}
