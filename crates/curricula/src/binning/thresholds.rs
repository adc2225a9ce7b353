//! # Bin Thresholds

use crate::{
    errors::{CResult, CurriculaError},
    types::FrequencyType,
};

/// A validated, non-empty set of distinct bin thresholds.
///
/// Each threshold is the minimum rank a sentence needs to enter its bin.
/// Thresholds are held in descending order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thresholds {
    descending: Vec<FrequencyType>,
}

impl Thresholds {
    /// Validate a threshold list.
    ///
    /// ## Errors
    /// * [`CurriculaError::NoThresholds`] if `thresholds` is empty.
    /// * [`CurriculaError::DuplicateThreshold`] if a value repeats.
    pub fn new<I>(thresholds: I) -> CResult<Self>
    where
        I: IntoIterator<Item = FrequencyType>,
    {
        let mut descending: Vec<FrequencyType> = thresholds.into_iter().collect();
        if descending.is_empty() {
            return Err(CurriculaError::NoThresholds);
        }

        descending.sort_unstable_by(|a, b| b.cmp(a));
        if let Some(w) = descending.windows(2).find(|w| w[0] == w[1]) {
            return Err(CurriculaError::DuplicateThreshold { threshold: w[0] });
        }

        Ok(Self { descending })
    }

    /// The thresholds, highest first.
    pub fn descending(&self) -> &[FrequencyType] {
        &self.descending
    }

    /// The lowest threshold.
    pub fn lowest(&self) -> FrequencyType {
        // Non-empty by construction.
        self.descending[self.descending.len() - 1]
    }

    /// The number of thresholds.
    pub fn len(&self) -> usize {
        self.descending.len()
    }

    /// Is the set empty? Never true for a constructed value.
    pub fn is_empty(&self) -> bool {
        self.descending.is_empty()
    }

    /// Does the set contain `threshold`?
    pub fn contains(
        &self,
        threshold: FrequencyType,
    ) -> bool {
        self.descending.contains(&threshold)
    }

    /// Add a `0` floor so every rank qualifies for some bin.
    pub fn with_zero_floor(mut self) -> Self {
        if !self.contains(0) {
            self.descending.push(0);
        }
        self
    }

    /// The highest threshold `t` with `t <= rank`, if any.
    pub fn select(
        &self,
        rank: FrequencyType,
    ) -> Option<FrequencyType> {
        self.descending.iter().copied().find(|&t| t <= rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let thresholds = Thresholds::new([10, 0, 100]).unwrap();
        assert_eq!(thresholds.descending(), &[100, 10, 0]);
        assert_eq!(thresholds.lowest(), 0);
        assert_eq!(thresholds.len(), 3);
        assert!(!thresholds.is_empty());
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(
            Thresholds::new(Vec::new()),
            Err(CurriculaError::NoThresholds)
        ));
    }

    #[test]
    fn test_rejects_duplicates() {
        assert!(matches!(
            Thresholds::new([5, 10, 5]),
            Err(CurriculaError::DuplicateThreshold { threshold: 5 })
        ));
    }

    #[test]
    fn test_select() {
        let thresholds = Thresholds::new([0, 10, 100]).unwrap();
        assert_eq!(thresholds.select(55), Some(10));
        assert_eq!(thresholds.select(100), Some(100));
        assert_eq!(thresholds.select(9), Some(0));
        assert_eq!(thresholds.select(0), Some(0));

        let thresholds = Thresholds::new([10, 100]).unwrap();
        assert_eq!(thresholds.select(3), None);
        assert_eq!(thresholds.lowest(), 10);
    }

    #[test]
    fn test_zero_floor() {
        let thresholds = Thresholds::new([10, 100]).unwrap().with_zero_floor();
        assert_eq!(thresholds.descending(), &[100, 10, 0]);
        assert_eq!(thresholds.select(3), Some(0));

        let thresholds = Thresholds::new([0, 5]).unwrap().with_zero_floor();
        assert_eq!(thresholds.descending(), &[5, 0]);
    }
}
