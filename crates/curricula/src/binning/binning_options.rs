//! # Binning Options

use crate::{
    binning::Thresholds,
    corpus::Side,
    ranking::{EmptySentencePolicy, RankMode, SentenceRanker},
};

/// What happens to a sentence ranked below every threshold.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString, serde::Serialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum UnassignedPolicy {
    /// Add an implicit bin at threshold `0`; every sentence is placed.
    #[default]
    CatchAll,

    /// Drop the pair, counting it in the binning stats.
    Drop,

    /// Fail with [`crate::errors::CurriculaError::Unassignable`].
    Reject,
}

/// Options for [`assign_to_bins`](crate::binning::assign_to_bins).
#[derive(Debug, Clone, PartialEq)]
pub struct BinningOptions {
    /// The bin thresholds.
    pub thresholds: Thresholds,

    /// The side of each pair to rank.
    pub side: Side,

    /// The sentence ranker.
    pub ranker: SentenceRanker,

    /// Handling of sentences below every threshold.
    pub unassigned: UnassignedPolicy,

    /// Remove bins that end up empty.
    pub prune_empty: bool,
}

impl BinningOptions {
    /// Create options with the given thresholds.
    ///
    /// Defaults: target side, minimum ranking, empty sentences rejected,
    /// a catch-all zero bin, and empty bins pruned.
    pub fn new(thresholds: Thresholds) -> Self {
        Self {
            thresholds,
            side: Side::default(),
            ranker: SentenceRanker::default(),
            unassigned: UnassignedPolicy::default(),
            prune_empty: true,
        }
    }

    /// Set the side to rank.
    pub fn with_side(
        self,
        side: Side,
    ) -> Self {
        Self { side, ..self }
    }

    /// Set the rank mode.
    pub fn with_mode(
        self,
        mode: RankMode,
    ) -> Self {
        Self {
            ranker: SentenceRanker { mode, ..self.ranker },
            ..self
        }
    }

    /// Set the empty sentence policy.
    pub fn with_empty_policy(
        self,
        empty_policy: EmptySentencePolicy,
    ) -> Self {
        Self {
            ranker: self.ranker.with_empty_policy(empty_policy),
            ..self
        }
    }

    /// Set the unassigned sentence policy.
    pub fn with_unassigned(
        self,
        unassigned: UnassignedPolicy,
    ) -> Self {
        Self { unassigned, ..self }
    }

    /// Enable or disable pruning of empty bins.
    pub fn with_prune_empty(
        self,
        prune_empty: bool,
    ) -> Self {
        Self {
            prune_empty,
            ..self
        }
    }

    /// The thresholds actually used as bin keys.
    ///
    /// Under [`UnassignedPolicy::CatchAll`] this includes the `0` floor.
    pub fn effective_thresholds(&self) -> Thresholds {
        match self.unassigned {
            UnassignedPolicy::CatchAll => self.thresholds.clone().with_zero_floor(),
            _ => self.thresholds.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = BinningOptions::new(Thresholds::new([10]).unwrap());
        assert_eq!(options.side, Side::Target);
        assert_eq!(options.ranker.mode, RankMode::Minimum);
        assert_eq!(options.ranker.empty_policy, EmptySentencePolicy::Reject);
        assert_eq!(options.unassigned, UnassignedPolicy::CatchAll);
        assert!(options.prune_empty);
        assert_eq!(options.effective_thresholds().descending(), &[10, 0]);
    }

    #[test]
    fn test_builders() {
        let options = BinningOptions::new(Thresholds::new([10]).unwrap())
            .with_side(Side::Source)
            .with_mode(RankMode::Averaged)
            .with_empty_policy(EmptySentencePolicy::Rank(0))
            .with_unassigned(UnassignedPolicy::Drop)
            .with_prune_empty(false);

        assert_eq!(options.side, Side::Source);
        assert_eq!(options.ranker.mode, RankMode::Averaged);
        assert_eq!(options.ranker.empty_policy, EmptySentencePolicy::Rank(0));
        assert!(!options.prune_empty);
        assert_eq!(options.effective_thresholds().descending(), &[10]);
    }

    #[test]
    fn test_policy_names() {
        assert_eq!(UnassignedPolicy::CatchAll.to_string(), "catch-all");
        assert_eq!(
            "drop".parse::<UnassignedPolicy>().unwrap(),
            UnassignedPolicy::Drop
        );
        assert!("ignore".parse::<UnassignedPolicy>().is_err());
    }
}
