//! # Bin Assignment

use crate::{
    binning::{BinningOptions, CurriculumBins, UnassignedPolicy},
    corpus::ParallelCorpus,
    errors::{CResult, CurriculaError},
    vocab::FrequencyVocab,
};

/// Partition a corpus into difficulty bins.
///
/// Each pair is ranked on `options.side` and placed in the bin of the highest
/// threshold not above its rank. Pairs keep corpus order within their bin.
///
/// ## Errors
/// * [`CurriculaError::EmptySentence`] for an empty sentence when the ranker rejects them.
/// * [`CurriculaError::Unassignable`] for a rank below every threshold under
///   [`UnassignedPolicy::Reject`].
pub fn assign_to_bins(
    corpus: &ParallelCorpus,
    vocab: &FrequencyVocab,
    options: &BinningOptions,
) -> CResult<CurriculumBins> {
    let thresholds = options.effective_thresholds();
    let ranker = &options.ranker;

    log::info!(
        "Ranking {} sentence pairs on the {} side ({} frequency)",
        corpus.len(),
        options.side,
        ranker.mode
    );

    let mut bins = CurriculumBins::with_thresholds(&thresholds);

    for (idx, pair) in corpus.iter().enumerate() {
        let line = idx + 1;

        let Some(rank) = ranker.rank(pair.side(options.side), vocab) else {
            return Err(CurriculaError::EmptySentence {
                line,
                side: options.side,
            });
        };
        bins.stats.ranked += 1;

        match thresholds.select(rank) {
            Some(threshold) => bins.push(threshold, pair.clone()),
            None => match options.unassigned {
                UnassignedPolicy::Reject => {
                    return Err(CurriculaError::Unassignable {
                        line,
                        rank,
                        lowest: thresholds.lowest(),
                    });
                }
                // The zero floor always selects under CatchAll, so only Drop gets here.
                UnassignedPolicy::Drop | UnassignedPolicy::CatchAll => {
                    log::trace!("line {line}: rank {rank} below every threshold; dropped");
                    bins.stats.dropped += 1;
                }
            },
        }
    }

    if bins.stats.dropped > 0 {
        log::warn!(
            "{} sentence pairs ranked below the lowest threshold ({}) and were dropped",
            bins.stats.dropped,
            thresholds.lowest()
        );
    }

    if options.prune_empty {
        let pruned = bins.prune_empty();
        if !pruned.is_empty() {
            log::info!("Removed empty bins: {pruned:?}");
        }
        bins.stats.pruned = pruned;
    }

    for (threshold, pairs) in bins.iter_descending() {
        log::debug!("bin {threshold}: {} pairs", pairs.len());
    }

    Ok(bins)
}
