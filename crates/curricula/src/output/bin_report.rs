//! # Bin Report
//!
//! Summary statistics for a set of [`CurriculumBins`], with one randomly
//! sampled example per bin for eyeballing the curriculum.

use core::fmt::{Display, Formatter};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use rand::{Rng, seq::IndexedRandom};

use crate::{
    binning::{BinningOptions, CurriculumBins},
    corpus::{SentencePair, Side},
    errors::CResult,
    output::bin_file_names,
    ranking::RankMode,
    types::FrequencyType,
};

/// A sampled example pair, joined back into lines.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SampleLine {
    /// The source sentence.
    pub source: String,

    /// The target sentence.
    pub target: String,
}

impl From<&SentencePair> for SampleLine {
    fn from(pair: &SentencePair) -> Self {
        Self {
            source: pair.source.join(" "),
            target: pair.target.join(" "),
        }
    }
}

/// Per-bin summary.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct BinSummary {
    /// The bin threshold.
    pub threshold: FrequencyType,

    /// The number of pairs in the bin.
    pub size: usize,

    /// The source side file name.
    pub source_file: String,

    /// The target side file name.
    pub target_file: String,

    /// A sampled example, if sampling was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample: Option<SampleLine>,
}

/// Summary of a binning run.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct BinReport {
    /// The ranked side.
    pub side: Side,

    /// The rank mode.
    pub mode: RankMode,

    /// Pairs placed in bins.
    pub total_pairs: usize,

    /// Pairs dropped below the lowest threshold.
    pub dropped: usize,

    /// Thresholds of removed empty bins.
    pub pruned: Vec<FrequencyType>,

    /// The bins, highest threshold first.
    pub bins: Vec<BinSummary>,
}

impl BinReport {
    /// Summarize `bins` produced with `options`.
    pub fn new(
        bins: &CurriculumBins,
        options: &BinningOptions,
    ) -> Self {
        Self {
            side: options.side,
            mode: options.ranker.mode,
            total_pairs: bins.total_pairs(),
            dropped: bins.stats.dropped,
            pruned: bins.stats.pruned.clone(),
            bins: bins
                .iter_descending()
                .map(|(threshold, pairs)| {
                    let (source_file, target_file) = bin_file_names(threshold);
                    BinSummary {
                        threshold,
                        size: pairs.len(),
                        source_file,
                        target_file,
                        sample: None,
                    }
                })
                .collect(),
        }
    }

    /// Attach one random example from each non-empty bin.
    ///
    /// `bins` must be the bins this report was built from.
    pub fn with_samples<R: Rng + ?Sized>(
        mut self,
        bins: &CurriculumBins,
        rng: &mut R,
    ) -> Self {
        for summary in &mut self.bins {
            summary.sample = bins
                .get(summary.threshold)
                .and_then(|pairs| pairs.choose(&mut *rng))
                .map(SampleLine::from);
        }
        self
    }

    /// The number of bins.
    pub fn bin_count(&self) -> usize {
        self.bins.len()
    }

    /// The bin thresholds, highest first.
    pub fn thresholds(&self) -> Vec<FrequencyType> {
        self.bins.iter().map(|b| b.threshold).collect()
    }
}

impl Display for BinReport {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> core::fmt::Result {
        writeln!(f, "Number of bins: {}", self.bin_count())?;
        writeln!(f, "Thresholds: {:?}", self.thresholds())?;
        writeln!(
            f,
            "Ranked on: {} side, {} frequency",
            self.side, self.mode
        )?;
        writeln!(f, "Total pairs: {}", self.total_pairs)?;
        if self.dropped > 0 {
            writeln!(f, "Dropped pairs: {}", self.dropped)?;
        }
        if !self.pruned.is_empty() {
            writeln!(f, "Empty bins removed: {:?}", self.pruned)?;
        }

        for summary in &self.bins {
            writeln!(f, "bin {}: {} pairs", summary.threshold, summary.size)?;
            if let Some(sample) = &summary.sample {
                writeln!(f, "  src: {}", sample.source)?;
                writeln!(f, "  trg: {}", sample.target)?;
            }
        }
        Ok(())
    }
}

/// Write a [`BinReport`] as pretty JSON.
pub fn write_manifest<W: Write>(
    report: &BinReport,
    writer: &mut W,
) -> CResult<()> {
    serde_json::to_writer_pretty(&mut *writer, report)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Save a [`BinReport`] as a pretty JSON file.
pub fn save_manifest_path<P: AsRef<Path>>(
    report: &BinReport,
    path: P,
) -> CResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_manifest(report, &mut writer)
}
