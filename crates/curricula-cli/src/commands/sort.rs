use std::path::PathBuf;

use curricula::{
    BinningOptions,
    CResult,
    EmptySentencePolicy,
    RankMode,
    Side,
    Thresholds,
    UnassignedPolicy,
    assign_to_bins,
    corpus::io::load_parallel_corpus_paths,
    output::{BinReport, save_manifest_path, write_bins},
    vocab::io::load_vocab_tsv_path,
};
use rand::{SeedableRng, rngs::StdRng};

use crate::logging::LogArgs;

/// File name of the JSON manifest written with `--manifest`.
const MANIFEST_FILE: &str = "manifest.json";

/// Args for the sort command.
#[derive(clap::Args, Debug)]
pub struct SortArgs {
    /// Source language text file, one sentence per line.
    source: PathBuf,

    /// Target language text file, line-aligned with the source.
    target: PathBuf,

    /// Vocabulary file: a header line, then `word<TAB>frequency` lines.
    vocabulary: PathBuf,

    /// Directory for the `src_{T}.txt` / `trg_{T}.txt` bin files.
    out_dir: PathBuf,

    /// Minimum rank for a bin; repeat once per bin.
    #[arg(short = 't', long = "threshold")]
    thresholds: Vec<u64>,

    /// Side of the corpus to rank: source or target.
    #[arg(long, default_value = "target")]
    side: Side,

    /// Rank by mean word frequency instead of minimum word frequency.
    #[arg(long)]
    averaged: bool,

    /// Handling of sentences ranked below every threshold: catch-all, drop or reject.
    #[arg(long, default_value = "catch-all")]
    unassigned: UnassignedPolicy,

    /// Keep empty bins (writes empty files).
    #[arg(long)]
    keep_empty: bool,

    /// Rank empty sentences with this value instead of failing.
    #[arg(long)]
    empty_rank: Option<u64>,

    /// Seed for picking the per-bin example sentences.
    #[arg(long)]
    seed: Option<u64>,

    /// Also write `manifest.json` describing the bins.
    #[arg(long)]
    manifest: bool,

    #[clap(flatten)]
    pub logging: LogArgs,
}

impl SortArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let report = self.execute()?;
        print!("{report}");

        Ok(())
    }

    /// Validate the binning configuration.
    fn binning_options(&self) -> CResult<BinningOptions> {
        let mode = if self.averaged {
            RankMode::Averaged
        } else {
            RankMode::Minimum
        };
        let empty_policy = match self.empty_rank {
            Some(rank) => EmptySentencePolicy::Rank(rank),
            None => EmptySentencePolicy::Reject,
        };

        Ok(
            BinningOptions::new(Thresholds::new(self.thresholds.iter().copied())?)
                .with_side(self.side)
                .with_mode(mode)
                .with_empty_policy(empty_policy)
                .with_unassigned(self.unassigned)
                .with_prune_empty(!self.keep_empty),
        )
    }

    fn execute(&self) -> CResult<BinReport> {
        let options = self.binning_options()?;

        let corpus = load_parallel_corpus_paths(&self.source, &self.target)?;
        let vocab = load_vocab_tsv_path(&self.vocabulary)?;

        let bins = assign_to_bins(&corpus, &vocab, &options)?;
        write_bins(&bins, &self.out_dir)?;

        let report = BinReport::new(&bins, &options);
        let report = match self.seed {
            Some(seed) => report.with_samples(&bins, &mut StdRng::seed_from_u64(seed)),
            None => report.with_samples(&bins, &mut rand::rng()),
        };

        if self.manifest {
            let path = self.out_dir.join(MANIFEST_FILE);
            log::info!("manifest: {}", path.display());
            save_manifest_path(&report, path)?;
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use clap::Parser;
    use curricula::CurriculaError;

    use super::*;
    use crate::{Args, commands::Commands};

    fn parse(args: &[&str]) -> SortArgs {
        let mut argv = vec!["curricula", "sort"];
        argv.extend_from_slice(args);
        match Args::parse_from(argv).command {
            Commands::Sort(cmd) => cmd,
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_defaults() {
        let cmd = parse(&["s.txt", "t.txt", "v.tsv", "out", "-t", "10", "--threshold", "100"]);
        let options = cmd.binning_options().unwrap();

        assert_eq!(options.thresholds.descending(), &[100, 10]);
        assert_eq!(options.side, Side::Target);
        assert_eq!(options.ranker.mode, RankMode::Minimum);
        assert_eq!(options.ranker.empty_policy, EmptySentencePolicy::Reject);
        assert_eq!(options.unassigned, UnassignedPolicy::CatchAll);
        assert!(options.prune_empty);
    }

    #[test]
    fn test_flags() {
        let cmd = parse(&[
            "s.txt",
            "t.txt",
            "v.tsv",
            "out",
            "-t",
            "5",
            "--side",
            "source",
            "--averaged",
            "--unassigned",
            "drop",
            "--keep-empty",
            "--empty-rank",
            "0",
        ]);
        let options = cmd.binning_options().unwrap();

        assert_eq!(options.side, Side::Source);
        assert_eq!(options.ranker.mode, RankMode::Averaged);
        assert_eq!(options.ranker.empty_policy, EmptySentencePolicy::Rank(0));
        assert_eq!(options.unassigned, UnassignedPolicy::Drop);
        assert!(!options.prune_empty);
    }

    #[test]
    fn test_bad_side_is_rejected() {
        let argv = ["curricula", "sort", "s", "t", "v", "o", "-t", "1", "--side", "left"];
        assert!(Args::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_missing_thresholds() {
        let cmd = parse(&["/nonexistent/s.txt", "/nonexistent/t.txt", "v.tsv", "out"]);
        // Fails on configuration before touching the missing files.
        assert!(matches!(cmd.execute(), Err(CurriculaError::NoThresholds)));
    }

    #[test]
    fn test_execute() {
        let dir = tempdir::TempDir::new("sort_cmd").unwrap();
        let path = |name: &str| dir.path().join(name).to_string_lossy().into_owned();

        fs::write(path("s.txt"), "ein Hund\nein Quokka\n").unwrap();
        fs::write(path("t.txt"), "a dog\na quokka\n").unwrap();
        fs::write(path("v.tsv"), "word\tfrequency\na\t900\ndog\t50\n").unwrap();

        let out = path("out");
        let cmd = parse(&[
            &path("s.txt"),
            &path("t.txt"),
            &path("v.tsv"),
            &out,
            "-t",
            "10",
            "-t",
            "100",
            "--seed",
            "3",
            "--manifest",
        ]);
        let report = cmd.execute().unwrap();

        assert_eq!(report.thresholds(), vec![10, 0]);
        assert_eq!(report.pruned, vec![100]);
        assert_eq!(fs::read_to_string(dir.path().join("out/trg_10.txt")).unwrap(), "a dog\n");
        assert_eq!(
            fs::read_to_string(dir.path().join("out/src_0.txt")).unwrap(),
            "ein Quokka\n"
        );
        assert!(dir.path().join("out").join(MANIFEST_FILE).exists());
        assert_eq!(report.bins[0].sample.as_ref().unwrap().target, "a dog");
    }
}
