//! # Bin File Writer

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::{
    binning::CurriculumBins,
    corpus::{SentencePair, Side, io::write_sentences},
    errors::CResult,
    types::FrequencyType,
};

/// The `(source, target)` file names for the bin at `threshold`.
pub fn bin_file_names(threshold: FrequencyType) -> (String, String) {
    (format!("src_{threshold}.txt"), format!("trg_{threshold}.txt"))
}

fn write_side_file(
    pairs: &[SentencePair],
    side: Side,
    path: &Path,
) -> CResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_sentences(pairs.iter().map(|p| p.side(side)), &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write every bin as a `src_{T}.txt` / `trg_{T}.txt` file pair.
///
/// `out_dir` is created if missing. Returns the written paths,
/// highest threshold first, source before target.
pub fn write_bins<P: AsRef<Path>>(
    bins: &CurriculumBins,
    out_dir: P,
) -> CResult<Vec<PathBuf>> {
    let out_dir = out_dir.as_ref();
    fs::create_dir_all(out_dir)?;
    log::info!("Writing files to: {} ...", out_dir.display());

    let mut written = Vec::with_capacity(bins.len() * 2);
    for (threshold, pairs) in bins.iter_descending() {
        let (source_name, target_name) = bin_file_names(threshold);

        let source_path = out_dir.join(source_name);
        write_side_file(pairs, Side::Source, &source_path)?;
        written.push(source_path);

        let target_path = out_dir.join(target_name);
        write_side_file(pairs, Side::Target, &target_path)?;
        written.push(target_path);
    }

    log::info!("... Done! ({} files)", written.len());
    Ok(written)
}
