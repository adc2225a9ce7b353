use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::PathBuf,
};

use curricula::{
    CResult,
    FrequencyVocab,
    vocab::{FrequencyCounter, FrequencyCounterOptions, io::write_vocab_tsv},
};

use crate::{input_output::OutputArgs, logging::LogArgs};

/// Args for the count-vocab command.
#[derive(clap::Args, Debug)]
pub struct CountVocabArgs {
    /// Input text files.
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Leave out words seen fewer times than this.
    #[arg(long, default_value_t = 1)]
    min_frequency: u64,

    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl CountVocabArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let vocab = self.count()?;
        log::info!("Vocabulary Size: {}", vocab.len());

        if let Some(path) = &self.output.output {
            log::info!("output: {}", path);
        }
        let mut writer = self.output.open_writer()?;
        write_vocab_tsv(&vocab, &mut writer)?;

        Ok(())
    }

    fn count(&self) -> CResult<FrequencyVocab> {
        let mut counter = FrequencyCounter::new(
            FrequencyCounterOptions::default().with_min_frequency(self.min_frequency),
        );

        log::info!("Reading files:");
        for (idx, path) in self.files.iter().enumerate() {
            log::info!("{idx}: {}", path.display());
            let reader = BufReader::new(File::open(path)?);
            let lines = reader.lines().collect::<Result<Vec<String>, _>>()?;
            counter.update_from_lines(lines);
        }

        Ok(counter.release())
    }
}
