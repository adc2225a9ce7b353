mod count_vocab;
mod sort;

/// Subcommands for curricula
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Sort a parallel corpus into difficulty bins.
    Sort(sort::SortArgs),

    /// Count word frequencies into a vocabulary file.
    CountVocab(count_vocab::CountVocabArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Sort(cmd) => cmd.run(),
            Commands::CountVocab(cmd) => cmd.run(),
        }
    }
}
