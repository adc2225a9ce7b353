//! # Error Types

use crate::corpus::Side;

/// Errors from curricula operations.
#[derive(Debug, thiserror::Error)]
pub enum CurriculaError {
    /// No thresholds were supplied.
    #[error("at least one threshold is required")]
    NoThresholds,

    /// The same threshold was supplied twice.
    #[error("duplicate threshold ({threshold}); each threshold defines its own bin")]
    DuplicateThreshold {
        /// The repeated threshold.
        threshold: u64,
    },

    /// The side selector was neither `source` nor `target`.
    #[error("unknown side {0:?}; expected \"source\" or \"target\"")]
    UnknownSide(String),

    /// A vocabulary line could not be parsed.
    #[error("vocabulary line {line}: {message}")]
    VocabFormat {
        /// The 1-based line number.
        line: usize,

        /// What was wrong with the line.
        message: String,
    },

    /// The two sides of a parallel corpus have different line counts.
    #[error("corpus sides are misaligned: {source_lines} source lines vs {target_lines} target lines")]
    CorpusLengthMismatch {
        /// Lines in the source file.
        source_lines: usize,

        /// Lines in the target file.
        target_lines: usize,
    },

    /// A sentence with no tokens was ranked under the reject policy.
    #[error("empty {side} sentence at corpus line {line}")]
    EmptySentence {
        /// The 1-based corpus line.
        line: usize,

        /// The side that was ranked.
        side: Side,
    },

    /// A sentence ranked below every threshold under the reject policy.
    #[error("corpus line {line} has rank {rank}, below the lowest threshold ({lowest})")]
    Unassignable {
        /// The 1-based corpus line.
        line: usize,

        /// The sentence rank.
        rank: u64,

        /// The lowest configured threshold.
        lowest: u64,
    },

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type for curricula operations.
pub type CResult<T> = core::result::Result<T, CurriculaError>;
