//! # Output
//!
//! Writes [`CurriculumBins`](crate::binning::CurriculumBins) to disk as
//! `src_{T}.txt` / `trg_{T}.txt` file pairs, and reports on them.

mod bin_report;
mod bin_writer;

#[doc(inline)]
pub use bin_report::*;
#[doc(inline)]
pub use bin_writer::*;
