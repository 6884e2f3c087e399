//! Data model for outline extraction and relevance ranking.
//!
//! This module defines the intermediate representation that bridges
//! pre-extracted document text runs and the final ranked report. The
//! model is parser-agnostic: any backend that yields positioned,
//! font-annotated runs can feed it.

mod line;
mod outline;
mod report;

pub use line::{DocumentRuns, LogicalLine, PageRuns, TextRun};
pub use outline::{DocumentOutline, Heading, HeadingLevel};
pub use report::{
    ExtractedSection, RankedReport, ReportMetadata, Section, SubsectionEntry, MAX_RANKED_SECTIONS,
};
