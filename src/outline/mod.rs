//! Outline extraction pipeline.
//!
//! Raw runs flow through normalization, line aggregation, threshold
//! estimation, rule-based classification, and assembly into a final
//! per-document outline.

mod aggregate;
mod assemble;
mod classify;
mod normalize;
mod thresholds;

pub use aggregate::{collect_lines, merge_line};
pub use assemble::assemble_outline;
pub use classify::classify;
pub use normalize::normalize;
pub use thresholds::FontThresholds;

use crate::model::{DocumentRuns, Heading};

/// Extract the leveled outline of one document.
///
/// Thresholds are computed from the document's own lines, so each
/// document classifies in isolation and documents can be processed in
/// parallel.
pub fn extract_outline(doc: &DocumentRuns) -> Vec<Heading> {
    let lines = collect_lines(doc);
    let thresholds = FontThresholds::from_lines(&lines);
    log::debug!(
        "outline: {} lines, body size {:.1}, max size {:.1}",
        lines.len(),
        thresholds.body_size,
        thresholds.max_size
    );
    assemble_outline(&lines, &thresholds)
}
