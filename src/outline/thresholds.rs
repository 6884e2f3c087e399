//! Document-relative font-size thresholds.

use std::collections::HashMap;

use crate::model::LogicalLine;

/// Body size used when a document yields no usable lines.
const FALLBACK_BODY_SIZE: f32 = 10.0;

/// Lines at most this many characters long are excluded from the body
/// size estimate (page numbers, list markers, fragments).
const MIN_BODY_TEXT_CHARS: usize = 4;

/// Per-document size cutoffs separating body text from heading levels.
///
/// Heading sizes scale with a document's own body-text baseline, so the
/// cutoffs are derived from the size distribution rather than fixed
/// absolute points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontThresholds {
    /// Most frequent size among body-length lines
    pub body_size: f32,
    /// Minimum size for an H1 by style
    pub h1_size: f32,
    /// Minimum size for an H2 by style
    pub h2_size: f32,
    /// Minimum size for an H3 by style
    pub h3_size: f32,
    /// Largest size observed in the document
    pub max_size: f32,
}

impl FontThresholds {
    /// Estimate thresholds from the full set of a document's lines.
    ///
    /// `body_size` is the mode of sizes over lines longer than 4 chars
    /// (ties break toward the size seen first); `max_size` the overall
    /// maximum. The level cutoffs blend both so documents with unusually
    /// large or small base fonts still classify sensibly.
    pub fn from_lines(lines: &[LogicalLine]) -> Self {
        let body_size = modal_size(
            lines
                .iter()
                .filter(|l| l.char_count() > MIN_BODY_TEXT_CHARS)
                .map(|l| l.size),
        )
        .unwrap_or(FALLBACK_BODY_SIZE);

        let max_size = lines
            .iter()
            .map(|l| l.size)
            .fold(f32::NEG_INFINITY, f32::max);
        let max_size = if max_size.is_finite() { max_size } else { body_size };

        let mut cutoffs = [
            (max_size * 0.65).max(body_size * 1.6),
            (max_size * 0.5).max(body_size * 1.3),
            (max_size * 0.3).max(body_size * 1.1),
        ];
        // With these formulas the cutoffs are already descending; the sort
        // makes h1 >= h2 >= h3 an explicit invariant rather than an
        // accident of the constants.
        cutoffs.sort_by(|a, b| b.total_cmp(a));

        Self {
            body_size,
            h1_size: cutoffs[0],
            h2_size: cutoffs[1],
            h3_size: cutoffs[2],
            max_size,
        }
    }
}

/// Mode of a size multiset. Exact float equality groups observations,
/// matching how parsers report repeated nominal sizes; ties break toward
/// the earliest observed size for determinism.
fn modal_size(sizes: impl Iterator<Item = f32>) -> Option<f32> {
    let mut counts: HashMap<u32, (usize, usize)> = HashMap::new();
    for (order, size) in sizes.enumerate() {
        let entry = counts.entry(size.to_bits()).or_insert((0, order));
        entry.0 += 1;
    }
    counts
        .into_iter()
        .max_by(|a, b| a.1 .0.cmp(&b.1 .0).then(b.1 .1.cmp(&a.1 .1)))
        .map(|(bits, _)| f32::from_bits(bits))
}
