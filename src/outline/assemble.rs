//! Outline assembly: duplicate suppression and reading order.

use std::collections::HashSet;

use crate::model::{Heading, LogicalLine};

use super::classify::classify;
use super::thresholds::FontThresholds;

/// Assemble a document's final outline from its logical lines.
///
/// Scanning in extraction order, a line whose text is a strict substring
/// of an earlier retained text is discarded before classification; this
/// suppresses fragment lines like `"quest f"` preceding
/// `"quest for excellence"`. The filter tracks every retained text, not
/// just confirmed headings, so it is order-sensitive: an early body
/// fragment can shadow a later longer heading that contains it.
///
/// Surviving headings are sorted by `(page, y)` and exact `(text, page)`
/// repeats dropped, yielding reading order with no duplicates.
pub fn assemble_outline(lines: &[LogicalLine], thresholds: &FontThresholds) -> Vec<Heading> {
    let mut retained: Vec<&str> = Vec::new();
    let mut classified: Vec<(u32, f32, Heading)> = Vec::new();

    for line in lines {
        let text = line.text.as_str();
        if retained
            .iter()
            .any(|seen| seen.len() > text.len() && seen.contains(text))
        {
            continue;
        }
        retained.push(text);

        if let Some(level) = classify(line, thresholds) {
            classified.push((line.page, line.y, Heading::new(level, text, line.page)));
        }
    }

    classified.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.total_cmp(&b.1)));

    let mut seen_keys: HashSet<(String, u32)> = HashSet::new();
    let mut outline = Vec::with_capacity(classified.len());
    for (_, _, heading) in classified {
        let key = (heading.text.clone(), heading.page);
        if seen_keys.insert(key) {
            outline.push(heading);
        }
    }
    outline
}
