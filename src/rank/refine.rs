//! Excerpt refinement for top-ranked candidates.

/// Sentence fragments shorter than this (after trimming) are dropped.
const MIN_EXCERPT_CHARS: usize = 10;

/// At most this many sentence fragments per candidate.
const MAX_EXCERPT_FRAGMENTS: usize = 2;

/// Display titles longer than this are truncated with an ellipsis.
const MAX_TITLE_CHARS: usize = 80;

/// Derive short display excerpts from a candidate's text.
///
/// Splits on sentence-like `". "` boundaries, keeps at most the first
/// two fragments, and drops fragments of 10 or fewer characters.
pub fn refine_excerpts(text: &str) -> Vec<String> {
    text.split(". ")
        .take(MAX_EXCERPT_FRAGMENTS)
        .map(str::trim)
        .filter(|frag| frag.chars().count() > MIN_EXCERPT_CHARS)
        .map(str::to_string)
        .collect()
}

/// Truncate a section title for the headline view.
///
/// Titles over 80 characters keep their first 80 characters plus a
/// literal `"..."` marker.
pub fn headline(title: &str) -> String {
    if title.chars().count() > MAX_TITLE_CHARS {
        let mut out: String = title.chars().take(MAX_TITLE_CHARS).collect();
        out.push_str("...");
        out
    } else {
        title.to_string()
    }
}
