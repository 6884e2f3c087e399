//! Text run and logical line types.

use serde::{Deserialize, Serialize};

/// A raw text run as produced by a parsing backend.
///
/// Runs carry the font metrics the heading classifier needs; everything
/// else about the source layout is deliberately absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextRun {
    /// The run's text content, as extracted
    pub text: String,

    /// Font size in points
    pub size: f32,

    /// Font name (e.g., "Helvetica-Bold")
    pub font: String,

    /// Baseline Y position on the page
    pub y: f32,
}

impl TextRun {
    /// Create a new text run.
    pub fn new(text: impl Into<String>, size: f32, font: impl Into<String>, y: f32) -> Self {
        Self {
            text: text.into(),
            size,
            font: font.into(),
            y,
        }
    }
}

/// One page of extracted runs, grouped by visual line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageRuns {
    /// Visual lines in extraction order, each holding its runs in order
    pub lines: Vec<Vec<TextRun>>,
}

/// All extracted runs of a single document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentRuns {
    /// Pages in document order; indices are zero-based
    pub pages: Vec<PageRuns>,
}

impl DocumentRuns {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Check whether the document has any runs at all.
    pub fn is_empty(&self) -> bool {
        self.pages.iter().all(|p| p.lines.is_empty())
    }
}

/// One visually merged line with aggregated font metrics.
///
/// Immutable once built by the line aggregator: size and y-position are
/// means over the contributing runs, the style flags are true if any
/// contributing run carried the style.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogicalLine {
    /// Normalized, joined text of the line
    pub text: String,

    /// Mean font size of the contributing runs
    pub size: f32,

    /// Whether any contributing run used a bold font
    pub is_bold: bool,

    /// Whether any contributing run used an italic font
    pub is_italic: bool,

    /// Mean baseline Y position
    pub y: f32,

    /// Zero-based page index
    pub page: u32,
}

impl LogicalLine {
    /// Number of characters in the line's text.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}
