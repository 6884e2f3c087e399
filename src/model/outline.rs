//! Outline types: heading levels and per-document outlines.

use serde::{Deserialize, Serialize};

/// Heading level assigned by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HeadingLevel {
    /// Top-level heading
    H1,
    /// Second-level heading
    H2,
    /// Third-level heading
    H3,
}

impl HeadingLevel {
    /// Numeric level (1-3).
    pub fn depth(&self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }
}

impl std::fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeadingLevel::H1 => write!(f, "H1"),
            HeadingLevel::H2 => write!(f, "H2"),
            HeadingLevel::H3 => write!(f, "H3"),
        }
    }
}

/// A classified, leveled outline entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    /// Assigned level
    pub level: HeadingLevel,

    /// Normalized heading text
    pub text: String,

    /// Zero-based page index
    pub page: u32,
}

impl Heading {
    /// Create a new heading.
    pub fn new(level: HeadingLevel, text: impl Into<String>, page: u32) -> Self {
        Self {
            level,
            text: text.into(),
            page,
        }
    }
}

/// The final ordered outline of one document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentOutline {
    /// Source document name
    pub document: String,

    /// Headings in reading order, unique per `(text, page)`
    pub headings: Vec<Heading>,
}

impl DocumentOutline {
    /// Create a new outline for a document.
    pub fn new(document: impl Into<String>, headings: Vec<Heading>) -> Self {
        Self {
            document: document.into(),
            headings,
        }
    }

    /// Number of headings in the outline.
    pub fn len(&self) -> usize {
        self.headings.len()
    }

    /// Check if the outline has no entries.
    pub fn is_empty(&self) -> bool {
        self.headings.is_empty()
    }
}
