//! Ranking candidates and the final report shape.

use serde::{Deserialize, Serialize};

use super::Heading;

/// Maximum number of ranked sections emitted in a report.
pub const MAX_RANKED_SECTIONS: usize = 5;

/// Scoring truncates very long candidate texts to this many characters.
const MAX_CANDIDATE_CHARS: usize = 2000;

/// A text unit eligible for relevance scoring.
///
/// Sections are ephemeral: built per ranking run, scored, and discarded
/// after the top candidates are selected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Source document name
    pub document: String,

    /// Candidate text (heading title or page text block)
    pub text: String,

    /// Zero-based page index
    pub page: u32,

    /// Relevance score, assigned by the ranker
    #[serde(default)]
    pub score: f64,
}

impl Section {
    /// Create an unscored section.
    pub fn new(document: impl Into<String>, text: impl Into<String>, page: u32) -> Self {
        Self {
            document: document.into(),
            text: text.into(),
            page,
            score: 0.0,
        }
    }

    /// Build candidates from a document's classified headings.
    pub fn from_headings(document: &str, headings: &[Heading]) -> Vec<Section> {
        headings
            .iter()
            .map(|h| Section::new(document, h.text.clone(), h.page))
            .collect()
    }

    /// Build candidates from raw per-page text blocks.
    ///
    /// Blocks with at most 3 words are dropped as junk; very long blocks
    /// are truncated so corpus statistics stay bounded.
    pub fn from_text_blocks<'a>(
        document: &str,
        page: u32,
        blocks: impl IntoIterator<Item = &'a str>,
    ) -> Vec<Section> {
        blocks
            .into_iter()
            .filter(|b| b.split_whitespace().count() > 3)
            .map(|b| {
                let text: String = b.chars().take(MAX_CANDIDATE_CHARS).collect();
                Section::new(document, text, page)
            })
            .collect()
    }
}

/// Report metadata block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Filenames of all documents in the collection
    pub input_documents: Vec<String>,

    /// Persona role the ranking was driven by
    pub persona: String,

    /// Task the persona needs to accomplish
    pub job_to_be_done: String,

    /// RFC 3339 timestamp of the run
    pub processing_timestamp: String,
}

/// A top-ranked section in the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedSection {
    /// Source document name
    pub document: String,

    /// Section title, truncated for display
    pub section_title: String,

    /// 1-based, contiguous importance rank
    pub importance_rank: usize,

    /// Zero-based page index
    pub page_number: u32,
}

/// A refined excerpt from a top-ranked section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubsectionEntry {
    /// Source document name
    pub document: String,

    /// Short sentence-bounded excerpt
    pub refined_text: String,

    /// Zero-based page index
    pub page_number: u32,
}

/// The final write-once report artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedReport {
    /// Run metadata
    pub metadata: ReportMetadata,

    /// Top-ranked sections, at most [`MAX_RANKED_SECTIONS`]
    pub extracted_sections: Vec<ExtractedSection>,

    /// Refined excerpts keyed by the same documents and pages
    pub subsection_analysis: Vec<SubsectionEntry>,
}
