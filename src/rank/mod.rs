//! Relevance ranking pipeline.
//!
//! Candidates from every document in a collection are scored against the
//! persona query in one TF-IDF batch, then the top-ranked few become the
//! report's extracted sections and refined excerpts.

mod ranker;
mod refine;
mod stopwords;
mod tfidf;

pub use ranker::rank_sections;
pub use refine::{headline, refine_excerpts};
pub use stopwords::is_stop_word;
pub use tfidf::{tokenize, TfidfMatrix};

use crate::model::{
    ExtractedSection, RankedReport, ReportMetadata, Section, SubsectionEntry, MAX_RANKED_SECTIONS,
};

/// Build the final report from ranked candidates.
///
/// Takes the top candidates (at most [`MAX_RANKED_SECTIONS`]), assigns
/// 1-based contiguous importance ranks with truncated display titles,
/// and derives the refined excerpts from the same sections.
pub fn build_report(metadata: ReportMetadata, ranked: &[Section]) -> RankedReport {
    let top = &ranked[..ranked.len().min(MAX_RANKED_SECTIONS)];

    let extracted_sections = top
        .iter()
        .enumerate()
        .map(|(idx, section)| ExtractedSection {
            document: section.document.clone(),
            section_title: headline(&section.text),
            importance_rank: idx + 1,
            page_number: section.page,
        })
        .collect();

    let subsection_analysis = top
        .iter()
        .flat_map(|section| {
            refine_excerpts(&section.text)
                .into_iter()
                .map(|refined_text| SubsectionEntry {
                    document: section.document.clone(),
                    refined_text,
                    page_number: section.page,
                })
        })
        .collect();

    RankedReport {
        metadata,
        extracted_sections,
        subsection_analysis,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata() -> ReportMetadata {
        ReportMetadata {
            input_documents: vec!["a.pdf".to_string(), "b.pdf".to_string()],
            persona: "Researcher".to_string(),
            job_to_be_done: "Survey prior work".to_string(),
            processing_timestamp: "2024-06-01T12:00:00+00:00".to_string(),
        }
    }

    fn section(document: &str, text: &str, page: u32) -> Section {
        Section::new(document, text, page)
    }

    #[test]
    fn test_report_limits_to_top_five() {
        let ranked: Vec<Section> = (0..8)
            .map(|i| section("a.pdf", &format!("Candidate number {} body", i), i))
            .collect();
        let report = build_report(metadata(), &ranked);
        assert_eq!(report.extracted_sections.len(), 5);
        let ranks: Vec<usize> = report
            .extracted_sections
            .iter()
            .map(|s| s.importance_rank)
            .collect();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_report_excerpts_keyed_like_sections() {
        let ranked = vec![section(
            "b.pdf",
            "Relevant finding stated here. Supporting detail follows it. Extra tail.",
            4,
        )];
        let report = build_report(metadata(), &ranked);
        assert_eq!(report.subsection_analysis.len(), 2);
        for entry in &report.subsection_analysis {
            assert_eq!(entry.document, "b.pdf");
            assert_eq!(entry.page_number, 4);
        }
    }

    #[test]
    fn test_report_truncates_long_titles() {
        let long_text = "z".repeat(90);
        let report = build_report(metadata(), &[section("a.pdf", &long_text, 0)]);
        assert_eq!(
            report.extracted_sections[0].section_title.chars().count(),
            83
        );
    }

    #[test]
    fn test_empty_ranking_empty_report() {
        let report = build_report(metadata(), &[]);
        assert!(report.extracted_sections.is_empty());
        assert!(report.subsection_analysis.is_empty());
        assert_eq!(report.metadata.persona, "Researcher");
    }
}
