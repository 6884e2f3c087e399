//! Relevance ranking of section candidates against a persona query.

use crate::model::Section;

use super::tfidf::TfidfMatrix;

/// Score and order candidates by relevance to the query.
///
/// The TF-IDF matrix is fitted over the query plus every candidate as
/// one batch; each candidate's score is its cosine similarity to the
/// query row. The sort is stable and descending, so candidates with
/// equal scores (including the all-zero degenerate case) keep their
/// input order.
pub fn rank_sections(query: &str, mut sections: Vec<Section>) -> Vec<Section> {
    if sections.is_empty() {
        return sections;
    }

    let mut corpus: Vec<&str> = Vec::with_capacity(sections.len() + 1);
    corpus.push(query);
    corpus.extend(sections.iter().map(|s| s.text.as_str()));
    let matrix = TfidfMatrix::fit(&corpus);

    for (idx, section) in sections.iter_mut().enumerate() {
        section.score = matrix.cosine(0, idx + 1);
    }

    sections.sort_by(|a, b| b.score.total_cmp(&a.score));
    sections
}
