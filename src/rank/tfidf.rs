//! Term-weighting over a small in-memory corpus.
//!
//! Smoothed TF-IDF with L2-normalized rows: weight = raw term count *
//! (ln((1 + n) / (1 + df)) + 1). With normalized rows, cosine similarity
//! reduces to a dot product.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

use super::stopwords::is_stop_word;

fn token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // alphanumeric words of at least two characters
    RE.get_or_init(|| Regex::new(r"\w\w+").unwrap())
}

/// Lowercased content tokens of a text, stop words removed.
pub fn tokenize(text: &str) -> Vec<String> {
    token_re()
        .find_iter(&text.to_lowercase())
        .map(|m| m.as_str().to_string())
        .filter(|t| !is_stop_word(t))
        .collect()
}

/// A fitted term-weight matrix over one corpus batch.
///
/// The corpus is atomic: scores are only comparable within a single fit,
/// because document frequency couples every row to the whole batch.
#[derive(Debug, Clone)]
pub struct TfidfMatrix {
    vocab: HashMap<String, usize>,
    rows: Vec<Vec<f64>>,
}

impl TfidfMatrix {
    /// Fit a matrix over the given documents, in order.
    pub fn fit<S: AsRef<str>>(docs: &[S]) -> Self {
        let tokenized: Vec<Vec<String>> = docs.iter().map(|d| tokenize(d.as_ref())).collect();

        let mut vocab: HashMap<String, usize> = HashMap::new();
        let mut doc_freq: Vec<usize> = Vec::new();
        for tokens in &tokenized {
            let mut seen_here: HashMap<&str, ()> = HashMap::new();
            for token in tokens {
                if !vocab.contains_key(token.as_str()) {
                    vocab.insert(token.clone(), vocab.len());
                    doc_freq.push(0);
                }
                if seen_here.insert(token.as_str(), ()).is_none() {
                    doc_freq[vocab[token.as_str()]] += 1;
                }
            }
        }

        let n = tokenized.len() as f64;
        let idf: Vec<f64> = doc_freq
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let rows = tokenized
            .iter()
            .map(|tokens| {
                let mut row = vec![0.0f64; vocab.len()];
                for token in tokens {
                    row[vocab[token.as_str()]] += 1.0;
                }
                for (weight, idf) in row.iter_mut().zip(&idf) {
                    *weight *= idf;
                }
                l2_normalize(&mut row);
                row
            })
            .collect();

        Self { vocab, rows }
    }

    /// Number of fitted documents.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if the matrix holds no documents.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of vocabulary terms.
    pub fn vocab_size(&self) -> usize {
        self.vocab.len()
    }

    /// Cosine similarity between two fitted rows.
    ///
    /// Rows are L2-normalized at fit time, so this is a plain dot
    /// product; a row with no vocabulary scores 0 against everything.
    pub fn cosine(&self, a: usize, b: usize) -> f64 {
        self.rows[a]
            .iter()
            .zip(&self.rows[b])
            .map(|(x, y)| x * y)
            .sum()
    }
}

fn l2_normalize(row: &mut [f64]) {
    let norm = row.iter().map(|w| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for w in row.iter_mut() {
            *w /= norm;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_filters() {
        let tokens = tokenize("The Pump, and THE Filter!");
        assert_eq!(tokens, vec!["pump", "filter"]);
    }

    #[test]
    fn test_tokenize_drops_single_chars() {
        let tokens = tokenize("a b velocity x2");
        assert_eq!(tokens, vec!["velocity", "x2"]);
    }

    #[test]
    fn test_identical_rows_have_unit_cosine() {
        let m = TfidfMatrix::fit(&["replace the filter", "replace the filter"]);
        assert!((m.cosine(0, 1) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_disjoint_rows_score_zero() {
        let m = TfidfMatrix::fit(&["install the pump", "quarterly revenue report"]);
        assert_eq!(m.cosine(0, 1), 0.0);
    }

    #[test]
    fn test_shared_terms_score_between() {
        let m = TfidfMatrix::fit(&[
            "pump installation guide",
            "pump maintenance schedule",
            "unrelated gardening notes",
        ]);
        let related = m.cosine(0, 1);
        let unrelated = m.cosine(0, 2);
        assert!(related > 0.0);
        assert!(related < 1.0);
        assert_eq!(unrelated, 0.0);
    }

    #[test]
    fn test_empty_text_rows() {
        let m = TfidfMatrix::fit(&["", "the and of", "content words here"]);
        assert_eq!(m.cosine(0, 2), 0.0);
        assert_eq!(m.cosine(1, 2), 0.0);
        assert_eq!(m.len(), 3);
    }

    #[test]
    fn test_empty_corpus() {
        let m = TfidfMatrix::fit::<&str>(&[]);
        assert!(m.is_empty());
        assert_eq!(m.vocab_size(), 0);
    }
}
