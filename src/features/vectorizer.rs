// TF-IDF vectorizer with sublinear term-frequency scaling.
//
// fit() builds the vocabulary from document-frequency-filtered terms;
// transform() maps any document onto that fixed vocabulary. The fitted
// vocabulary is an explicit value threaded through the pipeline; there
// is no shared vectorizer state anywhere.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{PipelineError, Result};

/// Vocabulary-building parameters. Defaults match the original tool:
/// a term must appear in at least 5 documents and at most 95% of them.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    /// Minimum document frequency, absolute.
    pub min_df: usize,
    /// Maximum document frequency, as a fraction of corpus size.
    pub max_df: f64,
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self {
            min_df: 5,
            max_df: 0.95,
        }
    }
}

/// A fitted vocabulary: ordered terms, term → column index, and the idf
/// weight per column. Immutable once fitted.
#[derive(Debug, Clone)]
pub struct FittedVectorizer {
    vocabulary: Vec<String>,
    index: HashMap<String, usize>,
    idf: Vec<f64>,
}

/// Documents × vocabulary matrix of TF-IDF weights.
#[derive(Debug, Clone)]
pub struct FeatureMatrix {
    rows: Vec<Vec<f64>>,
    n_terms: usize,
}

impl FeatureMatrix {
    pub fn n_docs(&self) -> usize {
        self.rows.len()
    }

    pub fn n_terms(&self) -> usize {
        self.n_terms
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }
}

impl TfidfVectorizer {
    pub fn new(min_df: usize, max_df: f64) -> Self {
        Self { min_df, max_df }
    }

    /// Build the vocabulary over a normalized corpus.
    ///
    /// Terms are kept when `min_df <= df` and `df / n_docs <= max_df`,
    /// and ordered lexicographically, so refitting an identical corpus
    /// yields an identical vocabulary. The idf is the smoothed
    /// `ln((1 + n) / (1 + df)) + 1`.
    pub fn fit(&self, corpus: &[String]) -> Result<FittedVectorizer> {
        if corpus.is_empty() {
            return Err(PipelineError::EmptyCorpus);
        }
        if self.min_df == 0 {
            return Err(PipelineError::InvalidConfig {
                name: "min_df",
                message: "must be at least 1".to_string(),
            });
        }
        if !(self.max_df > 0.0 && self.max_df <= 1.0) {
            return Err(PipelineError::InvalidConfig {
                name: "max_df",
                message: format!("must be in (0, 1], got {}", self.max_df),
            });
        }

        let n_docs = corpus.len();
        let mut doc_freq: HashMap<&str, usize> = HashMap::new();
        for doc in corpus {
            let mut seen: Vec<&str> = doc.split_whitespace().collect();
            seen.sort_unstable();
            seen.dedup();
            for term in seen {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        let mut vocabulary: Vec<String> = doc_freq
            .iter()
            .filter(|(_, &df)| df >= self.min_df && df as f64 / n_docs as f64 <= self.max_df)
            .map(|(term, _)| (*term).to_string())
            .collect();
        vocabulary.sort_unstable();

        let idf = vocabulary
            .iter()
            .map(|term| {
                let df = doc_freq[term.as_str()];
                ((1.0 + n_docs as f64) / (1.0 + df as f64)).ln() + 1.0
            })
            .collect();

        let index = vocabulary
            .iter()
            .enumerate()
            .map(|(i, term)| (term.clone(), i))
            .collect();

        debug!(
            n_docs,
            vocabulary = vocabulary.len(),
            "Fitted TF-IDF vocabulary"
        );

        Ok(FittedVectorizer {
            vocabulary,
            index,
            idf,
        })
    }

    /// Fit on a corpus and transform it in one step.
    pub fn fit_transform(&self, corpus: &[String]) -> Result<(FittedVectorizer, FeatureMatrix)> {
        let fitted = self.fit(corpus)?;
        let matrix = fitted.transform(corpus);
        Ok((fitted, matrix))
    }
}

impl FittedVectorizer {
    /// The ordered vocabulary; the position of a term is its column.
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Map documents onto the fitted vocabulary, preserving order.
    ///
    /// Term frequency is sublinear (`1 + ln(count)`); each row is
    /// L2-normalized. Terms unseen at fit time contribute zero weight.
    pub fn transform(&self, docs: &[String]) -> FeatureMatrix {
        let rows = docs.iter().map(|doc| self.transform_one(doc)).collect();
        FeatureMatrix {
            rows,
            n_terms: self.vocabulary.len(),
        }
    }

    fn transform_one(&self, doc: &str) -> Vec<f64> {
        let mut counts: HashMap<usize, usize> = HashMap::new();
        for term in doc.split_whitespace() {
            if let Some(&col) = self.index.get(term) {
                *counts.entry(col).or_insert(0) += 1;
            }
        }

        let mut row = vec![0.0; self.vocabulary.len()];
        for (col, count) in counts {
            let tf = 1.0 + (count as f64).ln();
            row[col] = tf * self.idf[col];
        }

        let norm: f64 = row.iter().map(|w| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for w in &mut row {
                *w /= norm;
            }
        }
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(docs: &[&str]) -> Vec<String> {
        docs.iter().map(|d| d.to_string()).collect()
    }

    #[test]
    fn empty_corpus_is_a_data_error() {
        let err = TfidfVectorizer::default().fit(&[]).unwrap_err();
        assert!(matches!(err, PipelineError::EmptyCorpus));
    }

    #[test]
    fn vocabulary_is_sorted_and_reproducible() {
        let docs = corpus(&["beta alpha", "alpha gamma", "beta gamma delta"]);
        let vectorizer = TfidfVectorizer::new(1, 1.0);
        let first = vectorizer.fit(&docs).unwrap();
        let second = vectorizer.fit(&docs).unwrap();
        assert_eq!(first.vocabulary(), second.vocabulary());
        let mut sorted = first.vocabulary().to_vec();
        sorted.sort();
        assert_eq!(first.vocabulary(), sorted.as_slice());
    }

    #[test]
    fn min_df_and_max_df_filter_vocabulary() {
        // "common" in 4/4 docs, "rare" in 1/4, "pair" in 2/4
        let docs = corpus(&[
            "common rare pair",
            "common pair",
            "common word",
            "common word",
        ]);
        let fitted = TfidfVectorizer::new(2, 0.9).fit(&docs).unwrap();
        let vocab = fitted.vocabulary();
        assert!(!vocab.contains(&"common".to_string()), "df=1.0 > max_df");
        assert!(!vocab.contains(&"rare".to_string()), "df=1 < min_df");
        assert!(vocab.contains(&"pair".to_string()));
        assert!(vocab.contains(&"word".to_string()));
    }

    #[test]
    fn matrix_shape_matches_corpus_and_vocabulary() {
        let docs = corpus(&["alpha beta", "beta gamma", "gamma alpha delta"]);
        let (fitted, matrix) = TfidfVectorizer::new(1, 1.0).fit_transform(&docs).unwrap();
        assert_eq!(matrix.n_docs(), 3);
        assert_eq!(matrix.n_terms(), fitted.vocabulary().len());
        for row in matrix.rows() {
            assert_eq!(row.len(), fitted.vocabulary().len());
        }
    }

    #[test]
    fn rows_are_l2_normalized() {
        let docs = corpus(&["alpha beta beta", "beta gamma"]);
        let (_, matrix) = TfidfVectorizer::new(1, 1.0).fit_transform(&docs).unwrap();
        for row in matrix.rows() {
            let norm: f64 = row.iter().map(|w| w * w).sum::<f64>().sqrt();
            assert!((norm - 1.0).abs() < 1e-9, "row norm {norm}");
        }
    }

    #[test]
    fn unseen_terms_contribute_zero() {
        let train = corpus(&["alpha beta", "beta gamma"]);
        let fitted = TfidfVectorizer::new(1, 1.0).fit(&train).unwrap();
        let matrix = fitted.transform(&corpus(&["omega omega omega"]));
        assert_eq!(matrix.n_docs(), 1);
        assert!(matrix.rows()[0].iter().all(|&w| w == 0.0));
    }

    #[test]
    fn sublinear_tf_dampens_repeats() {
        let docs = corpus(&["alpha beta", "alpha alpha alpha alpha beta"]);
        let fitted = TfidfVectorizer::new(1, 1.0).fit(&docs).unwrap();
        let matrix = fitted.transform(&docs);
        let col = fitted
            .vocabulary()
            .iter()
            .position(|t| t == "alpha")
            .unwrap();
        // 4 repeats weigh more than 1, but nowhere near 4x after
        // sublinear scaling and row normalization
        let single = matrix.rows()[0][col];
        let repeated = matrix.rows()[1][col];
        assert!(repeated > single);
        assert!(repeated < single * 4.0);
    }
}
