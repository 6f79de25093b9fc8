// Term ranking: each cluster's top defining terms.
//
// The defining terms of a cluster are the vocabulary columns with the
// highest mean TF-IDF weight across the cluster's member documents.

use crate::error::{PipelineError, Result};
use crate::features::FeatureMatrix;

/// A vocabulary term with its cluster-mean weight.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedTerm {
    pub term: String,
    /// Column index in the fitted vocabulary.
    pub index: usize,
    /// Mean TF-IDF weight across the cluster's members.
    pub score: f64,
}

/// Compute the `n_feats` top terms for every cluster label in `[0, k)`.
///
/// Terms are ordered by descending mean weight; ties break on ascending
/// vocabulary index, so the ranking is stable and deterministic. A
/// cluster with no members yields an empty list, not an error.
pub fn top_terms_per_cluster(
    matrix: &FeatureMatrix,
    labels: &[usize],
    vocabulary: &[String],
    k: usize,
    n_feats: usize,
) -> Result<Vec<Vec<RankedTerm>>> {
    if n_feats == 0 {
        return Err(PipelineError::InvalidConfig {
            name: "n_feats",
            message: "must be at least 1".to_string(),
        });
    }
    debug_assert_eq!(matrix.n_docs(), labels.len());
    debug_assert_eq!(matrix.n_terms(), vocabulary.len());

    let mut result = Vec::with_capacity(k);
    for label in 0..k {
        let members: Vec<&Vec<f64>> = matrix
            .rows()
            .iter()
            .zip(labels.iter())
            .filter(|(_, &l)| l == label)
            .map(|(row, _)| row)
            .collect();

        if members.is_empty() {
            result.push(Vec::new());
            continue;
        }

        let mut means = vec![0.0; vocabulary.len()];
        for row in &members {
            for (m, w) in means.iter_mut().zip(row.iter()) {
                *m += w;
            }
        }
        for m in &mut means {
            *m /= members.len() as f64;
        }

        let mut order: Vec<usize> = (0..vocabulary.len()).collect();
        order.sort_by(|&a, &b| {
            means[b]
                .partial_cmp(&means[a])
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.cmp(&b))
        });

        result.push(
            order
                .into_iter()
                .take(n_feats)
                .map(|index| RankedTerm {
                    term: vocabulary[index].clone(),
                    index,
                    score: means[index],
                })
                .collect(),
        );
    }
    Ok(result)
}
