// Silhouette score: clustering quality for the diagnostic sweep.
//
// For each document: a = mean distance to same-cluster peers, b = mean
// distance to the nearest other cluster's members, s = (b - a) / max(a, b).
// Documents in singleton clusters score 0 by convention.

use super::euclidean;

/// Mean silhouette score over all documents.
///
/// `labels[i]` must lie in `[0, k)`. Returns 0.0 for degenerate inputs
/// (fewer than two documents, or a single non-empty cluster).
pub fn mean_silhouette(data: &[Vec<f64>], labels: &[usize], k: usize) -> f64 {
    debug_assert_eq!(data.len(), labels.len());
    let n = data.len();
    if n < 2 {
        return 0.0;
    }

    let mut members: Vec<Vec<usize>> = vec![Vec::new(); k];
    for (i, &label) in labels.iter().enumerate() {
        members[label].push(i);
    }
    if members.iter().filter(|m| !m.is_empty()).count() < 2 {
        return 0.0;
    }

    let mut total = 0.0;
    for (i, point) in data.iter().enumerate() {
        let own = &members[labels[i]];
        if own.len() <= 1 {
            continue; // singleton scores 0
        }

        let a = own
            .iter()
            .filter(|&&j| j != i)
            .map(|&j| euclidean(point, &data[j]))
            .sum::<f64>()
            / (own.len() - 1) as f64;

        let b = members
            .iter()
            .enumerate()
            .filter(|(label, m)| *label != labels[i] && !m.is_empty())
            .map(|(_, m)| {
                m.iter().map(|&j| euclidean(point, &data[j])).sum::<f64>() / m.len() as f64
            })
            .fold(f64::INFINITY, f64::min);

        let denom = a.max(b);
        if denom > 0.0 {
            total += (b - a) / denom;
        }
    }

    total / n as f64
}
