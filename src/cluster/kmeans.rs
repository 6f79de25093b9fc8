// K-means with k-means++ seeding and independent random restarts.
//
// Each restart derives its RNG from the configured seed plus the restart
// index, so a fixed seed reproduces the exact same partition. The
// restart with the lowest final inertia wins; the comparison is strict,
// so the earliest-computed restart breaks ties.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::squared_euclidean;
use crate::error::{PipelineError, Result};

/// The production cluster engine.
#[derive(Debug, Clone)]
pub struct Kmeans {
    /// Number of clusters.
    pub n_clusters: usize,
    /// Independent restarts; best inertia wins.
    pub n_restarts: usize,
    /// Iteration cap per restart.
    pub max_iter: usize,
    /// Convergence tolerance on total squared centroid movement.
    pub tol: f64,
    /// Base RNG seed.
    pub seed: u64,
}

impl Kmeans {
    pub fn new(n_clusters: usize) -> Self {
        Self {
            n_clusters,
            n_restarts: 10,
            max_iter: 300,
            tol: 1e-4,
            seed: 0,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// A fitted partition: per-document labels in `[0, k)` and the
/// k × n_terms centroid matrix.
#[derive(Debug, Clone)]
pub struct KmeansFit {
    pub labels: Vec<usize>,
    pub centroids: Vec<Vec<f64>>,
    /// Sum of squared distances to assigned centroids.
    pub inertia: f64,
    /// Iterations run by the winning restart.
    pub n_iter: usize,
}

impl Kmeans {
    /// Partition `data` into `n_clusters` groups.
    ///
    /// Fails fast when the cluster count is incompatible with the corpus
    /// (`k <= 1` or `k >= n_docs`), since a degenerate partition would make
    /// every downstream ranking meaningless.
    pub fn fit(&self, data: &[Vec<f64>]) -> Result<KmeansFit> {
        let n = data.len();
        if self.n_clusters <= 1 || self.n_clusters >= n {
            return Err(PipelineError::InvalidClusterCount {
                requested: self.n_clusters,
                n_docs: n,
            });
        }
        if self.n_restarts == 0 {
            return Err(PipelineError::InvalidConfig {
                name: "n_restarts",
                message: "must be at least 1".to_string(),
            });
        }

        let mut best: Option<KmeansFit> = None;
        for restart in 0..self.n_restarts {
            let mut rng = StdRng::seed_from_u64(self.seed.wrapping_add(restart as u64));
            let fit = self.run_once(data, &mut rng);
            debug!(restart, inertia = fit.inertia, "K-means restart finished");
            // Strict comparison: the earliest restart keeps ties
            let better = best
                .as_ref()
                .map(|b| fit.inertia < b.inertia)
                .unwrap_or(true);
            if better {
                best = Some(fit);
            }
        }
        // n_restarts >= 1 is checked above, so best is always set
        Ok(best.expect("at least one restart"))
    }

    fn run_once(&self, data: &[Vec<f64>], rng: &mut StdRng) -> KmeansFit {
        let k = self.n_clusters;
        let dim = data[0].len();
        let mut centroids = plus_plus_seed(data, k, rng);
        let mut labels = vec![0usize; data.len()];
        let mut n_iter = 0;

        for iter in 0..self.max_iter {
            n_iter = iter + 1;

            for (i, point) in data.iter().enumerate() {
                labels[i] = nearest(point, &centroids).0;
            }

            // Recompute centroids as member means; empty clusters keep
            // their previous position
            let mut sums = vec![vec![0.0; dim]; k];
            let mut counts = vec![0usize; k];
            for (point, &label) in data.iter().zip(labels.iter()) {
                counts[label] += 1;
                for (s, v) in sums[label].iter_mut().zip(point.iter()) {
                    *s += v;
                }
            }

            let mut shift = 0.0;
            for (c, (sum, &count)) in centroids.iter_mut().zip(sums.iter().zip(&counts)) {
                if count == 0 {
                    continue;
                }
                let mean: Vec<f64> = sum.iter().map(|s| s / count as f64).collect();
                shift += squared_euclidean(c, &mean);
                *c = mean;
            }

            if shift <= self.tol * self.tol {
                break;
            }
        }

        // Final assignment against the converged centroids
        let mut inertia = 0.0;
        for (i, point) in data.iter().enumerate() {
            let (label, d2) = nearest(point, &centroids);
            labels[i] = label;
            inertia += d2;
        }

        KmeansFit {
            labels,
            centroids,
            inertia,
            n_iter,
        }
    }
}

/// Nearest centroid by squared distance; ties go to the lowest index.
fn nearest(point: &[f64], centroids: &[Vec<f64>]) -> (usize, f64) {
    let mut best = 0;
    let mut best_d2 = f64::INFINITY;
    for (j, centroid) in centroids.iter().enumerate() {
        let d2 = squared_euclidean(point, centroid);
        if d2 < best_d2 {
            best_d2 = d2;
            best = j;
        }
    }
    (best, best_d2)
}

/// K-means++ seeding: the first centroid is uniform, each later one is
/// drawn with probability proportional to its squared distance from the
/// nearest already-chosen centroid.
fn plus_plus_seed(data: &[Vec<f64>], k: usize, rng: &mut StdRng) -> Vec<Vec<f64>> {
    let mut centroids: Vec<Vec<f64>> = Vec::with_capacity(k);
    centroids.push(data[rng.random_range(0..data.len())].clone());

    let mut d2: Vec<f64> = data
        .iter()
        .map(|p| squared_euclidean(p, &centroids[0]))
        .collect();

    while centroids.len() < k {
        let total: f64 = d2.iter().sum();
        let next = if total > 0.0 {
            let mut target = rng.random::<f64>() * total;
            let mut chosen = data.len() - 1;
            for (i, &w) in d2.iter().enumerate() {
                target -= w;
                if target <= 0.0 {
                    chosen = i;
                    break;
                }
            }
            chosen
        } else {
            // All remaining points coincide with a centroid
            rng.random_range(0..data.len())
        };

        centroids.push(data[next].clone());
        for (i, point) in data.iter().enumerate() {
            let d = squared_euclidean(point, centroids.last().expect("just pushed"));
            if d < d2[i] {
                d2[i] = d;
            }
        }
    }
    centroids
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_blobs() -> Vec<Vec<f64>> {
        vec![
            vec![0.0, 0.0],
            vec![0.1, 0.1],
            vec![0.2, 0.0],
            vec![10.0, 10.0],
            vec![10.1, 10.1],
            vec![10.2, 10.0],
        ]
    }

    #[test]
    fn rejects_degenerate_cluster_counts() {
        let data = two_blobs();
        for k in [0, 1, 6, 7] {
            let err = Kmeans::new(k).fit(&data).unwrap_err();
            assert!(
                matches!(err, PipelineError::InvalidClusterCount { requested, n_docs }
                    if requested == k && n_docs == 6),
                "k={k} should be rejected"
            );
        }
    }

    #[test]
    fn labels_lie_in_range_and_cover_both_blobs() {
        let data = two_blobs();
        let fit = Kmeans::new(2).fit(&data).unwrap();
        assert_eq!(fit.labels.len(), 6);
        assert!(fit.labels.iter().all(|&l| l < 2));
        assert_eq!(fit.labels[0], fit.labels[1]);
        assert_eq!(fit.labels[0], fit.labels[2]);
        assert_eq!(fit.labels[3], fit.labels[4]);
        assert_ne!(fit.labels[0], fit.labels[3]);
    }

    #[test]
    fn fixed_seed_reproduces_partition() {
        let data = two_blobs();
        let a = Kmeans::new(2).with_seed(7).fit(&data).unwrap();
        let b = Kmeans::new(2).with_seed(7).fit(&data).unwrap();
        assert_eq!(a.labels, b.labels);
        assert_eq!(a.inertia, b.inertia);
        assert_eq!(a.centroids, b.centroids);
    }

    #[test]
    fn centroid_matrix_has_k_rows_of_feature_width() {
        let data = two_blobs();
        let fit = Kmeans::new(3).fit(&data).unwrap();
        assert_eq!(fit.centroids.len(), 3);
        assert!(fit.centroids.iter().all(|c| c.len() == 2));
    }

    #[test]
    fn separated_blobs_reach_low_inertia() {
        let data = two_blobs();
        let fit = Kmeans::new(2).fit(&data).unwrap();
        // Optimal partition has inertia ~0.08; anything under 1.0 means
        // the blobs were not split down the middle
        assert!(fit.inertia < 1.0, "inertia {}", fit.inertia);
    }
}
