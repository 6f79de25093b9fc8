// Partitional clustering over the feature space.
//
// `Kmeans` is the production engine: k-means++ seeding, seeded random
// restarts, lowest-inertia selection. `silhouette` provides the quality
// score used by the diagnostic sweep in `pipeline::sweep`.

pub mod kmeans;
pub mod silhouette;

pub use kmeans::{Kmeans, KmeansFit};
pub use silhouette::mean_silhouette;

/// Squared Euclidean distance between two equal-length vectors.
#[inline]
pub(crate) fn squared_euclidean(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}

/// Euclidean distance.
#[inline]
pub(crate) fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    squared_euclidean(a, b).sqrt()
}
