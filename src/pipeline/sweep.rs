// Diagnostic silhouette sweep over candidate cluster counts.
//
// Fits the cluster engine at each candidate k and reports the mean
// silhouette score. The report is for a human picking an operating k;
// the production pipeline never consumes it.

use std::collections::BTreeMap;

use tracing::{info, warn};

use crate::cluster::{mean_silhouette, Kmeans};
use crate::config::{ClusterConfig, SweepConfig};
use crate::error::Result;
use crate::pipeline::{prepare, CourseRecord};
use crate::text::Stoplists;

/// Sweep k across `[2, max_k]` with the configured stride and return a
/// candidate-k → mean-silhouette report.
///
/// Candidates incompatible with the corpus size (`k >= n_docs`) are
/// skipped so a generous `max_k` works on small corpora.
pub fn run(
    records: &[CourseRecord],
    stoplists: &Stoplists,
    cluster_config: &ClusterConfig,
    sweep_config: &SweepConfig,
) -> Result<BTreeMap<usize, f64>> {
    cluster_config.validate()?;
    sweep_config.validate()?;
    let (_, matrix) = prepare(records, stoplists, cluster_config)?;
    let data = matrix.rows();

    let mut report = BTreeMap::new();
    for k in (2..=sweep_config.max_k).step_by(sweep_config.stride) {
        if k >= data.len() {
            warn!(k, n_docs = data.len(), "Skipping candidate: too few documents");
            continue;
        }
        let kmeans = Kmeans {
            n_clusters: k,
            n_restarts: cluster_config.n_restarts,
            max_iter: cluster_config.max_iter,
            tol: cluster_config.tol,
            seed: cluster_config.seed,
        };
        let fit = kmeans.fit(data)?;
        let score = mean_silhouette(data, &fit.labels, k);
        info!(k, score, "Silhouette candidate scored");
        report.insert(k, score);
    }
    Ok(report)
}
