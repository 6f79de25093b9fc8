// Centroid table export for visualization collaborators.
//
// Long format: one `cluster,term,weight` row per centroid coordinate,
// ready for word-cloud or bar-chart tooling downstream.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

/// Write the k × |vocabulary| centroid table as CSV.
pub fn write_csv(path: &Path, centroids: &[Vec<f64>], vocabulary: &[String]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating centroid table {}", path.display()))?;
    writer.write_record(["cluster", "term", "weight"])?;

    for (cluster, centroid) in centroids.iter().enumerate() {
        for (term, weight) in vocabulary.iter().zip(centroid.iter()) {
            writer.write_record([
                cluster.to_string(),
                term.clone(),
                format!("{weight}"),
            ])?;
        }
    }
    writer.flush()?;
    info!(
        clusters = centroids.len(),
        terms = vocabulary.len(),
        path = %path.display(),
        "Centroid table written"
    );
    Ok(())
}
