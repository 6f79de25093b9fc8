// The clustering pipeline: a single-threaded, strictly staged batch.
//
// normalization → vectorization → clustering → ranking → association
// run in fixed order; each stage consumes the complete output of the
// previous one. All data is in-memory: corpus, stoplists and maps are
// supplied by collaborators before the run, results are returned as
// values.

pub mod sweep;

use tracing::info;

use crate::cluster::Kmeans;
use crate::config::ClusterConfig;
use crate::error::{PipelineError, Result};
use crate::features::{FeatureMatrix, FittedVectorizer, TfidfVectorizer};
use crate::ranking::{
    self, CourseProgramMap, InterestCluster, ProgramCatalog, WordCourseMap,
};
use crate::text::{Stoplists, TextNormalizer};

/// One corpus record: a free-text description and its program label.
#[derive(Debug, Clone)]
pub struct CourseRecord {
    pub description: String,
    pub program: String,
}

/// Everything the production run hands back to reporting collaborators.
#[derive(Debug)]
pub struct PipelineOutput {
    /// Interest clusters ordered by id.
    pub clusters: Vec<InterestCluster>,
    /// Per-document cluster assignment, in input order.
    pub labels: Vec<usize>,
    /// k × |vocabulary| centroid table, for visualization collaborators.
    pub centroids: Vec<Vec<f64>>,
    /// The fitted vocabulary backing the centroid columns.
    pub vocabulary: Vec<String>,
}

/// Normalize and vectorize the corpus. Shared by the production run and
/// the diagnostic sweep so both see identical features.
pub fn prepare(
    records: &[CourseRecord],
    stoplists: &Stoplists,
    config: &ClusterConfig,
) -> Result<(FittedVectorizer, FeatureMatrix)> {
    if records.is_empty() {
        return Err(PipelineError::EmptyCorpus);
    }

    let normalizer =
        TextNormalizer::new(stoplists.clone()).with_stemming(config.stemming);
    let raw: Vec<String> = records.iter().map(|r| r.description.clone()).collect();
    let normalized = normalizer.normalize_corpus(&raw);
    info!(documents = normalized.len(), "Corpus normalized");

    let vectorizer = TfidfVectorizer::new(config.min_df, config.max_df);
    let (fitted, matrix) = vectorizer.fit_transform(&normalized)?;
    info!(
        documents = matrix.n_docs(),
        terms = matrix.n_terms(),
        "Feature matrix built"
    );
    Ok((fitted, matrix))
}

/// Run the full production pipeline at the configured cluster count.
pub fn run(
    records: &[CourseRecord],
    stoplists: &Stoplists,
    word_course: &WordCourseMap,
    course_program: &CourseProgramMap,
    config: &ClusterConfig,
) -> Result<PipelineOutput> {
    config.validate()?;
    let (fitted, matrix) = prepare(records, stoplists, config)?;

    let kmeans = Kmeans {
        n_clusters: config.k,
        n_restarts: config.n_restarts,
        max_iter: config.max_iter,
        tol: config.tol,
        seed: config.seed,
    };
    let fit = kmeans.fit(matrix.rows())?;
    info!(
        k = config.k,
        inertia = fit.inertia,
        iterations = fit.n_iter,
        "Clustering converged"
    );

    let ranked = ranking::top_terms_per_cluster(
        &matrix,
        &fit.labels,
        fitted.vocabulary(),
        config.k,
        config.n_feats,
    )?;

    // The catalog is the distinct set of program labels in the corpus
    let catalog: ProgramCatalog = records.iter().map(|r| r.program.clone()).collect();

    let mut clusters: Vec<InterestCluster> = ranked
        .into_iter()
        .enumerate()
        .map(|(id, terms)| {
            InterestCluster::new(id, terms.into_iter().map(|t| t.term).collect(), &catalog)
        })
        .collect();

    ranking::interest::associate_programs(&mut clusters, word_course, course_program);
    ranking::interest::finalize_rankings(&mut clusters);
    info!(clusters = clusters.len(), programs = catalog.len(), "Programs ranked");

    Ok(PipelineOutput {
        clusters,
        labels: fit.labels,
        centroids: fit.centroids,
        vocabulary: fitted.vocabulary().to_vec(),
    })
}
