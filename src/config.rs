use std::env;
use std::path::PathBuf;

use anyhow::Result;

use crate::error::PipelineError;

/// Parameters for the production clustering run.
///
/// The operating cluster count is fixed by configuration; the silhouette
/// sweep is a diagnostic and never feeds back into this value.
#[derive(Debug, Clone)]
pub struct ClusterConfig {
    /// Number of interest clusters to produce.
    pub k: usize,
    /// Top defining terms to keep per cluster.
    pub n_feats: usize,
    /// Minimum document frequency (absolute) for a vocabulary term.
    pub min_df: usize,
    /// Maximum document frequency (fraction of corpus size) for a term.
    pub max_df: f64,
    /// Independent k-means restarts; the lowest-inertia restart wins.
    pub n_restarts: usize,
    /// Iteration cap per restart.
    pub max_iter: usize,
    /// Centroid-movement convergence tolerance.
    pub tol: f64,
    /// RNG seed for reproducible k-means++ seeding.
    pub seed: u64,
    /// Apply Snowball stemming before lemmatization. The original tool
    /// carried this step disabled; it stays off unless asked for.
    pub stemming: bool,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            k: 12,
            n_feats: 8,
            min_df: 5,
            max_df: 0.95,
            n_restarts: 10,
            max_iter: 300,
            tol: 1e-4,
            seed: 0,
            stemming: false,
        }
    }
}

impl ClusterConfig {
    /// Check parameter ranges that don't depend on the corpus size.
    /// The `k` vs. document-count bound is checked by the cluster engine,
    /// which is the first place the corpus size is known.
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.n_feats == 0 {
            return Err(PipelineError::InvalidConfig {
                name: "n_feats",
                message: "must be at least 1".to_string(),
            });
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
        if self.n_restarts == 0 {
            return Err(PipelineError::InvalidConfig {
                name: "n_restarts",
                message: "must be at least 1".to_string(),
            });
        }
        if self.max_iter == 0 {
            return Err(PipelineError::InvalidConfig {
                name: "max_iter",
                message: "must be at least 1".to_string(),
            });
        }
        if !(self.tol >= 0.0) {
            return Err(PipelineError::InvalidConfig {
                name: "tol",
                message: format!("must be non-negative, got {}", self.tol),
            });
        }
        Ok(())
    }
}

/// Parameters for the diagnostic silhouette sweep.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Largest candidate cluster count to try.
    pub max_k: usize,
    /// Stride between candidate counts, starting at k = 2.
    pub stride: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            max_k: 100,
            stride: 5,
        }
    }
}

impl SweepConfig {
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.max_k < 2 {
            return Err(PipelineError::InvalidConfig {
                name: "max_k",
                message: "must be at least 2".to_string(),
            });
        }
        if self.stride == 0 {
            return Err(PipelineError::InvalidConfig {
                name: "stride",
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy; CLI
/// flags override whatever is loaded here.
pub struct Config {
    /// Course catalog CSV ("Description" and "Program" columns).
    pub catalog_path: String,
    /// Directory holding course_prefixes.txt and other_words.txt.
    pub stopwords_dir: PathBuf,
    /// JSON word → [course id] map.
    pub word_course_path: String,
    /// JSON course id → [program name] map.
    pub course_program_path: String,
    pub cluster: ClusterConfig,
    pub sweep: SweepConfig,
}

impl Config {
    /// Load configuration from environment variables, falling back to the
    /// defaults the original tool shipped with.
    pub fn load() -> Result<Self> {
        let defaults = ClusterConfig::default();
        let cluster = ClusterConfig {
            k: parse_env("PROSPECTUS_K", defaults.k)?,
            n_feats: parse_env("PROSPECTUS_N_FEATS", defaults.n_feats)?,
            min_df: parse_env("PROSPECTUS_MIN_DF", defaults.min_df)?,
            max_df: parse_env("PROSPECTUS_MAX_DF", defaults.max_df)?,
            n_restarts: parse_env("PROSPECTUS_RESTARTS", defaults.n_restarts)?,
            max_iter: parse_env("PROSPECTUS_MAX_ITER", defaults.max_iter)?,
            tol: parse_env("PROSPECTUS_TOL", defaults.tol)?,
            seed: parse_env("PROSPECTUS_SEED", defaults.seed)?,
            stemming: env::var("PROSPECTUS_STEMMING").as_deref() == Ok("1"),
        };

        let sweep_defaults = SweepConfig::default();
        let sweep = SweepConfig {
            max_k: parse_env("PROSPECTUS_SWEEP_MAX_K", sweep_defaults.max_k)?,
            stride: parse_env("PROSPECTUS_SWEEP_STRIDE", sweep_defaults.stride)?,
        };

        Ok(Self {
            catalog_path: env::var("PROSPECTUS_CATALOG")
                .unwrap_or_else(|_| "course_catalog.csv".to_string()),
            stopwords_dir: env::var("PROSPECTUS_STOPWORDS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("stopwords")),
            word_course_path: env::var("PROSPECTUS_WORD_COURSES")
                .unwrap_or_else(|_| "word_courses.json".to_string()),
            course_program_path: env::var("PROSPECTUS_COURSE_PROGRAMS")
                .unwrap_or_else(|_| "course_programs.json".to_string()),
            cluster,
            sweep,
        })
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, default: T) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid {name}={raw}: {e}")),
        Err(_) => Ok(default),
    }
}
