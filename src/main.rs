use std::fs::File;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use prospectus::config::Config;
use prospectus::{ingest, output, pipeline};

/// Prospectus: interest clustering for course catalogs.
///
/// Groups course descriptions into interest clusters by their salient
/// vocabulary and ranks the academic programs associated with each
/// cluster.
#[derive(Parser)]
#[command(name = "prospectus", version, about)]
struct Cli {
    /// Course catalog CSV ("Description" and "Program" columns)
    #[arg(long, global = true)]
    input: Option<String>,

    /// Directory with course_prefixes.txt and other_words.txt
    #[arg(long, global = true)]
    stopwords_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the production pipeline at a fixed cluster count
    Cluster {
        /// Number of interest clusters
        #[arg(long)]
        k: Option<usize>,

        /// Top defining terms per cluster
        #[arg(long)]
        n_feats: Option<usize>,

        /// JSON word → [course id] map
        #[arg(long)]
        word_courses: Option<String>,

        /// JSON course id → [program name] map
        #[arg(long)]
        course_programs: Option<String>,

        /// Apply Snowball stemming before lemmatization
        #[arg(long)]
        stemming: bool,

        /// Write the interest clusters as JSON
        #[arg(long)]
        json: Option<PathBuf>,

        /// Write the centroid table as CSV for visualization tooling
        #[arg(long)]
        centroids: Option<PathBuf>,
    },

    /// Diagnostic silhouette sweep over candidate cluster counts
    Sweep {
        /// Largest candidate k
        #[arg(long)]
        max_k: Option<usize>,

        /// Stride between candidates, starting at k = 2
        #[arg(long)]
        stride: Option<usize>,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("prospectus=info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = Config::load()?;
    if let Some(input) = cli.input {
        config.catalog_path = input;
    }
    if let Some(dir) = cli.stopwords_dir {
        config.stopwords_dir = dir;
    }

    match cli.command {
        Commands::Cluster {
            k,
            n_feats,
            word_courses,
            course_programs,
            stemming,
            json,
            centroids,
        } => {
            if let Some(k) = k {
                config.cluster.k = k;
            }
            if let Some(n_feats) = n_feats {
                config.cluster.n_feats = n_feats;
            }
            if stemming {
                config.cluster.stemming = true;
            }
            if let Some(path) = word_courses {
                config.word_course_path = path;
            }
            if let Some(path) = course_programs {
                config.course_program_path = path;
            }

            let records = ingest::load_catalog(config.catalog_path.as_ref())?;
            let stoplists = prospectus::text::Stoplists::load(&config.stopwords_dir)?;
            let word_course = ingest::load_word_course_map(config.word_course_path.as_ref())?;
            let course_program =
                ingest::load_course_program_map(config.course_program_path.as_ref())?;

            println!(
                "Clustering {} course descriptions into {} interest clusters...",
                records.len(),
                config.cluster.k
            );

            let result = pipeline::run(
                &records,
                &stoplists,
                &word_course,
                &course_program,
                &config.cluster,
            )?;

            output::terminal::display_clusters(&result.clusters, records.len());

            if let Some(path) = json {
                serde_json::to_writer_pretty(File::create(&path)?, &result.clusters)?;
                info!(path = %path.display(), "Cluster JSON written");
                println!("{}", format!("Clusters saved to: {}", path.display()).bold());
            }
            if let Some(path) = centroids {
                output::centroids::write_csv(&path, &result.centroids, &result.vocabulary)?;
                println!(
                    "{}",
                    format!("Centroid table saved to: {}", path.display()).bold()
                );
            }
        }

        Commands::Sweep { max_k, stride } => {
            if let Some(max_k) = max_k {
                config.sweep.max_k = max_k;
            }
            if let Some(stride) = stride {
                config.sweep.stride = stride;
            }

            let records = ingest::load_catalog(config.catalog_path.as_ref())?;
            let stoplists = prospectus::text::Stoplists::load(&config.stopwords_dir)?;

            println!(
                "Sweeping candidate cluster counts 2..={} (stride {})...",
                config.sweep.max_k, config.sweep.stride
            );

            let report =
                pipeline::sweep::run(&records, &stoplists, &config.cluster, &config.sweep)?;
            output::terminal::display_sweep(&report);
        }
    }

    Ok(())
}
