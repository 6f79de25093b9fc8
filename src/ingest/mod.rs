// Ingestion collaborators: the CSV course catalog and the precomputed
// word→course / course→program JSON maps.
//
// These sit outside the analytical core; the pipeline itself never
// touches the filesystem. Field problems are typed pipeline errors so a
// broken catalog fails the batch fast instead of clustering garbage.

use std::collections::BTreeSet;
use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

use crate::error::PipelineError;
use crate::pipeline::CourseRecord;
use crate::ranking::{CourseProgramMap, WordCourseMap};

/// CSV column holding the free-text description.
pub const DESCRIPTION: &str = "Description";
/// CSV column holding the program label.
pub const PROGRAM: &str = "Program";

#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Description")]
    description: Option<String>,
    #[serde(rename = "Program")]
    program: Option<String>,
}

/// Load the course catalog from a CSV with "Description" and "Program"
/// columns. A missing or blank field aborts the load.
pub fn load_catalog(path: &Path) -> Result<Vec<CourseRecord>> {
    let file = File::open(path).with_context(|| format!("opening catalog {}", path.display()))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut records = Vec::new();
    for (index, row) in reader.deserialize::<RawRecord>().enumerate() {
        let row = row.with_context(|| format!("reading catalog record {index}"))?;
        let description = non_blank(row.description, index, DESCRIPTION)?;
        let program = non_blank(row.program, index, PROGRAM)?;
        records.push(CourseRecord {
            description,
            program,
        });
    }
    info!(records = records.len(), path = %path.display(), "Catalog loaded");
    Ok(records)
}

fn non_blank(
    value: Option<String>,
    index: usize,
    field: &'static str,
) -> Result<String, PipelineError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(PipelineError::MissingField { index, field }),
    }
}

/// Load the word → course-identifiers map from a JSON object of
/// string → array of strings.
pub fn load_word_course_map(path: &Path) -> Result<WordCourseMap> {
    load_string_set_map(path).context("loading word→course map")
}

/// Load the course identifier → program-names map.
pub fn load_course_program_map(path: &Path) -> Result<CourseProgramMap> {
    load_string_set_map(path).context("loading course→program map")
}

fn load_string_set_map(
    path: &Path,
) -> Result<std::collections::HashMap<String, BTreeSet<String>>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let map = serde_json::from_reader(file)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(map)
}
