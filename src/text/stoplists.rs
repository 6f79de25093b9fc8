// Stopword resources: one language list plus two domain stoplists.
//
// The domain lists are line-delimited UTF-8 files, one token per line:
// a "course prefix" list (department codes that leak into descriptions)
// and an "other noise words" list (catalog boilerplate).

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{PipelineError, Result};

/// The three token lists consulted during normalization.
#[derive(Debug, Clone)]
pub struct Stoplists {
    /// Language stopwords ("the", "and", ...).
    pub language: HashSet<String>,
    /// Department/course prefixes ("cs", "engl", ...).
    pub course_prefixes: HashSet<String>,
    /// Catalog boilerplate ("prerequisite", "semester", ...).
    pub other_words: HashSet<String>,
}

impl Stoplists {
    /// Load the domain stoplists from `dir/course_prefixes.txt` and
    /// `dir/other_words.txt`; the language list comes from the
    /// `stop-words` crate.
    pub fn load(dir: &Path) -> Result<Self> {
        Ok(Self {
            language: english_stopwords(),
            course_prefixes: read_list(&dir.join("course_prefixes.txt"))?,
            other_words: read_list(&dir.join("other_words.txt"))?,
        })
    }

    /// Build stoplists from in-memory token lists. Used by tests and by
    /// embedders that supply their own resources.
    pub fn from_parts<I, J>(course_prefixes: I, other_words: J) -> Self
    where
        I: IntoIterator<Item = String>,
        J: IntoIterator<Item = String>,
    {
        Self {
            language: english_stopwords(),
            course_prefixes: course_prefixes.into_iter().collect(),
            other_words: other_words.into_iter().collect(),
        }
    }
}

fn english_stopwords() -> HashSet<String> {
    stop_words::get(stop_words::LANGUAGE::English)
        .into_iter()
        .collect()
}

fn read_list(path: &Path) -> Result<HashSet<String>> {
    let contents = fs::read_to_string(path).map_err(|source| PipelineError::StoplistUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
