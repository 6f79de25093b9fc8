// Per-cluster term ranking and program association.

pub mod interest;
pub mod top_terms;

use std::collections::{BTreeSet, HashMap};

pub use interest::{InterestCluster, ProgramScore};
pub use top_terms::{top_terms_per_cluster, RankedTerm};

/// The distinct program names observed across the corpus. Ordered so
/// that zero-initialized ranking maps iterate deterministically.
pub type ProgramCatalog = BTreeSet<String>;

/// word → course identifiers containing that word.
pub type WordCourseMap = HashMap<String, BTreeSet<String>>;

/// course identifier → program names offering that course.
pub type CourseProgramMap = HashMap<String, BTreeSet<String>>;
