// InterestCluster: a cluster's vocabulary plus its program ranking.
//
// Each cluster owns an independent ranking map with exactly one entry
// per catalog program, zero-initialized by one shared constructor.
// Counts are incremented during the association step and the relative
// counts are computed once at the end, never incrementally.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{CourseProgramMap, ProgramCatalog, WordCourseMap};

/// How strongly a program is associated with a cluster's vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgramScore {
    /// Raw association count.
    pub count: u32,
    /// `count / Σ counts` within this cluster, or 0 when the sum is 0.
    pub relative_count: f64,
}

/// A group of documents sharing salient vocabulary, annotated with a
/// ranked list of associated programs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterestCluster {
    /// Cluster id in `[0, k)`.
    pub id: usize,
    /// Top defining terms, highest mean weight first.
    pub terms: Vec<String>,
    /// program name → association score; one entry per catalog program.
    pub program_ranking: BTreeMap<String, ProgramScore>,
}

/// One zero-valued ranking entry per catalog program. Every cluster gets
/// its own copy from here; no shared mutable map.
pub fn zero_ranking(catalog: &ProgramCatalog) -> BTreeMap<String, ProgramScore> {
    catalog
        .iter()
        .map(|program| (program.clone(), ProgramScore::default()))
        .collect()
}

impl InterestCluster {
    pub fn new(id: usize, terms: Vec<String>, catalog: &ProgramCatalog) -> Self {
        Self {
            id,
            terms,
            program_ranking: zero_ranking(catalog),
        }
    }

    /// Programs sorted by descending count (ties alphabetical, from the
    /// map order). For reporting.
    pub fn ranked_programs(&self) -> Vec<(&str, &ProgramScore)> {
        let mut ranked: Vec<(&str, &ProgramScore)> = self
            .program_ranking
            .iter()
            .map(|(name, score)| (name.as_str(), score))
            .collect();
        ranked.sort_by(|a, b| b.1.count.cmp(&a.1.count));
        ranked
    }
}

/// Association step: for every top term of every cluster, walk
/// word → courses → programs and increment each matched program's count.
/// Words absent from the word map and courses absent from the program
/// map are expected conditions and are skipped silently.
pub fn associate_programs(
    clusters: &mut [InterestCluster],
    word_course: &WordCourseMap,
    course_program: &CourseProgramMap,
) {
    for cluster in clusters.iter_mut() {
        for word in &cluster.terms {
            let Some(courses) = word_course.get(word) else {
                continue;
            };
            for course in courses {
                let Some(programs) = course_program.get(course) else {
                    continue;
                };
                for program in programs {
                    if let Some(score) = cluster.program_ranking.get_mut(program) {
                        score.count += 1;
                    }
                }
            }
        }
    }
}

/// Finalization: compute every cluster's relative counts, independently
/// per cluster, after all association is done.
pub fn finalize_rankings(clusters: &mut [InterestCluster]) {
    for cluster in clusters.iter_mut() {
        let total: u32 = cluster.program_ranking.values().map(|s| s.count).sum();
        for score in cluster.program_ranking.values_mut() {
            score.relative_count = if total > 0 {
                f64::from(score.count) / f64::from(total)
            } else {
                0.0
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn catalog(programs: &[&str]) -> ProgramCatalog {
        programs.iter().map(|p| p.to_string()).collect()
    }

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn ranking_map_covers_every_catalog_program() {
        let catalog = catalog(&["Math", "History", "Computer Science"]);
        let cluster = InterestCluster::new(0, vec!["algebra".to_string()], &catalog);
        assert_eq!(cluster.program_ranking.len(), 3);
        assert!(cluster
            .program_ranking
            .values()
            .all(|s| s.count == 0 && s.relative_count == 0.0));
    }

    #[test]
    fn clusters_do_not_share_ranking_maps() {
        let catalog = catalog(&["Math"]);
        let mut a = InterestCluster::new(0, vec![], &catalog);
        let b = InterestCluster::new(1, vec![], &catalog);
        a.program_ranking.get_mut("Math").unwrap().count = 5;
        assert_eq!(b.program_ranking["Math"].count, 0);
    }

    #[test]
    fn association_counts_one_per_course_program_pair() {
        let catalog = catalog(&["Computer Science", "Math", "History"]);
        let word_course: WordCourseMap =
            [("algorithm".to_string(), set(&["CS101"]))].into_iter().collect();
        let course_program: CourseProgramMap =
            [("CS101".to_string(), set(&["Computer Science", "Math"]))]
                .into_iter()
                .collect();

        let mut clusters = vec![InterestCluster::new(
            0,
            vec!["algorithm".to_string(), "unknown".to_string()],
            &catalog,
        )];
        associate_programs(&mut clusters, &word_course, &course_program);
        finalize_rankings(&mut clusters);

        let ranking = &clusters[0].program_ranking;
        assert_eq!(ranking["Computer Science"].count, 1);
        assert_eq!(ranking["Math"].count, 1);
        assert_eq!(ranking["History"].count, 0);
        assert!((ranking["Computer Science"].relative_count - 0.5).abs() < 1e-12);
        assert!((ranking["Math"].relative_count - 0.5).abs() < 1e-12);
        assert_eq!(ranking["History"].relative_count, 0.0);
    }

    #[test]
    fn missing_course_is_skipped_silently() {
        let catalog = catalog(&["Math"]);
        let word_course: WordCourseMap =
            [("algebra".to_string(), set(&["MATH200", "GHOST999"]))]
                .into_iter()
                .collect();
        let course_program: CourseProgramMap =
            [("MATH200".to_string(), set(&["Math"]))].into_iter().collect();

        let mut clusters = vec![InterestCluster::new(0, vec!["algebra".to_string()], &catalog)];
        associate_programs(&mut clusters, &word_course, &course_program);
        assert_eq!(clusters[0].program_ranking["Math"].count, 1);
    }

    #[test]
    fn zero_total_finalizes_to_all_zero() {
        let catalog = catalog(&["Math", "History"]);
        let mut clusters = vec![InterestCluster::new(0, vec!["nomatch".to_string()], &catalog)];
        associate_programs(&mut clusters, &WordCourseMap::new(), &CourseProgramMap::new());
        finalize_rankings(&mut clusters);
        assert!(clusters[0]
            .program_ranking
            .values()
            .all(|s| s.count == 0 && s.relative_count == 0.0));
    }

    #[test]
    fn relative_counts_sum_to_one_when_total_positive() {
        let catalog = catalog(&["A", "B", "C"]);
        let word_course: WordCourseMap = [
            ("x".to_string(), set(&["C1", "C2"])),
            ("y".to_string(), set(&["C2"])),
        ]
        .into_iter()
        .collect();
        let course_program: CourseProgramMap = [
            ("C1".to_string(), set(&["A"])),
            ("C2".to_string(), set(&["A", "B"])),
        ]
        .into_iter()
        .collect();

        let mut clusters = vec![InterestCluster::new(
            0,
            vec!["x".to_string(), "y".to_string()],
            &catalog,
        )];
        associate_programs(&mut clusters, &word_course, &course_program);
        finalize_rankings(&mut clusters);

        // x: C1→A, C2→{A,B}; y: C2→{A,B} ⇒ A=3, B=2, C=0
        let ranking = &clusters[0].program_ranking;
        assert_eq!(ranking["A"].count, 3);
        assert_eq!(ranking["B"].count, 2);
        let sum: f64 = ranking.values().map(|s| s.relative_count).sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn ranked_programs_descend_by_count() {
        let catalog = catalog(&["A", "B", "C"]);
        let mut cluster = InterestCluster::new(0, vec![], &catalog);
        cluster.program_ranking.get_mut("B").unwrap().count = 7;
        cluster.program_ranking.get_mut("C").unwrap().count = 3;
        let ranked = cluster.ranked_programs();
        assert_eq!(ranked[0].0, "B");
        assert_eq!(ranked[1].0, "C");
        assert_eq!(ranked[2].0, "A");
    }
}
