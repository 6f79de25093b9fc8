// Colored terminal output for interest clusters and sweep reports.
//
// This module handles all terminal-specific formatting; main.rs
// delegates here after the pipeline returns.

use std::collections::BTreeMap;

use colored::Colorize;

use crate::ranking::InterestCluster;

const BAR_WIDTH: usize = 20;
const PROGRAMS_SHOWN: usize = 5;

/// Display the full interest-cluster report.
pub fn display_clusters(clusters: &[InterestCluster], n_docs: usize) {
    println!(
        "\n{}",
        format!(
            "=== Interest Clusters ({} clusters over {} courses) ===",
            clusters.len(),
            n_docs
        )
        .bold()
    );

    for cluster in clusters {
        println!();
        if cluster.terms.is_empty() {
            println!(
                "  {} {}",
                format!("Cluster {}", cluster.id).bold(),
                "(no member documents)".dimmed()
            );
            continue;
        }

        println!("  {}", format!("Cluster {}", cluster.id).bold());
        println!("    Terms: {}", cluster.terms.join(", ").cyan());

        let ranked = cluster.ranked_programs();
        let shown = ranked
            .iter()
            .take(PROGRAMS_SHOWN)
            .filter(|(_, score)| score.count > 0);
        let mut any = false;
        for (program, score) in shown {
            any = true;
            let filled = (score.relative_count * BAR_WIDTH as f64).round() as usize;
            let bar = format!(
                "[{}{}]",
                "=".repeat(filled.min(BAR_WIDTH)),
                " ".repeat(BAR_WIDTH.saturating_sub(filled))
            );
            let colored_bar = if score.relative_count >= 0.25 {
                bar.bright_green()
            } else if score.relative_count >= 0.10 {
                bar.bright_yellow()
            } else {
                bar.bright_blue()
            };
            println!(
                "    {:<32} {} {:>4}  ({:.2})",
                program, colored_bar, score.count, score.relative_count
            );
        }
        if !any {
            println!("    {}", "No associated programs".dimmed());
        }
    }
    println!();
}

/// Display the candidate-k → silhouette report from the diagnostic sweep.
pub fn display_sweep(report: &BTreeMap<usize, f64>) {
    if report.is_empty() {
        println!("No sweep candidates were scored (corpus too small?).");
        return;
    }

    println!("\n{}", "=== Silhouette Sweep ===".bold());
    println!();

    let best_k = report
        .iter()
        .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(&k, _)| k);

    for (&k, &score) in report {
        // Silhouette lies in [-1, 1]; show the positive half as a bar
        let filled = (score.max(0.0) * BAR_WIDTH as f64).round() as usize;
        let bar = format!(
            "[{}{}]",
            "=".repeat(filled.min(BAR_WIDTH)),
            " ".repeat(BAR_WIDTH.saturating_sub(filled))
        );
        let marker = if Some(k) == best_k {
            "  <- best".green().to_string()
        } else {
            String::new()
        };
        println!("  k = {:>3}  {} {:+.4}{}", k, bar.bright_blue(), score, marker);
    }
    println!(
        "\n{}",
        "Diagnostic only. Set the operating k explicitly via --k or PROSPECTUS_K.".dimmed()
    );
}
