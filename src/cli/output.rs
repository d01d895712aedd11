//! CLI output: error mapping and run summary.

use crate::bundle::RestructureReport;
use crate::error::BundleError;
use std::fmt::Write;

/// Map domain errors to a string for CLI output.
pub fn map_error(e: &BundleError) -> String {
    format!("pagebundle: {}", e)
}

/// Human-readable summary of a completed run.
pub fn format_summary(report: &RestructureReport) -> String {
    let mut out = format!(
        "Restructured {} into {}: {} bundle(s) from {} director{}",
        report.source_root.display(),
        report.destination_root.display(),
        report.distinct_bundles(),
        report.directories_visited,
        if report.directories_visited == 1 { "y" } else { "ies" },
    );

    if !report.index_merges.is_empty() {
        let _ = write!(
            out,
            "\n  index-like files merged: {} (destination index restored)",
            report.index_merges.len()
        );
    }
    for collision in &report.collisions {
        let _ = write!(
            out,
            "\n  collision on '{}': {} overwritten by {}",
            collision.stem.to_string_lossy(),
            collision.first.display(),
            collision.second.display()
        );
    }
    for skipped in &report.skipped_invalid_stem {
        let _ = write!(out, "\n  skipped (invalid stem): {}", skipped.display());
    }

    out
}
