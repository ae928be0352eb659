use anyhow::{Context, Result};
use colored::Colorize;
use cssmend::repair::TruncateOutcome;
use std::path::Path;

use super::{build_mender, print_json, report_dropped};
use crate::cli::GlobalOpts;

pub fn handle(global: &GlobalOpts, target: &Path, markers: Vec<String>) -> Result<()> {
    let mender = build_mender(global, markers, None, None)?;
    let report = mender
        .locate(target)
        .with_context(|| format!("Failed to scan {}", target.display()))?;

    if global.json {
        return print_json(&report);
    }

    report_dropped(target, report.dropped_bytes);
    match &report.outcome {
        TruncateOutcome::MarkerFound { line, marker } => {
            println!(
                "{} Corruption begins at line {} of {} (marker {:?})",
                "→".bright_green(),
                line,
                report.total_lines,
                marker
            );
        }
        TruncateOutcome::MarkerNotFound => {
            println!(
                "{} No corruption marker found in {} ({} lines, {} marker(s) checked)",
                "✓".bright_green(),
                target.display(),
                report.total_lines,
                mender.markers().patterns().len()
            );
        }
    }

    Ok(())
}
