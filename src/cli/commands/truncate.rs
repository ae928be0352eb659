use anyhow::{Context, Result};
use colored::Colorize;
use cssmend::repair::TruncateOutcome;
use serde::Serialize;
use std::path::Path;

use super::{build_mender, print_json, report_dropped};
use crate::cli::GlobalOpts;

#[derive(Serialize)]
struct FailureReport {
    status: &'static str,
    message: String,
}

/// Failures are printed, never propagated: this command always exits cleanly.
pub fn handle(
    global: &GlobalOpts,
    target: &Path,
    replacement: &Path,
    markers: Vec<String>,
) -> Result<()> {
    if let Err(err) = run(global, target, replacement, markers) {
        tracing::debug!(error = ?err, "truncate failed");
        let message = format!("{:#}", err);
        if global.json {
            print_json(&FailureReport {
                status: "error",
                message,
            })?;
        } else {
            println!("Error: {}", message);
        }
    }
    Ok(())
}

fn run(global: &GlobalOpts, target: &Path, replacement: &Path, markers: Vec<String>) -> Result<()> {
    let mender = build_mender(global, markers, None, None)?;
    let plan = mender.scan(target)?;

    if !global.json {
        report_dropped(target, plan.dropped_bytes());
        match plan.outcome() {
            TruncateOutcome::MarkerFound { line, .. } => {
                println!("{} Found corruption at line {}. Truncating...", "→".bright_green(), line);
            }
            TruncateOutcome::MarkerNotFound => {
                println!("{} No corruption marker found. Appending to end.", "→".bright_yellow());
            }
        }
    }

    let report = plan
        .apply(replacement, &mender.config().truncate.separator)
        .with_context(|| format!("Failed to repair {}", target.display()))?;

    if global.json {
        print_json(&report)?;
    } else {
        let name = target
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| target.display().to_string());
        println!("{} Successfully fixed {}", "✓".bright_green(), name);
    }

    Ok(())
}
