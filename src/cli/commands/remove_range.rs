use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

use super::{build_mender, print_json, report_dropped};
use crate::cli::GlobalOpts;

pub fn handle(
    global: &GlobalOpts,
    target: &Path,
    start: Option<usize>,
    end: Option<usize>,
) -> Result<()> {
    let mender = build_mender(global, Vec::new(), start, end)?;
    let range = mender.range();

    let report = mender.remove_range(target).with_context(|| {
        format!(
            "Failed to remove lines {}..{} from {}",
            range.start(),
            range.end(),
            target.display()
        )
    })?;

    if global.json {
        return print_json(&report);
    }

    report_dropped(target, report.dropped_bytes);
    println!(
        "{} Fixed. Original lines: {}, New lines: {}",
        "✓".bright_green(),
        report.original_lines,
        report.new_lines
    );

    Ok(())
}
