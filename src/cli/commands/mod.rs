pub mod locate;
pub mod remove_range;
pub mod truncate;

use anyhow::{Context, Result};
use colored::Colorize;
use cssmend::config::ConfigData;
use cssmend::{Mender, RepairError};
use serde::Serialize;
use std::path::Path;

use super::GlobalOpts;

/// Build a mender from the optional config file plus command-line overrides.
pub fn build_mender(
    global: &GlobalOpts,
    markers: Vec<String>,
    start: Option<usize>,
    end: Option<usize>,
) -> Result<Mender> {
    let config = ConfigData::load_or_default(global.config.as_deref())
        .context("Failed to load configuration")?
        .with_markers(markers)
        .with_range(start, end);

    Mender::new(config).context("Invalid repair settings")
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string(value).context("Failed to serialize report")?
    );
    Ok(())
}

/// Warn on stdout when lenient decoding lost bytes.
pub fn report_dropped(path: &Path, dropped: usize) {
    if dropped > 0 {
        println!(
            "{} Warning: dropped {} undecodable byte(s) from {}",
            "⚠".bright_yellow(),
            dropped,
            path.display()
        );
    }
}

/// Display an error message with proper formatting
pub fn display_error(err: &anyhow::Error) {
    eprintln!("\n{} {}", "✗".bright_red().bold(), "Operation failed".bright_red().bold());
    eprintln!("  {} {}", "├".bright_black(), err);

    // Display error chain
    for cause in err.chain().skip(1) {
        eprintln!("  {} {}", "├".bright_black(), cause);
    }

    let repair_error = err.chain().find_map(|e| e.downcast_ref::<RepairError>());
    match repair_error {
        Some(e) if e.is_not_found() => {
            eprintln!("  {} Check that the file path is correct", "└".bright_cyan());
        }
        Some(RepairError::InvalidRange { .. }) => {
            eprintln!("  {} The range start must not exceed its end", "└".bright_cyan());
        }
        Some(RepairError::Decode { .. }) => {
            eprintln!("  {} The replacement file must be UTF-8 text", "└".bright_cyan());
        }
        _ => {
            eprintln!(
                "  {} Run with {} for more details",
                "└".bright_black(),
                "RUST_LOG=debug".bright_cyan()
            );
        }
    }
}
