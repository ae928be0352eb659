use serde::Serialize;
use std::path::{Path, PathBuf};

use super::markers::MarkerSet;
use super::truncate::{TruncateOutcome, TruncatePlan};
use crate::error::RepairResult;

/// Where the truncator would cut, without writing anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocateReport {
    pub target: PathBuf,
    pub outcome: TruncateOutcome,
    pub total_lines: usize,
    pub dropped_bytes: usize,
}

impl From<&TruncatePlan> for LocateReport {
    fn from(plan: &TruncatePlan) -> Self {
        Self {
            target: plan.target().to_path_buf(),
            outcome: plan.outcome(),
            total_lines: plan.total_lines(),
            dropped_bytes: plan.dropped_bytes(),
        }
    }
}

pub fn locate_marker(target: &Path, markers: &MarkerSet) -> RepairResult<LocateReport> {
    let plan = TruncatePlan::scan(target, markers)?;
    Ok(LocateReport::from(&plan))
}
