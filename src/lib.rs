pub mod config;
pub mod error;
pub mod repair;
pub mod storage;
pub mod text;

pub use error::{RepairError, RepairResult};

use std::path::Path;

use config::ConfigData;
use repair::{
    LineRange, LocateReport, MarkerSet, RemoveReport, TruncatePlan, TruncateReport,
};

#[derive(Debug, Clone)]
pub struct Mender {
    config: ConfigData,
    markers: MarkerSet,
    range: LineRange,
}

impl Mender {
    pub fn new(config: ConfigData) -> RepairResult<Self> {
        config.validate()?;
        let markers = MarkerSet::new(&config.truncate.markers)?;
        let range = LineRange::try_from(config.remove_range)?;

        Ok(Self {
            config,
            markers,
            range,
        })
    }

    /// Load the optional config file and build a mender from it.
    pub fn from_config_file(path: Option<&Path>) -> RepairResult<Self> {
        Self::new(ConfigData::load_or_default(path)?)
    }

    pub fn config(&self) -> &ConfigData {
        &self.config
    }

    pub fn markers(&self) -> &MarkerSet {
        &self.markers
    }

    pub fn range(&self) -> LineRange {
        self.range
    }

    pub fn scan(&self, target: &Path) -> RepairResult<TruncatePlan> {
        TruncatePlan::scan(target, &self.markers)
    }

    pub fn truncate(&self, target: &Path, replacement: &Path) -> RepairResult<TruncateReport> {
        self.scan(target)?
            .apply(replacement, &self.config.truncate.separator)
    }

    pub fn locate(&self, target: &Path) -> RepairResult<LocateReport> {
        repair::locate_marker(target, &self.markers)
    }

    pub fn remove_range(&self, target: &Path) -> RepairResult<RemoveReport> {
        repair::remove_line_range(target, self.range)
    }
}

impl Default for Mender {
    fn default() -> Self {
        Self {
            config: ConfigData::default(),
            markers: MarkerSet::default(),
            range: LineRange::default(),
        }
    }
}
