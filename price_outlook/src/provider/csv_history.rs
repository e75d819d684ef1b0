//! Historical provider reading one CSV export per resource

use super::{HistoricalProvider, Resource};
use crate::error::Result;
use price_forecast::{DataLoader, HistoricalPoint};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Reads `<type>_<name>.csv` files from a directory
///
/// The name is lowercased and spaces become underscores, so the material
/// `Ready Mix` is read from `material_ready_mix.csv`. A missing file means the
/// resource has no history yet.
#[derive(Debug, Clone)]
pub struct CsvHistoricalProvider {
    dir: PathBuf,
}

impl CsvHistoricalProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the export for `resource`
    pub fn path_for(&self, resource: &Resource) -> PathBuf {
        let name = resource.name.trim().to_lowercase().replace(' ', "_");
        self.dir.join(format!("{}_{}.csv", resource.kind, name))
    }
}

impl HistoricalProvider for CsvHistoricalProvider {
    fn history(&self, resource: &Resource) -> Result<Vec<HistoricalPoint>> {
        let path = self.path_for(resource);
        if !path.exists() {
            debug!(%resource, path = %path.display(), "no history export");
            return Ok(Vec::new());
        }

        let series = DataLoader::from_csv(&path)?;
        info!(%resource, points = series.len(), "history loaded");
        Ok(series.into_points())
    }
}
