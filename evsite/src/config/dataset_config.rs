use super::DemandConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// locations of the external datasets.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DatasetConfig {
    /// existing station registry CSV
    pub stations_file: PathBuf,
    #[serde(default)]
    pub demand: DemandConfig,
    /// GeoJSON polygons of water and other non-drivable areas
    #[serde(default)]
    pub exclusion_file: Option<PathBuf>,
    /// GeoJSON outline of the region, drawn on maps
    #[serde(default)]
    pub boundary_file: Option<PathBuf>,
}

impl DatasetConfig {
    /// resolves every relative file path against `base`
    pub fn resolve(self, base: &Path) -> DatasetConfig {
        use super::evsite_config::resolve_path;
        DatasetConfig {
            stations_file: resolve_path(base, self.stations_file),
            demand: self.demand.resolve(base),
            exclusion_file: self.exclusion_file.map(|f| resolve_path(base, f)),
            boundary_file: self.boundary_file.map(|f| resolve_path(base, f)),
        }
    }
}
