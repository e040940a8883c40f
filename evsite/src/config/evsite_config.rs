use super::DatasetConfig;
use crate::app::EvsiteAppError;
use config::{Config, ConfigError, File};
use evsite_core::model::engine::EngineConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// the contents of an evsite TOML configuration file.
///
/// ```toml
/// [datasets]
/// stations_file = "stations.csv"
/// demand = { type = "observations", file = "demand.csv", kernel_radius_meters = 30000.0 }
///
/// [placement]
/// separation = { type = "cell_factor", factor = 2.0 }
/// coverage_radius_cells = 3.0
/// coverage_share = 0.5
/// normalization = "max"
/// ```
///
/// relative paths are resolved against the directory of the configuration file.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct EvsiteConfig {
    pub datasets: DatasetConfig,
    #[serde(default)]
    pub placement: EngineConfig,
}

impl EvsiteConfig {
    pub fn from_file(path: &Path) -> Result<EvsiteConfig, EvsiteAppError> {
        let filename = path.to_str().unwrap_or_default();
        let config = Config::builder()
            .add_source(File::from(path))
            .build()
            .map_err(|source| EvsiteAppError::Configuration {
                path: path.to_path_buf(),
                source,
            })?;
        let datasets = config
            .get::<DatasetConfig>("datasets")
            .map_err(|e| {
                let msg = format!("error reading 'datasets' key in '{filename}': {e}");
                EvsiteAppError::InvalidUserInput(msg)
            })?;
        let placement = match config.get::<EngineConfig>("placement") {
            Ok(placement) => placement,
            Err(ConfigError::NotFound(_)) => EngineConfig::default(),
            Err(e) => {
                let msg = format!("error reading 'placement' key in '{filename}': {e}");
                return Err(EvsiteAppError::InvalidUserInput(msg));
            }
        };
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        log::debug!("resolving dataset paths relative to '{}'", base.display());
        Ok(EvsiteConfig {
            datasets: datasets.resolve(base),
            placement,
        })
    }
}

pub(super) fn resolve_path(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}
