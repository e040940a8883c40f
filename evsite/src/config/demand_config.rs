use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// the source of demand weights for a deployment.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum DemandConfig {
    /// the same weight at every grid point
    Uniform {
        #[serde(default = "default_weight")]
        weight: f64,
    },
    /// weighted observation points from a CSV file with `latitude`, `longitude` and
    /// `weight` columns
    Observations {
        file: PathBuf,
        #[serde(default = "default_kernel_radius_meters")]
        kernel_radius_meters: f64,
    },
    /// demand proxied by the density of existing stations, weighted by capacity
    StationDensity {
        #[serde(default = "default_kernel_radius_meters")]
        kernel_radius_meters: f64,
    },
}

impl Default for DemandConfig {
    fn default() -> Self {
        DemandConfig::StationDensity {
            kernel_radius_meters: default_kernel_radius_meters(),
        }
    }
}

impl DemandConfig {
    /// resolves relative file paths against `base`
    pub fn resolve(self, base: &Path) -> DemandConfig {
        match self {
            DemandConfig::Observations {
                file,
                kernel_radius_meters,
            } => DemandConfig::Observations {
                file: super::evsite_config::resolve_path(base, file),
                kernel_radius_meters,
            },
            other => other,
        }
    }
}

fn default_weight() -> f64 {
    1.0
}

fn default_kernel_radius_meters() -> f64 {
    25_000.0
}
