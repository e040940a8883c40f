use crate::model::{BoundingBox, EngineError};
use serde::{Deserialize, Serialize};

/// an inbound request from the front-end. fields left out take the defaults of the
/// front-end form.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct OptimizationRequest {
    #[serde(default = "default_k")]
    pub k: i64,
    #[serde(default = "default_resolution")]
    pub resolution: i64,
    #[serde(default = "default_lat_min")]
    pub lat_min: f64,
    #[serde(default = "default_lat_max")]
    pub lat_max: f64,
    #[serde(default = "default_lon_min")]
    pub lon_min: f64,
    #[serde(default = "default_lon_max")]
    pub lon_max: f64,
}

impl Default for OptimizationRequest {
    fn default() -> Self {
        OptimizationRequest {
            k: default_k(),
            resolution: default_resolution(),
            lat_min: default_lat_min(),
            lat_max: default_lat_max(),
            lon_min: default_lon_min(),
            lon_max: default_lon_max(),
        }
    }
}

impl OptimizationRequest {
    /// validates and returns the request extent
    pub fn bbox(&self) -> Result<BoundingBox, EngineError> {
        BoundingBox::new(self.lat_min, self.lat_max, self.lon_min, self.lon_max)
    }
}

fn default_k() -> i64 {
    5
}

fn default_resolution() -> i64 {
    100
}

fn default_lat_min() -> f64 {
    8.0
}

fn default_lat_max() -> f64 {
    13.5
}

fn default_lon_min() -> f64 {
    76.0
}

fn default_lon_max() -> f64 {
    80.5
}
