use serde::{Deserialize, Serialize};

/// a single weighted observation from an auxiliary demand dataset, such as a population
/// count, a traffic counter or a point of interest.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct DemandObservation {
    #[serde(alias = "lat")]
    pub latitude: f64,
    #[serde(alias = "lon")]
    pub longitude: f64,
    pub weight: f64,
}
