use serde::{Deserialize, Serialize};

/// an operating charging station. owned by an external registry and never modified here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExistingStation {
    pub id: String,
    pub lat: f64,
    pub lon: f64,
    /// number of charge points, when known
    pub capacity: Option<u32>,
}

impl ExistingStation {
    pub fn new(id: &str, lat: f64, lon: f64, capacity: Option<u32>) -> ExistingStation {
        ExistingStation {
            id: id.to_string(),
            lat,
            lon,
            capacity,
        }
    }
}
