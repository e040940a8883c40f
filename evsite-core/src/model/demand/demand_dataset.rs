use super::{DemandSource, PointDensityDemand};

/// the demand datasets a deployment can be configured with.
pub enum DemandDataset {
    /// the same demand everywhere, useful for previews when no demand data exists
    Uniform { weight: f64 },
    /// kernel density of weighted observation points
    PointDensity(PointDensityDemand),
}

impl DemandSource for DemandDataset {
    fn name(&self) -> &str {
        match self {
            DemandDataset::Uniform { .. } => "uniform",
            DemandDataset::PointDensity(d) => d.name(),
        }
    }

    fn sample(&self, lat: f64, lon: f64) -> Option<f64> {
        match self {
            DemandDataset::Uniform { weight } => Some(*weight),
            DemandDataset::PointDensity(d) => d.sample(lat, lon),
        }
    }
}
