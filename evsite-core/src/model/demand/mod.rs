mod demand_dataset;
mod demand_model;
mod demand_normalization;
mod demand_observation;
mod demand_sample;
mod demand_source;
mod point_density_demand;

pub use demand_dataset::DemandDataset;
pub use demand_model::score;
pub use demand_normalization::DemandNormalization;
pub use demand_observation::DemandObservation;
pub use demand_sample::DemandSample;
pub use demand_source::DemandSource;
pub use point_density_demand::PointDensityDemand;
