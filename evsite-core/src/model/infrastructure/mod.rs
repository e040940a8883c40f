mod candidate;
mod exclusion_mask;
mod existing_station;
mod infrastructure_ops;
mod station_registry;

pub use candidate::{Candidate, IneligibleReason};
pub use exclusion_mask::ExclusionMask;
pub use existing_station::ExistingStation;
pub use infrastructure_ops::annotate;
pub use station_registry::StationRegistry;
