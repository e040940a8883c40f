mod dataset_config;
mod demand_config;
mod evsite_config;

pub use dataset_config::DatasetConfig;
pub use demand_config::DemandConfig;
pub use evsite_config::EvsiteConfig;
