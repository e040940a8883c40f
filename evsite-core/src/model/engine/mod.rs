mod engine_config;
mod optimization_engine;
mod optimization_request;
mod optimization_response;
mod optimization_result;
mod site_record;

pub use engine_config::EngineConfig;
pub use optimization_engine::{run_pipeline, OptimizationEngine};
pub use optimization_request::OptimizationRequest;
pub use optimization_response::{OptimizationMetadata, OptimizationResponse};
pub use optimization_result::OptimizationResult;
pub use site_record::SiteRecord;
