pub mod bounding_box;
pub mod dataset;
pub mod demand;
pub mod engine;
pub mod error;
pub mod grid;
pub mod infrastructure;
pub mod map;
pub mod placement;

pub use bounding_box::BoundingBox;
pub use error::EngineError;
