mod grid_builder;
mod grid_point;
mod grid_spec;

pub use grid_builder::{build, build_with_spec, clamp_resolution};
pub use grid_point::GridPoint;
pub use grid_spec::GridSpec;

/// smallest supported lattice density along each axis
pub const MIN_RESOLUTION: usize = 10;
/// largest supported lattice density along each axis
pub const MAX_RESOLUTION: usize = 500;
