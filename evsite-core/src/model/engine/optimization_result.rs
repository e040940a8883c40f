use crate::model::{
    demand::DemandSample, infrastructure::ExistingStation, placement::Selection, BoundingBox,
};

/// the immutable outcome of one optimization run, consumed by the map composer.
#[derive(Clone, Debug)]
pub struct OptimizationResult {
    pub selection: Selection,
    /// existing stations inside the request bounding box
    pub existing: Vec<ExistingStation>,
    pub bbox: BoundingBox,
    /// effective (clamped) resolution
    pub resolution: usize,
    /// demand samples for the heat context layer, aligned with the lattice
    pub demand: Vec<DemandSample>,
}
