use super::{OptimizationRequest, OptimizationResult, SiteRecord};
use crate::model::{map::RenderableDocument, BoundingBox};
use serde::Serialize;

/// structured description of a response, alongside the rendered document.
#[derive(Serialize, Clone, Debug)]
pub struct OptimizationMetadata {
    pub request: OptimizationRequest,
    pub bbox: BoundingBox,
    pub resolution: usize,
    pub snapshot_version: u64,
    pub n_candidates: usize,
    pub n_eligible: usize,
    pub existing_in_bbox: usize,
    pub min_separation_meters: f64,
    pub coverage_radius_meters: f64,
    pub total_marginal_demand: f64,
    pub sites: Vec<SiteRecord>,
}

/// the outbound result: the renderable map plus the structured selection.
#[derive(Clone, Debug)]
pub struct OptimizationResponse {
    pub document: RenderableDocument,
    pub metadata: OptimizationMetadata,
    pub result: OptimizationResult,
}
