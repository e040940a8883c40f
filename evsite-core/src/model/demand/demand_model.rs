use super::{DemandNormalization, DemandSample, DemandSource};
use crate::model::grid::GridPoint;
use rayon::prelude::*;

/// scores each grid point against a demand source and normalizes the result. points
/// the source does not cover receive zero weight. the output is aligned with `points`.
///
/// # Arguments
///
/// * `points` - the candidate lattice
/// * `source` - auxiliary demand dataset
/// * `normalization` - rescaling applied over all sampled values of this request
///
/// # Returns
///
/// * one demand sample per grid point, with weights >= 0
pub fn score(
    points: &[GridPoint],
    source: &dyn DemandSource,
    normalization: DemandNormalization,
) -> Vec<DemandSample> {
    let raw: Vec<Option<f64>> = points
        .par_iter()
        .map(|p| source.sample(p.lat, p.lon))
        .collect();
    let uncovered = raw.iter().filter(|v| v.is_none()).count();
    if uncovered > 0 {
        log::debug!(
            "{} of {} points have no coverage in demand source '{}'",
            uncovered,
            points.len(),
            source.name()
        );
    }
    let weights = normalization.apply(&raw);
    points
        .iter()
        .zip(weights)
        .map(|(point, weight)| DemandSample {
            point: *point,
            weight,
        })
        .collect()
}
