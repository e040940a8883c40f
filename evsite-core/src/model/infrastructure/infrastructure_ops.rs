use super::{Candidate, ExclusionMask, IneligibleReason, StationRegistry};
use crate::model::demand::DemandSample;
use rayon::prelude::*;
use uom::si::f64::Length;

/// annotates demand samples with their distance to the nearest existing station and
/// decides eligibility. a sample is ineligible when it falls inside the exclusion mask or
/// when its nearest existing station is closer than `min_separation`. the output is
/// aligned with `samples`.
///
/// distances are great-circle (haversine) meters.
pub fn annotate(
    samples: &[DemandSample],
    registry: &StationRegistry,
    min_separation: Length,
    exclusions: &ExclusionMask,
) -> Vec<Candidate> {
    let min_sep = min_separation.get::<uom::si::length::meter>();
    let candidates: Vec<Candidate> = samples
        .par_iter()
        .map(|sample| {
            let nearest = registry
                .nearest(sample.point.lat, sample.point.lon)
                .map(|(_, d)| d);
            if exclusions.excludes(sample.point.lat, sample.point.lon) {
                Candidate::ineligible(
                    sample.point,
                    sample.weight,
                    nearest,
                    IneligibleReason::Excluded,
                )
            } else if nearest.is_some_and(|d| d < min_sep) {
                Candidate::ineligible(
                    sample.point,
                    sample.weight,
                    nearest,
                    IneligibleReason::TooCloseToExisting,
                )
            } else {
                Candidate::eligible(sample.point, sample.weight, nearest)
            }
        })
        .collect();
    let n_eligible = candidates.iter().filter(|c| c.eligible).count();
    log::debug!(
        "{} of {} candidates eligible with minimum separation {:.1}m",
        n_eligible,
        candidates.len(),
        min_sep
    );
    candidates
}
