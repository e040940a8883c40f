use serde::Serialize;
use uom::si::{f64::Length, length::meter};

/// the resolved, per-request parameters of a placement objective.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct PlacementPolicy {
    /// no two new stations, and no new station and existing station, may be closer than this
    pub min_separation: Length,
    /// demand within this distance of a selected site counts as served by it
    pub coverage_radius: Length,
    /// share of un-served neighboring demand credited to a candidate, in [0, 1]
    pub coverage_share: f64,
}

impl PlacementPolicy {
    pub fn new(min_separation: Length, coverage_radius: Length, coverage_share: f64) -> Self {
        let share = if coverage_share.is_finite() {
            coverage_share.clamp(0.0, 1.0)
        } else {
            0.0
        };
        if share != coverage_share {
            log::warn!("coverage share {coverage_share} outside of [0, 1], using {share}");
        }
        PlacementPolicy {
            min_separation,
            coverage_radius,
            coverage_share: share,
        }
    }

    pub fn min_separation_meters(&self) -> f64 {
        self.min_separation.get::<meter>().max(0.0)
    }

    pub fn coverage_radius_meters(&self) -> f64 {
        self.coverage_radius.get::<meter>().max(0.0)
    }
}
