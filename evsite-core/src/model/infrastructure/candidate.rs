use crate::model::grid::GridPoint;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IneligibleReason {
    /// closer than the minimum separation to an existing station
    TooCloseToExisting,
    /// inside a water body or other non-drivable area
    Excluded,
}

/// a grid point annotated with its demand and its relationship to existing infrastructure.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Candidate {
    pub point: GridPoint,
    pub demand_weight: f64,
    /// great-circle distance in meters to the nearest existing station, None if the
    /// registry is empty
    pub nearest_existing_distance: Option<f64>,
    pub eligible: bool,
    pub ineligible_reason: Option<IneligibleReason>,
}

impl Candidate {
    pub fn eligible(point: GridPoint, demand_weight: f64, nearest: Option<f64>) -> Candidate {
        Candidate {
            point,
            demand_weight,
            nearest_existing_distance: nearest,
            eligible: true,
            ineligible_reason: None,
        }
    }

    pub fn ineligible(
        point: GridPoint,
        demand_weight: f64,
        nearest: Option<f64>,
        reason: IneligibleReason,
    ) -> Candidate {
        Candidate {
            point,
            demand_weight,
            nearest_existing_distance: nearest,
            eligible: false,
            ineligible_reason: Some(reason),
        }
    }
}
