use crate::model::grid::GridPoint;
use serde::Serialize;

/// normalized demand attributed to a grid point. a weight of zero means there is no
/// justification to site a station at this point.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DemandSample {
    pub point: GridPoint,
    pub weight: f64,
}
