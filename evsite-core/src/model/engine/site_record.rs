use crate::model::placement::SelectedSite;
use serde::{Deserialize, Serialize};
use wkt::ToWkt;

/// flat, serializable description of a selected site for programmatic consumers.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SiteRecord {
    pub rank: usize,
    pub lat: f64,
    pub lon: f64,
    pub row: usize,
    pub col: usize,
    pub demand_weight: f64,
    pub marginal_demand: f64,
    /// meters to the nearest existing station, if any exist
    pub nearest_existing_meters: Option<f64>,
    /// WKT point
    pub geometry: String,
}

impl From<&SelectedSite> for SiteRecord {
    fn from(site: &SelectedSite) -> Self {
        let point = site.candidate.point;
        SiteRecord {
            rank: site.rank,
            lat: point.lat,
            lon: point.lon,
            row: point.row_index,
            col: point.col_index,
            demand_weight: site.candidate.demand_weight,
            marginal_demand: site.marginal_demand,
            nearest_existing_meters: site.candidate.nearest_existing_distance,
            geometry: point.to_point().wkt_string(),
        }
    }
}
