use crate::{model::BoundingBox, util::geo_ops};
use serde::Serialize;

/// describes the lattice built over a bounding box.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct GridSpec {
    pub bbox: BoundingBox,
    /// effective resolution after clamping
    pub resolution: usize,
    /// number of distinct rows, may be smaller than the resolution for a degenerate box
    pub rows: usize,
    /// number of distinct columns, may be smaller than the resolution for a degenerate box
    pub cols: usize,
    pub lat_step: f64,
    pub lon_step: f64,
}

impl GridSpec {
    pub fn n_points(&self) -> usize {
        self.rows * self.cols
    }

    /// (height, width) in meters of a cell at the center of the box
    pub fn cell_size_meters(&self) -> (f64, f64) {
        let (lat, lon) = self.bbox.center();
        geo_ops::cell_size_meters(lat, lon, self.lat_step, self.lon_step)
    }

    /// the larger side of a cell in meters, used as the unit length when policies are
    /// expressed as multiples of the cell size.
    pub fn cell_extent_meters(&self) -> f64 {
        let (h, w) = self.cell_size_meters();
        h.max(w)
    }
}
