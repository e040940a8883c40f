use serde::{Deserialize, Serialize};

/// a candidate site on the search lattice, identified by its (row, col) position.
/// rows run south to north, columns run west to east.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridPoint {
    pub lat: f64,
    pub lon: f64,
    pub row_index: usize,
    pub col_index: usize,
}

impl GridPoint {
    pub fn new(lat: f64, lon: f64, row_index: usize, col_index: usize) -> GridPoint {
        GridPoint {
            lat,
            lon,
            row_index,
            col_index,
        }
    }

    /// lattice position, the deterministic tie-breaking key for placement
    pub fn cell(&self) -> (usize, usize) {
        (self.row_index, self.col_index)
    }

    /// rstar-compatible (x=lon, y=lat) coordinate
    pub fn xy(&self) -> [f64; 2] {
        [self.lon, self.lat]
    }

    pub fn to_point(&self) -> geo::Point<f64> {
        geo::Point::new(self.lon, self.lat)
    }
}
