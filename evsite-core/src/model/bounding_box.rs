use super::EngineError;
use geo::{coord, Polygon, Rect};
use serde::Serialize;

/// geographic extent of an optimization request in WGS84 degrees. only constructed through
/// [`BoundingBox::new`], which enforces finite values, valid latitude/longitude ranges and
/// strictly ordered bounds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BoundingBox {
    lat_min: f64,
    lat_max: f64,
    lon_min: f64,
    lon_max: f64,
}

impl BoundingBox {
    pub fn new(
        lat_min: f64,
        lat_max: f64,
        lon_min: f64,
        lon_max: f64,
    ) -> Result<BoundingBox, EngineError> {
        for (field, value, limit) in [
            ("lat_min", lat_min, 90.0),
            ("lat_max", lat_max, 90.0),
            ("lon_min", lon_min, 180.0),
            ("lon_max", lon_max, 180.0),
        ] {
            if !value.is_finite() {
                return Err(EngineError::invalid_bounds(
                    field,
                    format!("value {value} is not a finite number"),
                ));
            }
            if value < -limit || limit < value {
                return Err(EngineError::invalid_bounds(
                    field,
                    format!("value {value} outside of range [-{limit}, {limit}]"),
                ));
            }
        }
        if lat_min >= lat_max {
            return Err(EngineError::invalid_bounds(
                "lat_min",
                format!("lat_min {lat_min} must be less than lat_max {lat_max}"),
            ));
        }
        if lon_min >= lon_max {
            return Err(EngineError::invalid_bounds(
                "lon_min",
                format!("lon_min {lon_min} must be less than lon_max {lon_max}"),
            ));
        }
        Ok(BoundingBox {
            lat_min,
            lat_max,
            lon_min,
            lon_max,
        })
    }

    pub fn lat_min(&self) -> f64 {
        self.lat_min
    }

    pub fn lat_max(&self) -> f64 {
        self.lat_max
    }

    pub fn lon_min(&self) -> f64 {
        self.lon_min
    }

    pub fn lon_max(&self) -> f64 {
        self.lon_max
    }

    /// (lat, lon) of the box center
    pub fn center(&self) -> (f64, f64) {
        (
            (self.lat_min + self.lat_max) / 2.0,
            (self.lon_min + self.lon_max) / 2.0,
        )
    }

    /// inclusive containment test on all four edges.
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        self.lat_min <= lat && lat <= self.lat_max && self.lon_min <= lon && lon <= self.lon_max
    }

    pub fn to_polygon(&self) -> Polygon<f64> {
        Rect::new(
            coord! { x: self.lon_min, y: self.lat_min },
            coord! { x: self.lon_max, y: self.lat_max },
        )
        .to_polygon()
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "lat [{}, {}] lon [{}, {}]",
            self.lat_min, self.lat_max, self.lon_min, self.lon_max
        )
    }
}
