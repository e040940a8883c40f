use crate::model::grid::GridSpec;
use serde::{Deserialize, Serialize};
use uom::si::{f64::Length, length::meter};

/// how the minimum separation between stations is derived for a request.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum SeparationPolicy {
    /// a multiple of the larger side of a grid cell, so the separation scales with the
    /// requested resolution
    CellFactor { factor: f64 },
    /// a fixed distance regardless of resolution
    Absolute { distance_meters: f64 },
}

impl Default for SeparationPolicy {
    fn default() -> Self {
        SeparationPolicy::CellFactor { factor: 2.0 }
    }
}

impl SeparationPolicy {
    pub fn min_separation(&self, spec: &GridSpec) -> Length {
        let meters = match self {
            SeparationPolicy::CellFactor { factor } => factor * spec.cell_extent_meters(),
            SeparationPolicy::Absolute { distance_meters } => *distance_meters,
        };
        Length::new::<meter>(if meters.is_finite() { meters.max(0.0) } else { 0.0 })
    }
}

#[cfg(test)]
mod tests {
    use super::SeparationPolicy;
    use crate::model::{grid, BoundingBox};
    use uom::si::length::meter;

    #[test]
    fn test_cell_factor_scales_with_resolution() {
        let bbox = BoundingBox::new(8.0, 13.5, 76.0, 80.5).unwrap();
        let (coarse, _) = grid::build_with_spec(&bbox, 50);
        let (fine, _) = grid::build_with_spec(&bbox, 100);
        let policy = SeparationPolicy::default();
        let coarse_m = policy.min_separation(&coarse).get::<meter>();
        let fine_m = policy.min_separation(&fine).get::<meter>();
        assert!((coarse_m / fine_m - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_absolute() {
        let bbox = BoundingBox::new(8.0, 13.5, 76.0, 80.5).unwrap();
        let (spec, _) = grid::build_with_spec(&bbox, 50);
        let policy = SeparationPolicy::Absolute {
            distance_meters: 1500.0,
        };
        assert_eq!(policy.min_separation(&spec).get::<meter>(), 1500.0);
    }

    #[test]
    fn test_deserialize() {
        let policy: SeparationPolicy =
            serde_json::from_str(r#"{"type": "cell_factor", "factor": 3.5}"#).unwrap();
        assert_eq!(policy, SeparationPolicy::CellFactor { factor: 3.5 });
    }
}
