use crate::model::{
    demand::DemandNormalization,
    grid::GridSpec,
    placement::{PlacementPolicy, SeparationPolicy},
};
use serde::{Deserialize, Serialize};
use uom::si::{f64::Length, length::meter};

/// placement objective parameters shared by every request an engine serves.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct EngineConfig {
    #[serde(default)]
    pub separation: SeparationPolicy,
    /// coverage radius expressed in grid cells (the larger cell side)
    #[serde(default = "default_coverage_radius_cells")]
    pub coverage_radius_cells: f64,
    #[serde(default = "default_coverage_share")]
    pub coverage_share: f64,
    #[serde(default)]
    pub normalization: DemandNormalization,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            separation: SeparationPolicy::default(),
            coverage_radius_cells: default_coverage_radius_cells(),
            coverage_share: default_coverage_share(),
            normalization: DemandNormalization::default(),
        }
    }
}

impl EngineConfig {
    /// resolves the configured objective against the lattice of a single request.
    pub fn placement_policy(&self, spec: &GridSpec) -> PlacementPolicy {
        let cells = if self.coverage_radius_cells.is_finite() {
            self.coverage_radius_cells.max(0.0)
        } else {
            0.0
        };
        PlacementPolicy::new(
            self.separation.min_separation(spec),
            Length::new::<meter>(cells * spec.cell_extent_meters()),
            self.coverage_share,
        )
    }
}

fn default_coverage_radius_cells() -> f64 {
    3.0
}

fn default_coverage_share() -> f64 {
    0.5
}

#[cfg(test)]
mod tests {
    use super::EngineConfig;
    use crate::model::{grid, placement::SeparationPolicy, BoundingBox};

    #[test]
    fn test_policy_scales_with_cell_size() {
        let bbox = BoundingBox::new(8.0, 13.5, 76.0, 80.5).unwrap();
        let (spec, _) = grid::build_with_spec(&bbox, 100);
        let policy = EngineConfig::default().placement_policy(&spec);
        let cell = spec.cell_extent_meters();
        assert!((policy.min_separation_meters() - 2.0 * cell).abs() < 1e-6);
        assert!((policy.coverage_radius_meters() - 3.0 * cell).abs() < 1e-6);
        assert_eq!(policy.coverage_share, 0.5);
    }

    #[test]
    fn test_deserialize_absolute_separation() {
        let config: EngineConfig = serde_json::from_str(
            r#"{"separation": {"type": "absolute", "distance_meters": 5000.0}, "coverage_share": 0.0}"#,
        )
        .unwrap();
        assert_eq!(
            config.separation,
            SeparationPolicy::Absolute {
                distance_meters: 5000.0
            }
        );
        assert_eq!(config.coverage_radius_cells, 3.0);
        assert_eq!(config.coverage_share, 0.0);
    }
}
