use super::{
    EngineConfig, OptimizationMetadata, OptimizationRequest, OptimizationResponse,
    OptimizationResult, SiteRecord,
};
use crate::model::{
    dataset::{DatasetSnapshot, DatasetStore},
    demand, grid, infrastructure,
    map::MapComposer,
    placement::{GreedyCoverageOptimizer, PlacementOptimizer},
    EngineError,
};
use std::sync::Arc;

const MAP_TITLE: &str = "EV Charging Site Recommendations";

/// serves optimization requests against the current dataset snapshot of a store.
///
/// the engine itself holds no per-request state, so a single instance can be shared
/// across threads.
pub struct OptimizationEngine {
    config: EngineConfig,
    store: Arc<DatasetStore>,
    optimizer: Arc<dyn PlacementOptimizer>,
}

impl OptimizationEngine {
    pub fn new(config: EngineConfig, store: Arc<DatasetStore>) -> OptimizationEngine {
        OptimizationEngine {
            config,
            store,
            optimizer: Arc::new(GreedyCoverageOptimizer),
        }
    }

    pub fn with_optimizer(mut self, optimizer: Arc<dyn PlacementOptimizer>) -> OptimizationEngine {
        self.optimizer = optimizer;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn store(&self) -> &DatasetStore {
        &self.store
    }

    /// runs one request. the dataset snapshot is captured once at the start, so a
    /// concurrent reload does not affect a request that is already running.
    pub fn optimize(
        &self,
        request: &OptimizationRequest,
    ) -> Result<OptimizationResponse, EngineError> {
        let snapshot = self.store.current();
        run_pipeline(request, &snapshot, &self.config, self.optimizer.as_ref())
    }
}

/// the linear request pipeline: validate, build the lattice, score demand, annotate
/// eligibility, select sites and compose the map.
///
/// # Arguments
///
/// * `request` - the inbound request
/// * `snapshot` - datasets to read from
/// * `config` - placement objective parameters
/// * `optimizer` - site selection strategy
///
/// # Returns
///
/// * the rendered map and its structured metadata, or `InvalidBounds` if the request
///   extent is invalid. sparse data, zero eligible candidates and infeasible `k` all
///   produce a valid (possibly empty) response.
pub fn run_pipeline(
    request: &OptimizationRequest,
    snapshot: &DatasetSnapshot,
    config: &EngineConfig,
    optimizer: &dyn PlacementOptimizer,
) -> Result<OptimizationResponse, EngineError> {
    let bbox = request.bbox()?;
    let datasets = &snapshot.contents;

    let (spec, points) = grid::build_with_spec(&bbox, request.resolution);
    let policy = config.placement_policy(&spec);
    log::debug!(
        "request k={} over {} with {} candidates, min separation {:.1}m, coverage radius {:.1}m",
        request.k,
        bbox,
        points.len(),
        policy.min_separation_meters(),
        policy.coverage_radius_meters()
    );

    let samples = demand::score(&points, &datasets.demand, config.normalization);
    let candidates = infrastructure::annotate(
        &samples,
        &datasets.stations,
        policy.min_separation,
        &datasets.exclusions,
    );
    let n_eligible = candidates.iter().filter(|c| c.eligible).count();
    let selection = optimizer.select(&candidates, request.k, &policy);
    log::info!(
        "{} selected {} of {} requested sites ({} eligible candidates, snapshot version {})",
        optimizer.name(),
        selection.len(),
        request.k.max(0),
        n_eligible,
        snapshot.version
    );

    let result = OptimizationResult {
        selection,
        existing: datasets.stations.within(&bbox),
        bbox,
        resolution: spec.resolution,
        demand: samples,
    };
    let document = MapComposer::new(MAP_TITLE, datasets.boundary.as_ref()).render(&result)?;

    let metadata = OptimizationMetadata {
        request: *request,
        bbox,
        resolution: spec.resolution,
        snapshot_version: snapshot.version,
        n_candidates: candidates.len(),
        n_eligible,
        existing_in_bbox: result.existing.len(),
        min_separation_meters: policy.min_separation_meters(),
        coverage_radius_meters: policy.coverage_radius_meters(),
        total_marginal_demand: result.selection.total_marginal_demand(),
        sites: result.selection.iter().map(SiteRecord::from).collect(),
    };

    Ok(OptimizationResponse {
        document,
        metadata,
        result,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        model::{
            dataset::DatasetContents,
            demand::DemandDataset,
            infrastructure::{ExclusionMask, ExistingStation, StationRegistry},
            map::MapLayer,
            placement::SeparationPolicy,
            BoundingBox,
        },
        util::geo_ops,
    };
    use geo::{LineString, Polygon};
    use itertools::Itertools;

    fn engine(stations: Vec<ExistingStation>) -> OptimizationEngine {
        engine_with(EngineConfig::default(), stations)
    }

    fn engine_with(config: EngineConfig, stations: Vec<ExistingStation>) -> OptimizationEngine {
        let contents = DatasetContents::new(
            StationRegistry::new(stations),
            DemandDataset::Uniform { weight: 1.0 },
        );
        OptimizationEngine::new(config, Arc::new(DatasetStore::from_contents(contents)))
    }

    fn absolute_separation(distance_meters: f64) -> EngineConfig {
        EngineConfig {
            separation: SeparationPolicy::Absolute { distance_meters },
            ..Default::default()
        }
    }

    fn assert_sites_separated(response: &OptimizationResponse, stations: &[ExistingStation]) {
        let min_sep = response.metadata.min_separation_meters;
        let sites = &response.result.selection;
        for (a, b) in sites.iter().tuple_combinations() {
            let d = geo_ops::haversine_meters(
                a.candidate.point.lat,
                a.candidate.point.lon,
                b.candidate.point.lat,
                b.candidate.point.lon,
            );
            assert!(d >= min_sep, "sites only {d}m apart");
        }
        for site in sites.iter() {
            for station in stations.iter() {
                let d = geo_ops::haversine_meters(
                    site.candidate.point.lat,
                    site.candidate.point.lon,
                    station.lat,
                    station.lon,
                );
                assert!(d >= min_sep, "site only {d}m from station {}", station.id);
            }
        }
    }

    #[test]
    fn test_uniform_demand_without_stations() {
        let response = engine(vec![]).optimize(&OptimizationRequest::default()).unwrap();
        let sites = &response.result.selection;
        assert_eq!(sites.len(), 5);
        assert!(sites.iter().all(|s| s.marginal_demand > 0.0));
        for (a, b) in sites.iter().tuple_combinations() {
            let d = geo_ops::haversine_meters(
                a.candidate.point.lat,
                a.candidate.point.lon,
                b.candidate.point.lat,
                b.candidate.point.lon,
            );
            assert!(d >= response.metadata.min_separation_meters);
        }
        assert_eq!(response.document.new_site_markers, 5);
        assert_eq!(response.document.existing_markers, 0);
        assert_eq!(response.document.layer_count(MapLayer::Selected), 5);
        assert_eq!(response.document.layer_count(MapLayer::Existing), 0);
        assert_eq!(response.metadata.sites.len(), 5);
        assert_eq!(response.metadata.n_candidates, 100 * 100);
        assert!(response.metadata.sites[0].geometry.starts_with("POINT"));
    }

    #[test]
    fn test_stations_at_every_grid_point() {
        let request = OptimizationRequest::default();
        let bbox = request.bbox().unwrap();
        let stations = grid::build(&bbox, request.resolution)
            .iter()
            .map(|p| {
                let id = format!("s-{}-{}", p.row_index, p.col_index);
                ExistingStation::new(&id, p.lat, p.lon, None)
            })
            .collect_vec();
        let response = engine(stations).optimize(&request).unwrap();
        assert!(response.result.selection.is_empty());
        assert_eq!(response.metadata.n_eligible, 0);
        assert_eq!(response.document.new_site_markers, 0);
        assert_eq!(response.document.existing_markers, 100 * 100);
        assert_eq!(response.document.layer_count(MapLayer::Existing), 100 * 100);
    }

    #[test]
    fn test_station_across_antimeridian_suppresses_sites() {
        let stations = vec![
            ExistingStation::new("across", 0.55, -179.999, None),
            ExistingStation::new("far", 0.55, 170.0, None),
        ];
        let request = OptimizationRequest {
            k: 200,
            lat_min: 0.0,
            lat_max: 1.0,
            lon_min: 179.0,
            lon_max: 180.0,
            ..Default::default()
        };
        let response = engine_with(absolute_separation(8_000.0), stations.clone())
            .optimize(&request)
            .unwrap();
        assert!(!response.result.selection.is_empty());
        assert!(response.metadata.n_eligible < response.metadata.n_candidates);
        assert_eq!(response.metadata.existing_in_bbox, 0);
        assert_sites_separated(&response, &stations);
    }

    #[test]
    fn test_polar_cap_sites_keep_separation() {
        let stations = vec![
            ExistingStation::new("pole", 89.9, 0.0, None),
            ExistingStation::new("dateline", 89.7, 179.99, None),
        ];
        let request = OptimizationRequest {
            k: 50,
            resolution: 40,
            lat_min: 89.5,
            lat_max: 90.0,
            lon_min: -180.0,
            lon_max: 180.0,
        };
        let response = engine_with(absolute_separation(5_000.0), stations.clone())
            .optimize(&request)
            .unwrap();
        assert!(!response.result.selection.is_empty());
        assert!(response.metadata.n_eligible < response.metadata.n_candidates);
        assert_sites_separated(&response, &stations);
    }

    #[test]
    fn test_zero_k_renders_empty_selection() {
        let request = OptimizationRequest {
            k: 0,
            ..Default::default()
        };
        let response = engine(vec![]).optimize(&request).unwrap();
        assert!(response.result.selection.is_empty());
        assert_eq!(response.document.layer_count(MapLayer::BoundingBox), 1);
        assert!(response.document.html.contains("<html"));
    }

    #[test]
    fn test_invalid_bounds_fail_before_any_work() {
        let request = OptimizationRequest {
            lat_min: 13.5,
            lat_max: 8.0,
            ..Default::default()
        };
        let error = engine(vec![]).optimize(&request).unwrap_err();
        assert!(matches!(
            error,
            EngineError::InvalidBounds { ref field, .. } if field == "lat_min"
        ));
    }

    #[test]
    fn test_sites_keep_distance_from_existing_stations() {
        let stations = vec![
            ExistingStation::new("a", 10.0, 78.0, Some(4)),
            ExistingStation::new("b", 12.0, 77.0, None),
            ExistingStation::new("outside", 20.0, 70.0, None),
        ];
        let response = engine(stations.clone())
            .optimize(&OptimizationRequest {
                resolution: 50,
                ..Default::default()
            })
            .unwrap();
        let min_sep = response.metadata.min_separation_meters;
        for site in response.result.selection.iter() {
            for station in stations.iter() {
                let d = geo_ops::haversine_meters(
                    site.candidate.point.lat,
                    site.candidate.point.lon,
                    station.lat,
                    station.lon,
                );
                assert!(d >= min_sep);
            }
        }
        assert_eq!(response.metadata.existing_in_bbox, 2);
        assert_eq!(response.document.existing_markers, 2);
    }

    #[test]
    fn test_excluded_area_never_selected() {
        let bbox = BoundingBox::new(8.0, 13.5, 76.0, 80.5).unwrap();
        // western half of the box is water
        let water = Polygon::new(
            LineString::from(vec![(75.0, 7.0), (78.25, 7.0), (78.25, 14.0), (75.0, 14.0)]),
            vec![],
        );
        let contents = DatasetContents::new(
            StationRegistry::empty(),
            DemandDataset::Uniform { weight: 1.0 },
        )
        .with_exclusions(ExclusionMask::new(vec![water]));
        let engine = OptimizationEngine::new(
            EngineConfig::default(),
            Arc::new(DatasetStore::from_contents(contents)),
        );
        let response = engine
            .optimize(&OptimizationRequest {
                resolution: 30,
                ..Default::default()
            })
            .unwrap();
        assert_eq!(response.result.selection.len(), 5);
        for site in response.result.selection.iter() {
            let point = site.candidate.point;
            assert!(point.lon > 78.25);
            assert!(bbox.contains(point.lat, point.lon));
        }
    }

    #[test]
    fn test_repeated_requests_render_identically() {
        let engine = engine(vec![ExistingStation::new("a", 10.0, 78.0, None)]);
        let a = engine.optimize(&OptimizationRequest::default()).unwrap();
        let b = engine.optimize(&OptimizationRequest::default()).unwrap();
        assert_eq!(a.document.html, b.document.html);
        assert_eq!(a.metadata.sites, b.metadata.sites);
        assert_eq!(a.metadata.snapshot_version, 1);
    }
}
