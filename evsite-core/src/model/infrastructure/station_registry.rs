use super::ExistingStation;
use crate::{model::BoundingBox, util::geo_ops};
use rstar::{primitives::GeomWithData, RTree};

type StationNode = GeomWithData<[f64; 2], usize>;

/// read-only registry of existing stations with a spatial index for proximity queries.
pub struct StationRegistry {
    stations: Vec<ExistingStation>,
    tree: RTree<StationNode>,
}

impl StationRegistry {
    /// builds the registry. stations with coordinates outside of WGS84 ranges are dropped
    /// with a warning.
    pub fn new(stations: Vec<ExistingStation>) -> StationRegistry {
        let n_input = stations.len();
        let stations = stations
            .into_iter()
            .filter(|s| {
                let valid = s.lat.is_finite()
                    && s.lon.is_finite()
                    && (-90.0..=90.0).contains(&s.lat)
                    && (-180.0..=180.0).contains(&s.lon);
                if !valid {
                    log::warn!(
                        "dropping station '{}' with invalid coordinate ({}, {})",
                        s.id,
                        s.lat,
                        s.lon
                    );
                }
                valid
            })
            .collect::<Vec<_>>();
        log::debug!(
            "station registry holds {} of {} input stations",
            stations.len(),
            n_input
        );
        let nodes = stations
            .iter()
            .enumerate()
            .map(|(idx, s)| GeomWithData::new([s.lon, s.lat], idx))
            .collect::<Vec<_>>();
        StationRegistry {
            stations,
            tree: RTree::bulk_load(nodes),
        }
    }

    pub fn empty() -> StationRegistry {
        StationRegistry::new(vec![])
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn stations(&self) -> &[ExistingStation] {
        &self.stations
    }

    /// finds the station with the smallest great-circle distance to a location.
    ///
    /// the index is planar in degrees, so its nearest neighbor is only an upper bound on
    /// the great-circle nearest. every station within that bound is re-ranked by haversine
    /// distance, searching across the antimeridian where the bound reaches it. ties resolve
    /// to the station that appears first in the registry.
    ///
    /// # Returns
    ///
    /// * the nearest station and its distance in meters, or None for an empty registry
    pub fn nearest(&self, lat: f64, lon: f64) -> Option<(&ExistingStation, f64)> {
        let planar = self.tree.nearest_neighbor(&[lon, lat])?;
        let [x, y] = *planar.geom();
        let bound = geo_ops::haversine_meters(lat, lon, y, x);
        let envelopes = geo_ops::envelopes_around(lat, lon, bound);
        envelopes
            .iter()
            .flat_map(|envelope| self.tree.locate_in_envelope(envelope))
            .map(|node| {
                let [x, y] = *node.geom();
                (node.data, geo_ops::haversine_meters(lat, lon, y, x))
            })
            .chain(std::iter::once((planar.data, bound)))
            .min_by(|(a_idx, a), (b_idx, b)| a.total_cmp(b).then(a_idx.cmp(b_idx)))
            .map(|(idx, distance)| (&self.stations[idx], distance))
    }

    /// stations located inside the bounding box (edges inclusive), in registry order.
    pub fn within(&self, bbox: &BoundingBox) -> Vec<ExistingStation> {
        let envelope = rstar::AABB::from_corners(
            [bbox.lon_min(), bbox.lat_min()],
            [bbox.lon_max(), bbox.lat_max()],
        );
        let mut indices = self
            .tree
            .locate_in_envelope(&envelope)
            .map(|node| node.data)
            .collect::<Vec<_>>();
        indices.sort_unstable();
        indices
            .into_iter()
            .map(|idx| self.stations[idx].clone())
            .collect()
    }
}
