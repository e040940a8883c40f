use super::{DemandObservation, DemandSource};
use crate::{model::infrastructure::ExistingStation, util::geo_ops};
use rstar::{primitives::GeomWithData, RTree};
use uom::si::f64::Length;

type ObservationNode = GeomWithData<[f64; 2], f64>;

/// demand estimated as a linear-kernel density over weighted observation points. the raw
/// demand at a location is the sum of `weight * (1 - d / radius)` over every observation
/// closer than the kernel radius. a location with no observation within the radius is
/// reported as uncovered.
pub struct PointDensityDemand {
    name: String,
    tree: RTree<ObservationNode>,
    kernel_radius_meters: f64,
}

impl PointDensityDemand {
    pub fn new(
        name: &str,
        observations: &[DemandObservation],
        kernel_radius: Length,
    ) -> PointDensityDemand {
        let nodes = observations
            .iter()
            .filter(|o| o.latitude.is_finite() && o.longitude.is_finite())
            .map(|o| GeomWithData::new([o.longitude, o.latitude], o.weight))
            .collect::<Vec<_>>();
        let skipped = observations.len() - nodes.len();
        if skipped > 0 {
            log::warn!("{name}: skipped {skipped} observations with non-finite coordinates");
        }
        PointDensityDemand {
            name: name.to_string(),
            tree: RTree::bulk_load(nodes),
            kernel_radius_meters: kernel_radius.get::<uom::si::length::meter>(),
        }
    }

    /// uses the existing station network as a demand proxy, weighting each station by
    /// its capacity (or one when capacity is unknown).
    pub fn from_stations(stations: &[ExistingStation], kernel_radius: Length) -> PointDensityDemand {
        let observations = stations
            .iter()
            .map(|s| DemandObservation {
                latitude: s.lat,
                longitude: s.lon,
                weight: s.capacity.map(|c| c as f64).unwrap_or(1.0),
            })
            .collect::<Vec<_>>();
        PointDensityDemand::new("station density", &observations, kernel_radius)
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}

impl DemandSource for PointDensityDemand {
    fn name(&self) -> &str {
        &self.name
    }

    fn sample(&self, lat: f64, lon: f64) -> Option<f64> {
        let radius = self.kernel_radius_meters;
        if radius <= 0.0 {
            return None;
        }
        let envelopes = geo_ops::envelopes_around(lat, lon, radius);
        let mut covered = false;
        let mut acc = 0.0;
        let nodes = envelopes
            .iter()
            .flat_map(|envelope| self.tree.locate_in_envelope(envelope));
        for node in nodes {
            let [x, y] = *node.geom();
            let d = geo_ops::haversine_meters(lat, lon, y, x);
            if d < radius {
                covered = true;
                acc += node.data * (1.0 - d / radius);
            }
        }
        covered.then_some(acc)
    }
}
