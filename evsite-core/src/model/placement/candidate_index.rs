use crate::{model::infrastructure::Candidate, util::geo_ops};
use rstar::{primitives::GeomWithData, RTree};

/// spatial index over a candidate slice, answering great-circle radius queries with
/// positions into that slice.
pub struct CandidateIndex {
    tree: RTree<GeomWithData<[f64; 2], usize>>,
}

impl CandidateIndex {
    pub fn new(candidates: &[Candidate]) -> CandidateIndex {
        let nodes = candidates
            .iter()
            .enumerate()
            .map(|(idx, c)| GeomWithData::new(c.point.xy(), idx))
            .collect::<Vec<_>>();
        CandidateIndex {
            tree: RTree::bulk_load(nodes),
        }
    }

    /// positions and distances (meters) of every candidate within `radius_meters` of the
    /// location, inclusive, sorted by position.
    pub fn within(&self, lat: f64, lon: f64, radius_meters: f64) -> Vec<(usize, f64)> {
        let envelopes = geo_ops::envelopes_around(lat, lon, radius_meters);
        let mut found = envelopes
            .iter()
            .flat_map(|envelope| self.tree.locate_in_envelope(envelope))
            .filter_map(|node| {
                let [x, y] = *node.geom();
                let d = geo_ops::haversine_meters(lat, lon, y, x);
                (d <= radius_meters).then_some((node.data, d))
            })
            .collect::<Vec<_>>();
        found.sort_unstable_by_key(|(idx, _)| *idx);
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::grid::GridPoint;

    fn candidates(coords: &[(f64, f64)]) -> Vec<Candidate> {
        coords
            .iter()
            .enumerate()
            .map(|(col, (lat, lon))| {
                Candidate::eligible(GridPoint::new(*lat, *lon, 0, col), 1.0, None)
            })
            .collect()
    }

    #[test]
    fn test_within_sorted_and_inclusive() {
        let coords = [(10.0, 78.02), (10.0, 78.0), (10.0, 79.0)];
        let index = CandidateIndex::new(&candidates(&coords));
        let found = index.within(10.0, 78.0, 2_500.0);
        let positions = found.iter().map(|(idx, _)| *idx).collect::<Vec<_>>();
        assert_eq!(positions, vec![0, 1]);
        assert_eq!(found[1].1, 0.0);
    }

    #[test]
    fn test_within_across_antimeridian() {
        let coords = [(0.5, 179.99), (0.5, -179.99), (0.5, -179.5)];
        let index = CandidateIndex::new(&candidates(&coords));
        let found = index.within(0.5, 179.99, 5_000.0);
        let positions = found.iter().map(|(idx, _)| *idx).collect::<Vec<_>>();
        assert_eq!(positions, vec![0, 1]);
        assert!(found[1].1 < 2_500.0);
    }
}
