use geo::{Intersects, Point, Polygon};
use rstar::{RTree, AABB};

/// areas where a station cannot be sited, such as water bodies or non-drivable land.
/// a point on a polygon boundary counts as excluded.
pub struct ExclusionMask {
    tree: RTree<Polygon<f64>>,
}

impl ExclusionMask {
    pub fn new(polygons: Vec<Polygon<f64>>) -> ExclusionMask {
        ExclusionMask {
            tree: RTree::bulk_load(polygons),
        }
    }

    pub fn empty() -> ExclusionMask {
        ExclusionMask::new(vec![])
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    pub fn excludes(&self, lat: f64, lon: f64) -> bool {
        let point = Point::new(lon, lat);
        self.tree
            .locate_in_envelope_intersecting(&AABB::from_point(point))
            .any(|polygon| polygon.intersects(&point))
    }
}

impl Default for ExclusionMask {
    fn default() -> Self {
        ExclusionMask::empty()
    }
}
