use super::{GridPoint, GridSpec, MAX_RESOLUTION, MIN_RESOLUTION};
use crate::model::BoundingBox;
use itertools::Itertools;

/// clamps a requested resolution into the supported range. non-positive requests are
/// treated as the minimum resolution.
pub fn clamp_resolution(resolution: i64) -> usize {
    let clamped = resolution.clamp(MIN_RESOLUTION as i64, MAX_RESOLUTION as i64) as usize;
    if clamped as i64 != resolution {
        log::warn!(
            "resolution {resolution} outside of supported range [{MIN_RESOLUTION}, {MAX_RESOLUTION}], using {clamped}"
        );
    }
    clamped
}

/// builds the candidate lattice over a bounding box. see [`build_with_spec`].
pub fn build(bbox: &BoundingBox, resolution: i64) -> Vec<GridPoint> {
    let (_, points) = build_with_spec(bbox, resolution);
    points
}

/// discretizes a bounding box into a regular lattice of cell-center points in row-major
/// order. each axis is divided into `resolution` cells and one point is placed at the
/// center of every cell, so all points fall strictly inside a non-degenerate box.
///
/// when the box is so narrow that neighboring cell centers are indistinguishable in
/// floating point, the duplicates are collapsed, so the lattice may contain fewer than
/// `resolution²` points but never zero.
///
/// # Arguments
///
/// * `bbox` - validated extent to discretize
/// * `resolution` - requested lattice density along each axis, clamped to the supported range
///
/// # Returns
///
/// * the lattice description and the lattice points
pub fn build_with_spec(bbox: &BoundingBox, resolution: i64) -> (GridSpec, Vec<GridPoint>) {
    let resolution = clamp_resolution(resolution);
    let lat_step = (bbox.lat_max() - bbox.lat_min()) / resolution as f64;
    let lon_step = (bbox.lon_max() - bbox.lon_min()) / resolution as f64;
    let lats = axis_centers(bbox.lat_min(), bbox.lat_max(), lat_step, resolution);
    let lons = axis_centers(bbox.lon_min(), bbox.lon_max(), lon_step, resolution);

    let points = lats
        .iter()
        .enumerate()
        .cartesian_product(lons.iter().enumerate())
        .map(|((row, lat), (col, lon))| GridPoint::new(*lat, *lon, row, col))
        .collect_vec();

    let spec = GridSpec {
        bbox: *bbox,
        resolution,
        rows: lats.len(),
        cols: lons.len(),
        lat_step,
        lon_step,
    };
    log::debug!(
        "built {}x{} grid ({} points) over {}",
        spec.rows,
        spec.cols,
        points.len(),
        bbox
    );
    (spec, points)
}

/// cell centers along one axis, clamped into [min, max] with consecutive duplicates removed.
fn axis_centers(min: f64, max: f64, step: f64, n: usize) -> Vec<f64> {
    let mut centers = (0..n)
        .map(|i| (min + (i as f64 + 0.5) * step).clamp(min, max))
        .collect_vec();
    centers.dedup();
    if centers.is_empty() {
        centers.push(min + (max - min) / 2.0);
    }
    centers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tamil_nadu() -> BoundingBox {
        BoundingBox::new(8.0, 13.5, 76.0, 80.5).unwrap()
    }

    #[test]
    fn test_full_lattice() {
        let bbox = tamil_nadu();
        let (spec, points) = build_with_spec(&bbox, 100);
        assert_eq!(points.len(), 100 * 100);
        assert_eq!(spec.n_points(), points.len());
        for p in points.iter() {
            assert!(bbox.lat_min() < p.lat && p.lat < bbox.lat_max());
            assert!(bbox.lon_min() < p.lon && p.lon < bbox.lon_max());
        }
    }

    #[test]
    fn test_row_major_indices_unique() {
        let points = build(&tamil_nadu(), 10);
        let cells = points.iter().map(|p| p.cell()).collect_vec();
        assert_eq!(cells.iter().unique().count(), cells.len());
        assert_eq!(cells[0], (0, 0));
        assert_eq!(cells[1], (0, 1));
        assert_eq!(cells[10], (1, 0));
        assert!(points[10].lat > points[0].lat);
        assert!(points[1].lon > points[0].lon);
    }

    #[test]
    fn test_resolution_is_clamped() {
        let bbox = tamil_nadu();
        assert_eq!(build(&bbox, 0).len(), MIN_RESOLUTION * MIN_RESOLUTION);
        assert_eq!(build(&bbox, -4).len(), MIN_RESOLUTION * MIN_RESOLUTION);
        let (spec, _) = build_with_spec(&bbox, 10_000);
        assert_eq!(spec.resolution, MAX_RESOLUTION);
    }

    #[test]
    fn test_deterministic() {
        let bbox = tamil_nadu();
        assert_eq!(build(&bbox, 37), build(&bbox, 37));
    }

    #[test]
    fn test_tiny_box_returns_points() {
        let lat = 10.0_f64;
        let next = f64::from_bits(lat.to_bits() + 1);
        let bbox = BoundingBox::new(lat, next, 76.0, 76.5).unwrap();
        let (spec, points) = build_with_spec(&bbox, 100);
        assert!(!points.is_empty());
        assert!(points.len() <= 100 * 100);
        assert!(spec.rows < 100);
        assert_eq!(spec.cols, 100);
        for p in points.iter() {
            assert!(bbox.contains(p.lat, p.lon));
        }
    }

    #[test]
    fn test_cell_size() {
        let (spec, _) = build_with_spec(&tamil_nadu(), 100);
        let (h, w) = spec.cell_size_meters();
        assert!(h > 6_100.0 && h < 6_130.0, "cell height {h}");
        assert!(w > 4_900.0 && w < 4_930.0, "cell width {w}");
        assert_eq!(spec.cell_extent_meters(), h);
    }
}
