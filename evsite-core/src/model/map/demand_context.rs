use crate::model::demand::DemandSample;
use std::collections::BTreeMap;

/// upper bound on display blocks per axis for the demand heat layer
pub const MAX_DISPLAY_BLOCKS: usize = 50;

/// a block of grid cells summarized for display
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DemandBlock {
    pub lat: f64,
    pub lon: f64,
    pub weight: f64,
}

/// downsamples demand samples into at most MAX_DISPLAY_BLOCKS² blocks so that the heat
/// layer stays small at high resolution. each block reports the mean position and mean
/// weight of its cells. blocks without demand are omitted. output is ordered by block
/// row, then block column.
pub fn aggregate(samples: &[DemandSample]) -> Vec<DemandBlock> {
    let rows = samples.iter().map(|s| s.point.row_index + 1).max().unwrap_or(0);
    let cols = samples.iter().map(|s| s.point.col_index + 1).max().unwrap_or(0);
    if rows == 0 || cols == 0 {
        return vec![];
    }
    let block_rows = rows.min(MAX_DISPLAY_BLOCKS);
    let block_cols = cols.min(MAX_DISPLAY_BLOCKS);

    let mut blocks: BTreeMap<(usize, usize), (f64, f64, f64, usize)> = BTreeMap::new();
    for s in samples.iter() {
        let key = (
            s.point.row_index * block_rows / rows,
            s.point.col_index * block_cols / cols,
        );
        let acc = blocks.entry(key).or_insert((0.0, 0.0, 0.0, 0));
        acc.0 += s.point.lat;
        acc.1 += s.point.lon;
        acc.2 += s.weight;
        acc.3 += 1;
    }
    blocks
        .into_values()
        .filter(|(_, _, w, _)| *w > 0.0)
        .map(|(lat, lon, w, n)| {
            let n = n as f64;
            DemandBlock {
                lat: lat / n,
                lon: lon / n,
                weight: w / n,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::grid::GridPoint;

    fn samples(n: usize, weight: f64) -> Vec<DemandSample> {
        (0..n)
            .flat_map(|r| (0..n).map(move |c| (r, c)))
            .map(|(r, c)| DemandSample {
                point: GridPoint::new(r as f64, c as f64, r, c),
                weight,
            })
            .collect()
    }

    #[test]
    fn test_small_grid_is_not_downsampled() {
        let blocks = aggregate(&samples(10, 1.0));
        assert_eq!(blocks.len(), 100);
    }

    #[test]
    fn test_large_grid_is_capped() {
        let blocks = aggregate(&samples(200, 0.5));
        assert_eq!(blocks.len(), MAX_DISPLAY_BLOCKS * MAX_DISPLAY_BLOCKS);
        assert!(blocks.iter().all(|b| b.weight == 0.5));
        // the first block averages rows 0..4 and cols 0..4
        assert_eq!(blocks[0].lat, 1.5);
        assert_eq!(blocks[0].lon, 1.5);
    }

    #[test]
    fn test_zero_demand_omitted() {
        assert!(aggregate(&samples(10, 0.0)).is_empty());
        assert!(aggregate(&[]).is_empty());
    }
}
