use super::{CandidateIndex, PlacementOptimizer, PlacementPolicy, SelectedSite, Selection};
use crate::model::infrastructure::Candidate;
use ordered_float::OrderedFloat;
use rayon::prelude::*;
use std::{cmp::Reverse, collections::BinaryHeap};

/// greedy maximal-coverage placement with separation suppression.
///
/// the marginal value of a candidate is its own un-served demand plus `coverage_share`
/// times the un-served demand of every other candidate within the coverage radius. each
/// round picks the eligible candidate with the highest marginal value (ties go to the
/// lowest `(row, col)`), marks its coverage neighborhood as served and suppresses every
/// remaining candidate closer than the minimum separation. candidates whose marginal
/// value has dropped to zero are never picked.
///
/// marginal values only decrease as demand becomes served, so rounds are evaluated
/// lazily: a heap holds stale upper bounds and only the top entry is re-scored.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyCoverageOptimizer;

/// heap ordering: highest marginal first, then lowest cell, then lowest position
type HeapKey = (OrderedFloat<f64>, Reverse<(usize, usize)>, Reverse<usize>);

struct GreedyState<'a> {
    candidates: &'a [Candidate],
    index: &'a CandidateIndex,
    coverage_radius: f64,
    served: Vec<bool>,
    available: Vec<bool>,
    coverage_share: f64,
}

impl GreedyState<'_> {
    /// positions of every other candidate within the coverage radius. recomputed on each
    /// call so that memory stays linear in the candidate count at any coverage radius.
    fn neighborhood(&self, idx: usize) -> Vec<usize> {
        let point = self.candidates[idx].point;
        self.index
            .within(point.lat, point.lon, self.coverage_radius)
            .into_iter()
            .map(|(n, _)| n)
            .filter(|n| *n != idx)
            .collect()
    }

    fn marginal(&self, idx: usize) -> f64 {
        let own = if self.served[idx] {
            0.0
        } else {
            self.candidates[idx].demand_weight
        };
        let covered: f64 = self
            .neighborhood(idx)
            .into_iter()
            .filter(|n| !self.served[*n])
            .map(|n| self.candidates[n].demand_weight)
            .sum();
        own + self.coverage_share * covered
    }

    fn key(&self, idx: usize, value: f64) -> HeapKey {
        (
            OrderedFloat(value),
            Reverse(self.candidates[idx].point.cell()),
            Reverse(idx),
        )
    }
}

impl PlacementOptimizer for GreedyCoverageOptimizer {
    fn name(&self) -> &str {
        "greedy_coverage"
    }

    fn select(&self, candidates: &[Candidate], k: i64, policy: &PlacementPolicy) -> Selection {
        if k <= 0 {
            return Selection::empty();
        }
        let k = k as usize;
        let coverage_radius = policy.coverage_radius_meters();
        let min_separation = policy.min_separation_meters();
        let index = CandidateIndex::new(candidates);

        let mut state = GreedyState {
            candidates,
            index: &index,
            coverage_radius,
            served: vec![false; candidates.len()],
            available: candidates.iter().map(|c| c.eligible).collect(),
            coverage_share: policy.coverage_share,
        };

        let initial: Vec<HeapKey> = (0..candidates.len())
            .into_par_iter()
            .filter(|idx| state.available[*idx])
            .filter_map(|idx| {
                let value = state.marginal(idx);
                (value > 0.0).then(|| state.key(idx, value))
            })
            .collect();
        let mut heap = BinaryHeap::from(initial);

        let mut sites: Vec<SelectedSite> = Vec::with_capacity(k.min(heap.len()));
        while sites.len() < k {
            let Some((_, _, Reverse(idx))) = heap.pop() else {
                break;
            };
            if !state.available[idx] {
                continue;
            }
            let value = state.marginal(idx);
            if value <= 0.0 {
                continue;
            }
            let key = state.key(idx, value);
            if heap.peek().is_some_and(|next| key < *next) {
                // stale bound, another candidate may now be better
                heap.push(key);
                continue;
            }

            let candidate = candidates[idx];
            sites.push(SelectedSite {
                rank: sites.len(),
                candidate,
                marginal_demand: value,
            });
            state.served[idx] = true;
            for n in state.neighborhood(idx) {
                state.served[n] = true;
            }
            state.available[idx] = false;
            let (lat, lon) = (candidate.point.lat, candidate.point.lon);
            for (n, distance) in index.within(lat, lon, min_separation) {
                if distance < min_separation {
                    state.available[n] = false;
                }
            }
            log::debug!(
                "pick {} at ({:.5}, {:.5}) cell {:?} marginal demand {:.4}",
                sites.len(),
                candidate.point.lat,
                candidate.point.lon,
                candidate.point.cell(),
                value
            );
        }

        if sites.len() < k {
            log::info!("{} of {} requested sites could be placed", sites.len(), k);
        }
        Selection { sites }
    }
}
