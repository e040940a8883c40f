use super::{PlacementPolicy, Selection};
use crate::model::infrastructure::Candidate;

/// selects new station sites from annotated candidates. implementations must be
/// deterministic: the same candidates, count and policy always produce the same selection.
pub trait PlacementOptimizer: Send + Sync {
    fn name(&self) -> &str;

    /// chooses up to `k` eligible candidates. a non-positive `k` yields an empty selection,
    /// and a shortage of eligible candidates yields a short selection, never an error.
    fn select(&self, candidates: &[Candidate], k: i64, policy: &PlacementPolicy) -> Selection;
}
