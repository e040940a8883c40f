mod candidate_index;
mod greedy_coverage;
mod placement_optimizer;
mod placement_policy;
mod selection;
mod separation_policy;

pub use candidate_index::CandidateIndex;
pub use greedy_coverage::GreedyCoverageOptimizer;
pub use placement_optimizer::PlacementOptimizer;
pub use placement_policy::PlacementPolicy;
pub use selection::{SelectedSite, Selection};
pub use separation_policy::SeparationPolicy;
