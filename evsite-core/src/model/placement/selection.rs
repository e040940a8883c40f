use crate::model::infrastructure::Candidate;
use serde::Serialize;

/// a chosen site and the demand it contributed at the moment it was chosen.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SelectedSite {
    /// zero-based pick order
    pub rank: usize,
    pub candidate: Candidate,
    pub marginal_demand: f64,
}

/// the ordered result of a placement run. may be shorter than the requested count.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Selection {
    pub sites: Vec<SelectedSite>,
}

impl Selection {
    pub fn empty() -> Selection {
        Selection { sites: vec![] }
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SelectedSite> {
        self.sites.iter()
    }

    pub fn total_marginal_demand(&self) -> f64 {
        self.sites.iter().map(|s| s.marginal_demand).sum()
    }
}
