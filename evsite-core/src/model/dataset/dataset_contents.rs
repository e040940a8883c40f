use crate::model::{
    demand::DemandDataset,
    infrastructure::{ExclusionMask, StationRegistry},
};

/// the external datasets a request pipeline reads from.
pub struct DatasetContents {
    pub stations: StationRegistry,
    pub demand: DemandDataset,
    pub exclusions: ExclusionMask,
    /// optional region outline drawn on rendered maps
    pub boundary: Option<geo::Geometry<f64>>,
}

impl DatasetContents {
    pub fn new(stations: StationRegistry, demand: DemandDataset) -> DatasetContents {
        DatasetContents {
            stations,
            demand,
            exclusions: ExclusionMask::empty(),
            boundary: None,
        }
    }

    pub fn with_exclusions(mut self, exclusions: ExclusionMask) -> DatasetContents {
        self.exclusions = exclusions;
        self
    }

    pub fn with_boundary(mut self, boundary: Option<geo::Geometry<f64>>) -> DatasetContents {
        self.boundary = boundary;
        self
    }
}
