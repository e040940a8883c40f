use super::{read_boundary, read_observations, read_polygons, read_stations};
use crate::config::{DatasetConfig, DemandConfig};
use evsite_core::model::{
    dataset::{DatasetContents, DatasetLoader},
    demand::{DemandDataset, PointDensityDemand},
    infrastructure::{ExclusionMask, StationRegistry},
    EngineError,
};
use uom::si::{f64::Length, length::meter};

/// loads every dataset from the files named in a [`DatasetConfig`]. each call re-reads
/// the files, so a [`evsite_core::model::dataset::DatasetStore`] reload picks up changes.
pub struct FileDatasetLoader {
    config: DatasetConfig,
}

impl FileDatasetLoader {
    pub fn new(config: DatasetConfig) -> FileDatasetLoader {
        FileDatasetLoader { config }
    }
}

impl DatasetLoader for FileDatasetLoader {
    fn load(&self) -> Result<DatasetContents, EngineError> {
        let stations = read_stations(&self.config.stations_file)?;
        let demand = match &self.config.demand {
            DemandConfig::Uniform { weight } => DemandDataset::Uniform { weight: *weight },
            DemandConfig::Observations {
                file,
                kernel_radius_meters,
            } => {
                let observations = read_observations(file)?;
                let name = file
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("observations");
                DemandDataset::PointDensity(PointDensityDemand::new(
                    name,
                    &observations,
                    Length::new::<meter>(*kernel_radius_meters),
                ))
            }
            DemandConfig::StationDensity {
                kernel_radius_meters,
            } => DemandDataset::PointDensity(PointDensityDemand::from_stations(
                &stations,
                Length::new::<meter>(*kernel_radius_meters),
            )),
        };
        let exclusions = match &self.config.exclusion_file {
            Some(file) => ExclusionMask::new(read_polygons(file, "exclusions")?),
            None => ExclusionMask::empty(),
        };
        let boundary = match &self.config.boundary_file {
            Some(file) => Some(read_boundary(file, "boundary")?),
            None => None,
        };
        Ok(DatasetContents::new(StationRegistry::new(stations), demand)
            .with_exclusions(exclusions)
            .with_boundary(boundary))
    }
}

#[cfg(test)]
mod tests {
    use super::FileDatasetLoader;
    use crate::{
        config::{DatasetConfig, DemandConfig},
        io::test_util::write_temp,
    };
    use evsite_core::model::{
        dataset::{DatasetLoader, DatasetStore},
        demand::DemandSource,
        EngineError,
    };
    use std::path::PathBuf;

    #[test]
    fn test_station_density_demand() {
        let stations = write_temp(
            "loader-stations.csv",
            "latitude,longitude,capacity\n10.0,78.0,2\n10.1,78.1,\n",
        );
        let loader = FileDatasetLoader::new(DatasetConfig {
            stations_file: stations,
            demand: DemandConfig::default(),
            exclusion_file: None,
            boundary_file: None,
        });
        let contents = loader.load().unwrap();
        assert_eq!(contents.stations.len(), 2);
        assert!(contents.demand.sample(10.05, 78.05).is_some_and(|w| w > 0.0));
        assert_eq!(contents.demand.sample(12.0, 80.0), None);
        assert!(contents.exclusions.is_empty());
        assert!(contents.boundary.is_none());
    }

    #[test]
    fn test_missing_demand_file_is_unavailable() {
        let stations = write_temp("loader-stations-2.csv", "latitude,longitude\n10.0,78.0\n");
        let loader = FileDatasetLoader::new(DatasetConfig {
            stations_file: stations,
            demand: DemandConfig::Observations {
                file: PathBuf::from("/nonexistent/demand.csv"),
                kernel_radius_meters: 1000.0,
            },
            exclusion_file: None,
            boundary_file: None,
        });
        let error = DatasetStore::new(Box::new(loader)).err();
        assert!(matches!(
            error,
            Some(EngineError::DatasetUnavailable { ref dataset, .. }) if dataset == "demand"
        ));
    }
}
