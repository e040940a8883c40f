use evsite_core::model::{infrastructure::ExistingStation, EngineError};
use serde::Deserialize;
use std::path::Path;

const DATASET: &str = "stations";

#[derive(Deserialize)]
struct StationRow {
    #[serde(default)]
    id: Option<String>,
    #[serde(alias = "lat")]
    latitude: f64,
    #[serde(alias = "lon")]
    longitude: f64,
    #[serde(default)]
    capacity: Option<u32>,
}

/// reads the existing station registry from a CSV file with `latitude` and `longitude`
/// columns and optional `id` and `capacity` columns. rows without an id are identified by
/// their position in the file. other columns are ignored.
pub fn read_stations(path: &Path) -> Result<Vec<ExistingStation>, EngineError> {
    let filename = path.to_str().unwrap_or_default();
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| {
            EngineError::dataset_unavailable(DATASET, format!("failed to load {filename}: {e}"))
        })?;
    let mut stations = vec![];
    for (idx, row) in reader.deserialize::<StationRow>().enumerate() {
        let row = row.map_err(|e| {
            EngineError::dataset_unavailable(
                DATASET,
                format!("failed to parse row {idx} of {filename}: {e}"),
            )
        })?;
        let id = match row.id {
            Some(id) if !id.is_empty() => id,
            _ => format!("station-{idx}"),
        };
        stations.push(ExistingStation::new(
            &id,
            row.latitude,
            row.longitude,
            row.capacity,
        ));
    }
    log::info!("read {} stations from {filename}", stations.len());
    Ok(stations)
}

#[cfg(test)]
mod tests {
    use super::read_stations;
    use crate::io::test_util::write_temp;
    use evsite_core::model::EngineError;
    use std::path::Path;

    #[test]
    fn test_optional_columns() {
        let path = write_temp(
            "stations-optional.csv",
            "id,latitude,longitude,capacity,operator\n\
             a,10.0,78.0,4,x\n\
             ,11.0,79.0,,y\n",
        );
        let stations = read_stations(&path).unwrap();
        assert_eq!(stations.len(), 2);
        assert_eq!(stations[0].id, "a");
        assert_eq!(stations[0].capacity, Some(4));
        assert_eq!(stations[1].id, "station-1");
        assert_eq!(stations[1].capacity, None);
    }

    #[test]
    fn test_coordinates_only() {
        let path = write_temp("stations-coords.csv", "latitude,longitude\n9.5,77.25\n");
        let stations = read_stations(&path).unwrap();
        assert_eq!(stations.len(), 1);
        assert_eq!(stations[0].id, "station-0");
        assert_eq!((stations[0].lat, stations[0].lon), (9.5, 77.25));
    }

    #[test]
    fn test_unparseable_row() {
        let path = write_temp("stations-bad.csv", "latitude,longitude\nnorth,77.25\n");
        assert!(matches!(
            read_stations(&path),
            Err(EngineError::DatasetUnavailable { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(read_stations(Path::new("/nonexistent/stations.csv")).is_err());
    }
}
