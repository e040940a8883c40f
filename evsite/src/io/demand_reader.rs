use evsite_core::model::{demand::DemandObservation, EngineError};
use std::path::Path;

const DATASET: &str = "demand";

/// reads weighted demand observations from a CSV file with `latitude`, `longitude` and
/// `weight` columns.
pub fn read_observations(path: &Path) -> Result<Vec<DemandObservation>, EngineError> {
    let filename = path.to_str().unwrap_or_default();
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| {
            EngineError::dataset_unavailable(DATASET, format!("failed to load {filename}: {e}"))
        })?;
    let observations = reader
        .deserialize::<DemandObservation>()
        .enumerate()
        .map(|(idx, row)| {
            row.map_err(|e| {
                EngineError::dataset_unavailable(
                    DATASET,
                    format!("failed to parse row {idx} of {filename}: {e}"),
                )
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    log::info!(
        "read {} demand observations from {filename}",
        observations.len()
    );
    Ok(observations)
}
