use super::EvsiteAppError;
use crate::{config::EvsiteConfig, io::FileDatasetLoader};
use evsite_core::model::{
    dataset::DatasetStore,
    engine::{OptimizationEngine, OptimizationRequest, OptimizationResponse},
};
use std::{path::Path, sync::Arc};

/// loads the configured datasets into a store and wraps it in an engine.
pub fn build_engine(config: &EvsiteConfig) -> Result<OptimizationEngine, EvsiteAppError> {
    let loader = FileDatasetLoader::new(config.datasets.clone());
    let store = DatasetStore::new(Box::new(loader))?;
    Ok(OptimizationEngine::new(config.placement, Arc::new(store)))
}

/// runs a single request, writing the map to `output` and optionally the selected sites
/// as JSON to `metadata`.
pub fn run(
    config: &EvsiteConfig,
    request: &OptimizationRequest,
    output: &Path,
    metadata: Option<&Path>,
) -> Result<OptimizationResponse, EvsiteAppError> {
    let engine = build_engine(config)?;
    let response = engine.optimize(request)?;
    write_file(output, &response.document.html)?;
    if let Some(metadata_path) = metadata {
        let json = serde_json::to_string_pretty(&response.metadata).map_err(|e| {
            EvsiteAppError::InternalError(format!("failure serializing metadata: {e}"))
        })?;
        write_file(metadata_path, &json)?;
    }
    Ok(response)
}

pub(super) fn write_file(path: &Path, contents: &str) -> Result<(), EvsiteAppError> {
    std::fs::write(path, contents).map_err(|e| EvsiteAppError::WriteError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
