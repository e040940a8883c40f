#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    #[error("invalid bounds, field '{field}': {message}")]
    InvalidBounds { field: String, message: String },
    #[error("dataset '{dataset}' is unavailable: {message}")]
    DatasetUnavailable { dataset: String, message: String },
    #[error("failure rendering map document: {0}")]
    Render(String),
}

impl EngineError {
    pub fn invalid_bounds(field: &str, message: String) -> EngineError {
        EngineError::InvalidBounds {
            field: field.to_string(),
            message,
        }
    }

    pub fn dataset_unavailable(dataset: &str, message: String) -> EngineError {
        EngineError::DatasetUnavailable {
            dataset: dataset.to_string(),
            message,
        }
    }
}
