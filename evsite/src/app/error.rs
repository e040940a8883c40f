use evsite_core::model::EngineError;
use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum EvsiteAppError {
    #[error("Invalid input: {0}")]
    InvalidUserInput(String),
    #[error("Failed to read configuration file '{path}': {source}")]
    Configuration {
        path: PathBuf,
        source: config::ConfigError,
    },
    #[error("Error reading from '{path}': {message}")]
    ReadError { path: PathBuf, message: String },
    #[error("Error writing to '{path}': {message}")]
    WriteError { path: PathBuf, message: String },
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("{0}")]
    InternalError(String),
}
