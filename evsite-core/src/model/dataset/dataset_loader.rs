use super::DatasetContents;
use crate::model::EngineError;

/// loads the external datasets. a loader that cannot reach or parse a dataset reports
/// [`EngineError::DatasetUnavailable`] and never substitutes empty data.
pub trait DatasetLoader: Send + Sync {
    fn load(&self) -> Result<DatasetContents, EngineError>;
}

impl<F> DatasetLoader for F
where
    F: Fn() -> Result<DatasetContents, EngineError> + Send + Sync,
{
    fn load(&self) -> Result<DatasetContents, EngineError> {
        self()
    }
}
