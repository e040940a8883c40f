use super::{DatasetContents, DatasetLoader, DatasetSnapshot};
use crate::model::{demand::DemandSource, EngineError};
use std::sync::{Arc, Mutex, RwLock};

/// process-wide holder of the current dataset snapshot.
///
/// readers clone the current `Arc` and release the lock immediately. [`DatasetStore::reload`]
/// loads a new snapshot without holding the lock and then swaps the pointer, so readers
/// only ever wait for a pointer assignment. reloads are serialized by `reload_guard`.
pub struct DatasetStore {
    loader: Box<dyn DatasetLoader>,
    current: RwLock<Arc<DatasetSnapshot>>,
    reload_guard: Mutex<()>,
}

impl DatasetStore {
    /// creates the store and loads the first snapshot (version 1). fails if any dataset
    /// is unavailable.
    pub fn new(loader: Box<dyn DatasetLoader>) -> Result<DatasetStore, EngineError> {
        let contents = loader.load()?;
        let snapshot = DatasetStore::snapshot(1, contents);
        Ok(DatasetStore {
            loader,
            current: RwLock::new(Arc::new(snapshot)),
            reload_guard: Mutex::new(()),
        })
    }

    /// store over fixed contents. reloading reproduces nothing new, so reload is rejected.
    pub fn from_contents(contents: DatasetContents) -> DatasetStore {
        let loader = || -> Result<DatasetContents, EngineError> {
            Err(EngineError::dataset_unavailable(
                "static",
                String::from("store was created from in-memory contents and cannot reload"),
            ))
        };
        DatasetStore {
            loader: Box::new(loader),
            current: RwLock::new(Arc::new(DatasetStore::snapshot(1, contents))),
            reload_guard: Mutex::new(()),
        }
    }

    /// the snapshot new requests should use.
    pub fn current(&self) -> Arc<DatasetSnapshot> {
        match self.current.read() {
            Ok(guard) => guard.clone(),
            // a poisoned lock still holds a complete pointer
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// reloads all datasets and swaps them in. on failure the previous snapshot stays
    /// current and the error is returned.
    ///
    /// # Returns
    ///
    /// * the version of the newly installed snapshot
    pub fn reload(&self) -> Result<u64, EngineError> {
        let _guard = match self.reload_guard.lock() {
            Ok(g) => g,
            Err(poisoned) => poisoned.into_inner(),
        };
        let contents = self.loader.load().map_err(|e| {
            let version = self.current().version;
            log::error!("dataset reload failed, keeping version {version}: {e}");
            e
        })?;
        let version = self.current().version + 1;
        let snapshot = Arc::new(DatasetStore::snapshot(version, contents));
        match self.current.write() {
            Ok(mut guard) => *guard = snapshot,
            Err(poisoned) => *poisoned.into_inner() = snapshot,
        }
        log::info!("installed dataset snapshot version {version}");
        Ok(version)
    }

    fn snapshot(version: u64, contents: DatasetContents) -> DatasetSnapshot {
        log::info!(
            "dataset snapshot {}: {} stations, demand source '{}', {} exclusion polygons",
            version,
            contents.stations.len(),
            contents.demand.name(),
            contents.exclusions.len()
        );
        DatasetSnapshot {
            version,
            loaded_at: chrono::Utc::now(),
            contents,
        }
    }
}
