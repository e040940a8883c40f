mod dataset_contents;
mod dataset_loader;
mod dataset_snapshot;
mod dataset_store;

pub use dataset_contents::DatasetContents;
pub use dataset_loader::DatasetLoader;
pub use dataset_snapshot::DatasetSnapshot;
pub use dataset_store::DatasetStore;
