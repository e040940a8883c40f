use super::DatasetContents;
use chrono::{DateTime, Utc};

/// an immutable, versioned view of the external datasets. requests hold an `Arc` to the
/// snapshot they started with, so a reload never changes data under a running request.
pub struct DatasetSnapshot {
    pub version: u64,
    pub loaded_at: DateTime<Utc>,
    pub contents: DatasetContents,
}
