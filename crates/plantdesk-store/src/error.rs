use std::path::PathBuf;

use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{resource} {id} already exists")]
    DuplicateId { resource: &'static str, id: Uuid },

    #[error("{0}")]
    Conflict(String),

    #[error("failed to access fixture {path}: {source}")]
    FixtureIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid fixture {path}: {source}")]
    FixtureFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
