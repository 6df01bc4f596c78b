use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("Log file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to rotate {path:?}: {source}")]
    Rotation {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Logging pipeline is stopped")]
    Stopped,

    #[error("Failed to spawn logger worker: {0}")]
    WorkerSpawn(std::io::Error),
}
