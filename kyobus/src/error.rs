use std::path::PathBuf;

use kyobus_db::DbError;

#[derive(thiserror::Error, Debug)]
pub enum RunError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error(transparent)]
    Database(#[from] DbError),
    #[error("simulation failed: {0}")]
    SimulationFailed(String),
    #[error("failed writing results to '{path}': {message}")]
    WriteFailed { path: PathBuf, message: String },
    #[error("internal error: {0}")]
    Internal(String),
}
