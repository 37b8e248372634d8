use postgres::error::SqlState;

#[derive(thiserror::Error, Debug)]
pub enum DbError {
    #[error("database unavailable: {0}")]
    DatabaseUnavailable(String),
    #[error("permission denied: {0}")]
    PermissionDenied(String),
    #[error("dump load failed while {context}: {message}")]
    LoadFailed { context: String, message: String },
}

/// maps a server-side failure to the pipeline taxonomy. SQLSTATE 42501
/// (insufficient privilege) becomes `PermissionDenied`; everything else is
/// treated as the database being unavailable for this run.
pub fn classify_db_error(error: postgres::Error, what: &str) -> DbError {
    if error.code() == Some(&SqlState::INSUFFICIENT_PRIVILEGE) {
        DbError::PermissionDenied(format!("{what}: {error}"))
    } else {
        DbError::DatabaseUnavailable(format!("{what}: {error}"))
    }
}

pub fn load_failed(context: impl Into<String>, message: impl Into<String>) -> DbError {
    DbError::LoadFailed {
        context: context.into(),
        message: message.into(),
    }
}
