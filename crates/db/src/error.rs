//! Store-level failure taxonomy for the submission gateway.

/// What went wrong while persisting a submission.
///
/// Every variant maps to a distinct user-facing message category in the
/// HTTP layer; raw driver errors stay in the source chain for logging.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// A record with the same contact name (case-insensitively) exists.
    #[error("Contact '{0}' already exists")]
    DuplicateContact(String),

    /// The store is unreachable, credentials were rejected, or the pool
    /// could not hand out a connection.
    #[error("Database unavailable")]
    ConnectionUnavailable(#[source] sqlx::Error),

    /// The insert completed without error but affected zero rows.
    #[error("Insert affected no rows")]
    SilentInsertFailure,

    /// Catch-all for driver-level failures not otherwise classified.
    #[error("Database error")]
    Unknown(#[source] sqlx::Error),
}

impl SubmitError {
    /// Classify a driver error raised during submission.
    ///
    /// A unique violation (Postgres `23505`) on a `uq_`-prefixed
    /// constraint is the authoritative duplicate signal: it catches the
    /// race two concurrent submissions can win past the pre-check.
    pub fn classify(nombre_contacto: &str, err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Configuration(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed => SubmitError::ConnectionUnavailable(err),
            sqlx::Error::Database(ref db_err) => {
                if db_err.code().as_deref() == Some("23505")
                    && db_err.constraint().is_some_and(|c| c.starts_with("uq_"))
                {
                    return SubmitError::DuplicateContact(nombre_contacto.to_string());
                }
                SubmitError::Unknown(err)
            }
            other => SubmitError::Unknown(other),
        }
    }
}
