/// Error type for connector and health-check operations
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// Driver-level MongoDB failure (URI parsing, client construction)
    #[cfg(feature = "mongodb")]
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    /// Server did not answer the connection check
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Server answered the health check with an error
    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
