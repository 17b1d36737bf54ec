use thiserror::Error;

/// Error type for veneer operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Establishing the database connection failed.
    #[error("Connection failed: {0}")]
    Connection(String),

    /// The driver reported a failure while executing a statement. The
    /// driver's message is passed through unmodified.
    #[error("Query failed: {0}")]
    Query(String),

    /// A RETURNING statement was expected to produce rows and produced none.
    #[error("Expected {expected} row(s), got {actual}")]
    UnexpectedRows { expected: usize, actual: usize },

    /// A decoder asked for a column the result set does not contain.
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    /// A column value could not be parsed into the requested type.
    #[error("Failed to decode column '{column}': {message}")]
    Decode { column: String, message: String },
}

/// Result type alias for veneer operations.
pub type Result<T> = std::result::Result<T, Error>;
