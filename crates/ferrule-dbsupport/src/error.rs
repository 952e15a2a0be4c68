//! Error types for dialect support.

/// Failure reported by a [`QueryExecutor`](crate::executor::QueryExecutor).
///
/// This is the raw driver-level error. It never leaves the crate on its own:
/// the [`SqlRunner`](crate::executor::SqlRunner) wraps it into
/// [`DbSupportError::Execution`] together with the failing statement.
#[derive(Debug, thiserror::Error)]
pub enum ExecutionError {
    /// Error raised by the sqlx driver.
    #[error("Database error: {0}")]
    Driver(#[from] sqlx::Error),

    /// Error raised by an executor that is not backed by sqlx.
    #[error("{0}")]
    Other(String),
}

/// Errors that can occur while talking to a database through a dialect adapter.
#[derive(Debug, thiserror::Error)]
pub enum DbSupportError {
    /// A statement or query failed to execute.
    #[error("{message} [{statement}]: {source}")]
    Execution {
        /// What the adapter was trying to do.
        message: String,
        /// The statement that failed.
        statement: String,
        /// The underlying executor failure.
        #[source]
        source: ExecutionError,
    },

    /// The dialect deliberately does not implement this operation.
    #[error("{operation} is not supported for {dialect}")]
    Unsupported {
        /// Dialect name.
        dialect: &'static str,
        /// Operation name.
        operation: &'static str,
    },

    /// No adapter exists for the requested engine.
    #[error("Unknown database engine: {0}")]
    UnknownEngine(String),
}

impl DbSupportError {
    pub(crate) fn execution(statement: &str, source: ExecutionError) -> Self {
        Self::Execution {
            message: "Unable to execute statement".to_string(),
            statement: statement.to_string(),
            source,
        }
    }

    /// Replaces the message of an execution failure; other variants pass through.
    #[must_use]
    pub fn with_message(self, message: impl Into<String>) -> Self {
        match self {
            Self::Execution {
                statement, source, ..
            } => Self::Execution {
                message: message.into(),
                statement,
                source,
            },
            other => other,
        }
    }

    /// Returns the failing statement, if this is an execution failure.
    #[must_use]
    pub fn statement(&self) -> Option<&str> {
        match self {
            Self::Execution { statement, .. } => Some(statement),
            _ => None,
        }
    }

    /// Returns whether the operation is unsupported by the dialect.
    #[must_use]
    pub const fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }
}

/// Result type for dialect operations.
pub type Result<T> = std::result::Result<T, DbSupportError>;
