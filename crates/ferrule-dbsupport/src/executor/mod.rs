//! Query execution.
//!
//! [`QueryExecutor`] is the seam between dialect adapters and a live
//! connection. Adapters never call it directly: they go through
//! [`SqlRunner`], which logs every statement and turns executor failures
//! into [`DbSupportError::Execution`] carrying the statement text.

mod sqlite;

pub use sqlite::SqliteExecutor;

use async_trait::async_trait;
use tracing::debug;

use crate::error::{DbSupportError, ExecutionError, Result};

/// Executes SQL against a live connection.
///
/// Parameters are positional and bound in order. Implementations perform one
/// round trip per call and do no retrying.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    /// Returns the first column of the first row, or `None` for no row or NULL.
    async fn query_for_string(
        &self,
        sql: &str,
        params: &[&str],
    ) -> std::result::Result<Option<String>, ExecutionError>;

    /// Returns the first column of every row.
    async fn query_for_string_list(
        &self,
        sql: &str,
        params: &[&str],
    ) -> std::result::Result<Vec<String>, ExecutionError>;

    /// Returns the first column of the first row as a boolean (non-zero is true).
    ///
    /// A query returning no row yields `false`.
    async fn query_for_boolean(
        &self,
        sql: &str,
        params: &[&str],
    ) -> std::result::Result<bool, ExecutionError>;

    /// Executes a statement, discarding any result.
    async fn execute(&self, sql: &str, params: &[&str]) -> std::result::Result<(), ExecutionError>;
}

/// Borrowed executor that logs statements and wraps their failures.
#[derive(Clone, Copy)]
pub struct SqlRunner<'c> {
    executor: &'c dyn QueryExecutor,
}

impl<'c> SqlRunner<'c> {
    /// Creates a new runner over the given executor.
    #[must_use]
    pub fn new(executor: &'c dyn QueryExecutor) -> Self {
        Self { executor }
    }

    /// See [`QueryExecutor::query_for_string`].
    pub async fn query_for_string(&self, sql: &str, params: &[&str]) -> Result<Option<String>> {
        debug!(sql = %sql, params = params.len(), "Executing query");
        self.executor
            .query_for_string(sql, params)
            .await
            .map_err(|e| DbSupportError::execution(sql, e))
    }

    /// See [`QueryExecutor::query_for_string_list`].
    pub async fn query_for_string_list(&self, sql: &str, params: &[&str]) -> Result<Vec<String>> {
        debug!(sql = %sql, params = params.len(), "Executing query");
        self.executor
            .query_for_string_list(sql, params)
            .await
            .map_err(|e| DbSupportError::execution(sql, e))
    }

    /// See [`QueryExecutor::query_for_boolean`].
    pub async fn query_for_boolean(&self, sql: &str, params: &[&str]) -> Result<bool> {
        debug!(sql = %sql, params = params.len(), "Executing query");
        self.executor
            .query_for_boolean(sql, params)
            .await
            .map_err(|e| DbSupportError::execution(sql, e))
    }

    /// See [`QueryExecutor::execute`].
    pub async fn execute(&self, sql: &str) -> Result<()> {
        debug!(sql = %sql, "Executing SQL");
        self.executor
            .execute(sql, &[])
            .await
            .map_err(|e| DbSupportError::execution(sql, e))
    }
}

impl std::fmt::Debug for SqlRunner<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqlRunner").finish_non_exhaustive()
    }
}
