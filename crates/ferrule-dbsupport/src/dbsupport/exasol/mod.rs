//! Exasol support.
//!
//! Exasol keeps catalog and schema as separate levels, does not run DDL
//! inside transactions, and ties every schema to a user account of the same
//! name. Catalog information comes from the `SYS.EXA_*` system views; scalar
//! expressions are evaluated against the single-row `DUAL` table.

mod rules;
mod schema;
mod table;

pub use rules::ExasolStatementRules;
pub use schema::ExasolSchema;
pub use table::ExasolTable;

use async_trait::async_trait;
use ferrule_core::SqlStatementBuilder;
use tracing::debug;

use super::{DbSupport, Schema};
use crate::error::Result;
use crate::executor::{QueryExecutor, SqlRunner};

/// Exasol dialect adapter bound to one connection.
#[derive(Debug, Clone, Copy)]
pub struct ExasolDbSupport<'c> {
    runner: SqlRunner<'c>,
}

impl<'c> ExasolDbSupport<'c> {
    /// Creates a new adapter over the given connection.
    #[must_use]
    pub fn new(executor: &'c dyn QueryExecutor) -> Self {
        Self {
            runner: SqlRunner::new(executor),
        }
    }

    pub(crate) const fn runner(&self) -> &SqlRunner<'c> {
        &self.runner
    }

    /// Returns a typed handle on the named schema. Performs no I/O.
    #[must_use]
    pub fn exasol_schema(&self, name: &str) -> ExasolSchema<'_> {
        ExasolSchema::new(self, name)
    }

    /// Checks whether `query` returns at least one row.
    ///
    /// The query is wrapped in `EXISTS()` and evaluated against `DUAL`, so the
    /// server stops at the first row and the client never fetches more than
    /// one. `query` must therefore be valid inside `EXISTS(...)`.
    pub async fn query_returns_rows(&self, query: &str, params: &[&str]) -> Result<bool> {
        let sql = format!("SELECT CASE WHEN EXISTS({query}) THEN 1 ELSE 0 END FROM DUAL");
        self.runner.query_for_boolean(&sql, params).await
    }
}

#[async_trait]
impl DbSupport for ExasolDbSupport<'_> {
    fn name(&self) -> &'static str {
        "exasol"
    }

    fn current_user_function(&self) -> &'static str {
        "CURRENT_USER"
    }

    async fn current_user_name(&self) -> Result<String> {
        let user = self
            .runner
            .query_for_string("SELECT USER FROM DUAL", &[])
            .await
            .map_err(|e| e.with_message("Unable to retrieve the current user for the connection"))?;
        Ok(user.unwrap_or_default())
    }

    async fn current_schema_name(&self) -> Result<Option<String>> {
        self.runner
            .query_for_string("SELECT CURRENT_SCHEMA FROM DUAL", &[])
            .await
            .map_err(|e| e.with_message("Unable to retrieve the current schema for the connection"))
    }

    async fn change_current_schema_to(&self, schema: Option<&str>) -> Result<()> {
        match schema.filter(|name| !name.is_empty()) {
            Some(name) => {
                debug!(schema = %name, "Opening schema");
                self.runner
                    .execute(&format!("OPEN SCHEMA {}", self.quote(name)))
                    .await
                    .map_err(|e| {
                        e.with_message(format!("Error setting current schema to {}", self.quote(name)))
                    })
            }
            None => {
                debug!("Closing current schema");
                self.runner
                    .execute("CLOSE SCHEMA")
                    .await
                    .map_err(|e| e.with_message("Error closing the current schema"))
            }
        }
    }

    fn supports_ddl_transactions(&self) -> bool {
        false
    }

    fn boolean_true(&self) -> &'static str {
        "1"
    }

    fn boolean_false(&self) -> &'static str {
        "0"
    }

    /// Wraps the identifier in double quotes. Embedded quotes are not escaped.
    fn quote(&self, identifier: &str) -> String {
        format!("\"{identifier}\"")
    }

    fn schema<'a>(&'a self, name: &str) -> Box<dyn Schema + 'a> {
        Box::new(self.exasol_schema(name))
    }

    fn catalog_is_schema(&self) -> bool {
        false
    }

    fn statement_builder(&self) -> SqlStatementBuilder {
        SqlStatementBuilder::new(Box::new(ExasolStatementRules::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExecutionError;

    /// Executor that must never be reached.
    struct Unreachable;

    #[async_trait]
    impl QueryExecutor for Unreachable {
        async fn query_for_string(
            &self,
            sql: &str,
            _: &[&str],
        ) -> std::result::Result<Option<String>, ExecutionError> {
            panic!("unexpected query: {sql}")
        }

        async fn query_for_string_list(
            &self,
            sql: &str,
            _: &[&str],
        ) -> std::result::Result<Vec<String>, ExecutionError> {
            panic!("unexpected query: {sql}")
        }

        async fn query_for_boolean(
            &self,
            sql: &str,
            _: &[&str],
        ) -> std::result::Result<bool, ExecutionError> {
            panic!("unexpected query: {sql}")
        }

        async fn execute(&self, sql: &str, _: &[&str]) -> std::result::Result<(), ExecutionError> {
            panic!("unexpected statement: {sql}")
        }
    }

    #[test]
    fn test_exasol_capabilities() {
        let support = ExasolDbSupport::new(&Unreachable);
        assert_eq!(support.name(), "exasol");
        assert_eq!(support.current_user_function(), "CURRENT_USER");
        assert!(!support.supports_ddl_transactions());
        assert!(!support.catalog_is_schema());
        assert_eq!(support.boolean_true(), "1");
        assert_eq!(support.boolean_false(), "0");
    }

    #[test]
    fn test_quote_does_not_escape() {
        let support = ExasolDbSupport::new(&Unreachable);
        for identifier in ["users", "MixedCase", "with space", "a\"b", "\"", ""] {
            assert_eq!(support.quote(identifier), format!("\"{identifier}\""));
        }
        assert_eq!(support.quote("a\"b"), "\"a\"b\"");
    }

    #[test]
    fn test_quote_qualified() {
        let support = ExasolDbSupport::new(&Unreachable);
        assert_eq!(support.quote_qualified(&["APP", "users"]), "\"APP\".\"users\"");
    }

    #[test]
    fn test_schema_factory_does_no_io() {
        let support = ExasolDbSupport::new(&Unreachable);
        let schema = support.schema("APP");
        assert_eq!(schema.name(), "APP");
        assert_eq!(schema.to_string(), "\"APP\"");

        let table = schema.table("ORDERS");
        assert_eq!(table.name(), "ORDERS");
        assert_eq!(table.schema_name(), "APP");
        assert_eq!(table.to_string(), "\"APP\".\"ORDERS\"");
    }
}
