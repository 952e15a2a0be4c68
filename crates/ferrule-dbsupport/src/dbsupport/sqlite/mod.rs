//! SQLite support.
//!
//! In SQLite a schema is an attached database (`main`, `temp` or anything
//! added with `ATTACH`). Schemas cannot be created or dropped through SQL, and
//! there is no notion of a connected user.

mod rules;
mod schema;
mod table;

pub use rules::SqliteStatementRules;
pub use schema::SqliteSchema;
pub use table::SqliteTable;

use async_trait::async_trait;
use ferrule_core::SqlStatementBuilder;
use tracing::info;

use super::{DbSupport, Schema};
use crate::error::Result;
use crate::executor::{QueryExecutor, SqlRunner};

/// SQLite dialect adapter bound to one connection.
#[derive(Debug, Clone, Copy)]
pub struct SqliteDbSupport<'c> {
    runner: SqlRunner<'c>,
}

impl<'c> SqliteDbSupport<'c> {
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
    pub fn sqlite_schema(&self, name: &str) -> SqliteSchema<'_> {
        SqliteSchema::new(self, name)
    }
}

#[async_trait]
impl DbSupport for SqliteDbSupport<'_> {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn current_user_function(&self) -> &'static str {
        "''"
    }

    async fn current_user_name(&self) -> Result<String> {
        Ok(String::new())
    }

    async fn current_schema_name(&self) -> Result<Option<String>> {
        Ok(Some("main".to_string()))
    }

    async fn change_current_schema_to(&self, schema: Option<&str>) -> Result<()> {
        info!(
            schema = schema.unwrap_or("<none>"),
            "SQLite does not support setting the schema, default schema not changed"
        );
        Ok(())
    }

    fn supports_ddl_transactions(&self) -> bool {
        true
    }

    fn boolean_true(&self) -> &'static str {
        "1"
    }

    fn boolean_false(&self) -> &'static str {
        "0"
    }

    fn quote(&self, identifier: &str) -> String {
        format!("\"{identifier}\"")
    }

    fn schema<'a>(&'a self, name: &str) -> Box<dyn Schema + 'a> {
        Box::new(self.sqlite_schema(name))
    }

    fn catalog_is_schema(&self) -> bool {
        true
    }

    fn statement_builder(&self) -> SqlStatementBuilder {
        SqlStatementBuilder::new(Box::new(SqliteStatementRules::new()))
    }
}
