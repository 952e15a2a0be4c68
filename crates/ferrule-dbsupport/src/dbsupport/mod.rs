//! The dialect capability contract.
//!
//! A migration engine obtains one [`DbSupport`] per connection and drives
//! every schema operation through it. Each engine implements the contract
//! independently; [`crate::engine::db_support`] picks the implementation once.

pub mod exasol;
pub mod sqlite;

pub use exasol::{ExasolDbSupport, ExasolSchema, ExasolStatementRules, ExasolTable};
pub use sqlite::{SqliteDbSupport, SqliteSchema, SqliteStatementRules, SqliteTable};

use std::fmt;

use async_trait::async_trait;
use ferrule_core::SqlStatementBuilder;

use crate::error::Result;

/// Per-connection capabilities of a database engine.
#[async_trait]
pub trait DbSupport: Send + Sync {
    /// Returns the engine identifier.
    fn name(&self) -> &'static str;

    /// Returns the SQL expression for the current user.
    fn current_user_function(&self) -> &'static str;

    /// Retrieves the user of the connection.
    async fn current_user_name(&self) -> Result<String>;

    /// Retrieves the name of the current schema, `None` when no schema is open.
    async fn current_schema_name(&self) -> Result<Option<String>>;

    /// Returns the current schema, `None` when no schema is open.
    async fn current_schema<'a>(&'a self) -> Result<Option<Box<dyn Schema + 'a>>> {
        let name = self.current_schema_name().await?;
        Ok(name.map(|name| self.schema(&name)))
    }

    /// Sets the default schema of the connection; `None` or an empty name resets it.
    async fn change_current_schema_to(&self, schema: Option<&str>) -> Result<()>;

    /// Returns whether DDL statements can run inside a transaction.
    fn supports_ddl_transactions(&self) -> bool;

    /// Literal used for `true` when embedding booleans in SQL.
    fn boolean_true(&self) -> &'static str;

    /// Literal used for `false` when embedding booleans in SQL.
    fn boolean_false(&self) -> &'static str;

    /// Quotes an identifier.
    fn quote(&self, identifier: &str) -> String;

    /// Quotes each part and joins them with `.`.
    fn quote_qualified(&self, parts: &[&str]) -> String {
        parts
            .iter()
            .map(|part| self.quote(part))
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Returns a handle on the named schema. Performs no I/O.
    fn schema<'a>(&'a self, name: &str) -> Box<dyn Schema + 'a>;

    /// Returns whether the catalog level doubles as the schema level.
    fn catalog_is_schema(&self) -> bool;

    /// Creates a builder splitting migration scripts for this dialect.
    fn statement_builder(&self) -> SqlStatementBuilder;
}

/// A schema reached through a [`DbSupport`].
///
/// Nothing is cached: every query goes to the live connection, so two calls
/// may disagree when the schema is changed concurrently.
#[async_trait]
pub trait Schema: Send + Sync + fmt::Debug + fmt::Display {
    /// Returns the schema name as given at construction.
    fn name(&self) -> &str;

    /// Checks whether the schema exists.
    async fn exists(&self) -> Result<bool>;

    /// Checks whether the schema contains no objects.
    async fn is_empty(&self) -> Result<bool>;

    /// Creates the schema.
    async fn create(&self) -> Result<()>;

    /// Drops the schema and everything in it.
    async fn drop_schema(&self) -> Result<()>;

    /// Drops every object in the schema, keeping the schema itself.
    async fn clean(&self) -> Result<()>;

    /// Lists the tables of the schema in catalog order.
    async fn all_tables<'a>(&'a self) -> Result<Vec<Box<dyn Table + 'a>>>;

    /// Returns a handle on the named table. Performs no I/O.
    fn table<'a>(&'a self, name: &str) -> Box<dyn Table + 'a>;
}

/// A table within a [`Schema`].
#[async_trait]
pub trait Table: Send + Sync + fmt::Debug + fmt::Display {
    /// Returns the table name.
    fn name(&self) -> &str;

    /// Returns the name of the owning schema.
    fn schema_name(&self) -> &str;

    /// Checks whether the table exists.
    async fn exists(&self) -> Result<bool>;

    /// Drops the table.
    async fn drop_table(&self) -> Result<()>;
}
