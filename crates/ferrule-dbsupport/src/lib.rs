//! Database-dialect support for schema migrations.
//!
//! `ferrule-dbsupport` lets a migration engine quote identifiers, inspect
//! schemas and run schema-level DDL the same way on every database it talks
//! to, although each engine has its own SQL dialect, catalog views,
//! case-folding rules and transactional guarantees.
//!
//! # Architecture
//!
//! - **[`DbSupport`]** - Per-connection capabilities of an engine: quoting,
//!   boolean literals, DDL-transaction support, current user and schema,
//!   and factories for schemas and statement builders
//! - **[`Schema`] / [`Table`]** - Live handles on catalog objects. Nothing is
//!   cached; every check goes back to the connection
//! - **[`QueryExecutor`]** - The seam to a live connection;
//!   [`SqliteExecutor`] implements it over sqlx
//! - **[`db_support`]** - Picks the adapter for a [`DatabaseEngine`]
//!
//! Every executor failure leaves this crate as
//! [`DbSupportError::Execution`], carrying the failing statement and a
//! description of the operation.
//!
//! # Example
//!
//! ```rust,ignore
//! use ferrule_dbsupport::prelude::*;
//!
//! // `executor` implements QueryExecutor over an Exasol connection.
//! let support = db_support(DatabaseEngine::Exasol, &executor);
//!
//! let schema = support.schema("ANALYTICS");
//! if !schema.exists().await? {
//!     schema.create().await?;
//! }
//! support.change_current_schema_to(Some("ANALYTICS")).await?;
//! ```
//!
//! # Concurrency
//!
//! Adapters borrow their connection and do no locking. Callers serialize
//! access to a given adapter and the schemas derived from it.

pub mod dbsupport;
pub mod engine;
pub mod error;
pub mod executor;

pub use dbsupport::{DbSupport, Schema, Table};
pub use engine::{db_support, DatabaseEngine};
pub use error::{DbSupportError, ExecutionError, Result};
pub use executor::{QueryExecutor, SqlRunner, SqliteExecutor};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::dbsupport::{
        DbSupport, ExasolDbSupport, ExasolSchema, ExasolTable, Schema, SqliteDbSupport,
        SqliteSchema, SqliteTable, Table,
    };
    pub use crate::engine::{db_support, DatabaseEngine};
    pub use crate::error::{DbSupportError, ExecutionError, Result};
    pub use crate::executor::{QueryExecutor, SqliteExecutor};
    pub use ferrule_core::{SqlStatement, SqlStatementBuilder};
}
