//! # ferrule-core
//!
//! Dialect-agnostic building blocks for `ferrule`, the database-dialect layer
//! of a schema-migration engine.
//!
//! This crate has no dependencies. It provides the migration-script
//! [`SqlStatementBuilder`], which turns script text into individual
//! statements. The per-engine parts (which delimiter ends a statement, which
//! statements carry a body of their own) are supplied through the
//! [`StatementRules`] hook by the adapter crates.
//!
//! ## Example
//!
//! ```rust
//! use ferrule_core::{SqlStatementBuilder, StandardRules};
//!
//! let mut builder = SqlStatementBuilder::new(Box::new(StandardRules));
//! let statements = builder.split(
//!     "CREATE TABLE t (id INT);\n\
//!      -- seed\n\
//!      INSERT INTO t VALUES (1);",
//! );
//!
//! assert_eq!(statements.len(), 2);
//! assert_eq!(statements[0].sql, "CREATE TABLE t (id INT)");
//! assert_eq!(statements[1].line_number, 3);
//! ```

pub mod statement;

pub use statement::{Delimiter, SqlStatement, SqlStatementBuilder, StandardRules, StatementRules};
