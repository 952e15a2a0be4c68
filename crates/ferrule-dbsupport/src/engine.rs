//! Engine selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dbsupport::{DbSupport, ExasolDbSupport, SqliteDbSupport};
use crate::error::DbSupportError;
use crate::executor::QueryExecutor;

/// Database engines with a dialect adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseEngine {
    /// Exasol analytic database.
    Exasol,
    /// SQLite.
    Sqlite,
}

impl DatabaseEngine {
    /// Returns the engine identifier, as reported by [`DbSupport::name`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Exasol => "exasol",
            Self::Sqlite => "sqlite",
        }
    }

    /// Maps the product name reported by a driver to an engine.
    ///
    /// Exasol reports itself as `EXASolution`.
    #[must_use]
    pub fn from_product_name(product: &str) -> Option<Self> {
        let product = product.trim().to_lowercase();
        if product.starts_with("exasolution") || product.starts_with("exasol") {
            Some(Self::Exasol)
        } else if product.starts_with("sqlite") {
            Some(Self::Sqlite)
        } else {
            None
        }
    }
}

impl fmt::Display for DatabaseEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DatabaseEngine {
    type Err = DbSupportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "exasol" => Ok(Self::Exasol),
            "sqlite" => Ok(Self::Sqlite),
            _ => Err(DbSupportError::UnknownEngine(s.to_string())),
        }
    }
}

/// Creates the dialect adapter for `engine` over the given connection.
#[must_use]
pub fn db_support<'c>(
    engine: DatabaseEngine,
    executor: &'c dyn QueryExecutor,
) -> Box<dyn DbSupport + 'c> {
    match engine {
        DatabaseEngine::Exasol => Box::new(ExasolDbSupport::new(executor)),
        DatabaseEngine::Sqlite => Box::new(SqliteDbSupport::new(executor)),
    }
}
