//! Migration-script statement splitting.
//!
//! Scripts are consumed line by line. A statement ends when a line finishes
//! with the active [`Delimiter`] outside of any string literal, quoted
//! identifier or comment. Engines that embed procedural bodies (scripts,
//! functions, triggers) swap the delimiter through [`StatementRules`].

mod builder;
mod delimiter;

pub use builder::{SqlStatement, SqlStatementBuilder};
pub use delimiter::Delimiter;

/// Engine-specific statement termination rules.
pub trait StatementRules: Send + Sync {
    /// Returns the delimiter used when nothing special applies.
    fn default_delimiter(&self) -> Delimiter {
        Delimiter::semicolon()
    }

    /// Returns the delimiter that may terminate the statement on `line`.
    ///
    /// `statement_start` holds the first words of the statement, upper-cased
    /// and separated by single spaces, with comments and literal contents
    /// removed. Returning `None` means the statement cannot end on this line.
    fn delimiter_for(&self, statement_start: &str, line: &str) -> Option<Delimiter> {
        let _ = (statement_start, line);
        Some(self.default_delimiter())
    }
}

/// Plain `;`-terminated statements with no procedural bodies.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardRules;

impl StatementRules for StandardRules {}
