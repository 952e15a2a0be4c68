//! Statement delimiters.

use std::fmt;

/// Text that terminates a statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delimiter {
    text: String,
    alone_on_line: bool,
}

impl Delimiter {
    /// Creates a new delimiter.
    ///
    /// When `alone_on_line` is set, the delimiter only counts on a line that
    /// contains nothing else (ignoring surrounding whitespace).
    #[must_use]
    pub fn new(text: impl Into<String>, alone_on_line: bool) -> Self {
        Self {
            text: text.into(),
            alone_on_line,
        }
    }

    /// The standard `;` delimiter.
    #[must_use]
    pub fn semicolon() -> Self {
        Self::new(";", false)
    }

    /// Returns the delimiter text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns whether the delimiter must stand alone on its line.
    #[must_use]
    pub const fn is_alone_on_line(&self) -> bool {
        self.alone_on_line
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Self::semicolon()
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_semicolon() {
        let delimiter = Delimiter::default();
        assert_eq!(delimiter.text(), ";");
        assert!(!delimiter.is_alone_on_line());
        assert_eq!(delimiter, Delimiter::semicolon());
    }

    #[test]
    fn test_display() {
        assert_eq!(Delimiter::new("/", true).to_string(), "/");
    }
}
