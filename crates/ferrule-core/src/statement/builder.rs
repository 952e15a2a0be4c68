//! Line-oriented statement builder.

use super::{Delimiter, StatementRules};

/// Number of leading words kept to classify a statement.
const MAX_START_WORDS: usize = 16;

/// A single statement extracted from a migration script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlStatement {
    /// Line (1-based) on which the statement starts.
    pub line_number: usize,
    /// Statement text without its delimiter.
    pub sql: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum LexState {
    #[default]
    Code,
    SingleQuoted,
    DoubleQuoted,
    BlockComment,
}

/// Accumulates script lines until a complete statement is formed.
pub struct SqlStatementBuilder {
    rules: Box<dyn StatementRules>,
    lines: Vec<String>,
    line_number: usize,
    start_words: Vec<String>,
    state: LexState,
    body_delimiter: Option<Delimiter>,
    terminated: bool,
}

impl SqlStatementBuilder {
    /// Creates a new builder driven by the given rules.
    #[must_use]
    pub fn new(rules: Box<dyn StatementRules>) -> Self {
        Self {
            rules,
            lines: Vec::new(),
            line_number: 0,
            start_words: Vec::new(),
            state: LexState::Code,
            body_delimiter: None,
            terminated: false,
        }
    }

    /// Returns whether the current statement has seen its delimiter.
    #[must_use]
    pub const fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Returns whether no statement text has been collected yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the upper-cased leading words of the current statement.
    #[must_use]
    pub fn statement_start(&self) -> String {
        self.start_words.join(" ")
    }

    /// Adds a line of script text. Lines added after termination are ignored.
    ///
    /// Once the rules select a delimiter that must stand alone on its line,
    /// the rest of the statement is an opaque body: literals and comments are
    /// no longer tracked and only the delimiter line ends it.
    pub fn add_line(&mut self, line: &str, line_number: usize) {
        if self.terminated {
            return;
        }

        if let Some(delimiter) = &self.body_delimiter {
            if line.trim() == delimiter.text() {
                self.terminated = true;
            } else {
                self.lines.push(line.to_string());
            }
            return;
        }

        if self.lines.is_empty() && self.state == LexState::Code {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with("--") {
                return;
            }
            self.line_number = line_number;
        }

        let state_before = self.state;
        let (code_end, code) = self.scan(line);
        for word in code.split_whitespace() {
            if self.start_words.len() >= MAX_START_WORDS {
                break;
            }
            self.start_words.push(word.to_uppercase());
        }

        let Some(delimiter) = self.rules.delimiter_for(&self.statement_start(), line) else {
            self.lines.push(line.to_string());
            return;
        };

        if delimiter.is_alone_on_line() {
            if state_before == LexState::Code && line.trim() == delimiter.text() {
                self.terminated = true;
            } else {
                self.lines.push(line.to_string());
                self.state = LexState::Code;
                self.body_delimiter = Some(delimiter);
            }
            return;
        }

        if self.state != LexState::Code {
            self.lines.push(line.to_string());
            return;
        }

        self.terminate_if_delimited(line, code_end, &delimiter);
    }

    fn terminate_if_delimited(&mut self, line: &str, code_end: usize, delimiter: &Delimiter) {
        let head = line[..code_end].trim_end();
        match head.strip_suffix(delimiter.text()) {
            Some(stripped) => {
                let stripped = stripped.trim_end();
                if !stripped.trim().is_empty() {
                    self.lines.push(stripped.to_string());
                }
                self.terminated = true;
            }
            None => self.lines.push(line.to_string()),
        }
    }

    /// Tracks literal/comment state across `line`.
    ///
    /// Returns the byte offset just past the last non-blank character outside
    /// comments, and the code outside literals and comments.
    fn scan(&mut self, line: &str) -> (usize, String) {
        let mut code = String::new();
        let mut code_end = 0;
        let mut chars = line.char_indices().peekable();

        while let Some((index, c)) = chars.next() {
            let end = index + c.len_utf8();
            match self.state {
                LexState::Code => match c {
                    '\'' => {
                        self.state = LexState::SingleQuoted;
                        code.push(c);
                        code_end = end;
                    }
                    '"' => {
                        self.state = LexState::DoubleQuoted;
                        code.push(c);
                        code_end = end;
                    }
                    '-' if matches!(chars.peek(), Some((_, '-'))) => return (code_end, code),
                    '/' if matches!(chars.peek(), Some((_, '*'))) => {
                        chars.next();
                        self.state = LexState::BlockComment;
                        code.push(' ');
                    }
                    _ => {
                        code.push(c);
                        if !c.is_whitespace() {
                            code_end = end;
                        }
                    }
                },
                LexState::SingleQuoted => {
                    if c == '\'' {
                        self.state = LexState::Code;
                        code.push(c);
                        code_end = end;
                    }
                }
                LexState::DoubleQuoted => {
                    if c == '"' {
                        self.state = LexState::Code;
                        code.push(c);
                        code_end = end;
                    }
                }
                LexState::BlockComment => {
                    if c == '*' && matches!(chars.peek(), Some((_, '/'))) {
                        chars.next();
                        self.state = LexState::Code;
                    }
                }
            }
        }

        (code_end, code)
    }

    /// Returns the collected statement and resets the builder.
    pub fn take_statement(&mut self) -> Option<SqlStatement> {
        let sql = self.lines.join("\n").trim().to_string();
        let line_number = self.line_number;

        self.lines.clear();
        self.start_words.clear();
        self.line_number = 0;
        self.state = LexState::Code;
        self.body_delimiter = None;
        self.terminated = false;

        if sql.is_empty() {
            None
        } else {
            Some(SqlStatement { line_number, sql })
        }
    }

    /// Splits a whole script into statements.
    ///
    /// A trailing statement without a delimiter is still returned.
    pub fn split(&mut self, script: &str) -> Vec<SqlStatement> {
        let mut statements = Vec::new();

        for (index, line) in script.lines().enumerate() {
            self.add_line(line, index + 1);
            if self.is_terminated() {
                statements.extend(self.take_statement());
            }
        }
        statements.extend(self.take_statement());

        statements
    }
}

impl std::fmt::Debug for SqlStatementBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqlStatementBuilder")
            .field("lines", &self.lines)
            .field("line_number", &self.line_number)
            .field("terminated", &self.terminated)
            .finish_non_exhaustive()
    }
}
