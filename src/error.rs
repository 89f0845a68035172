use std::fmt::Display;

/// Custom Result type for minisql operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for minisql
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Malformed SQL source (lexing or parsing)
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Statement is semantically invalid against the current table store
    #[error(transparent)]
    Execute(#[from] ExecuteError),
}

/// Lex/parse failure, pointing at the offending position in the source
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
    /// 1-based line number
    pub line: usize,
    /// 1-based column number
    pub column: usize,
    /// Text of the source line the error occurred on
    pub line_text: String,
}

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at line {}, col {}: {}",
            self.message, self.line, self.column, self.line_text
        )
    }
}

impl std::error::Error for ParseError {}

/// Execution failure against the current store
#[derive(Debug, Clone, PartialEq)]
pub struct ExecuteError {
    pub message: String,
    /// Source line the statement started on, when the parser recorded one
    pub line: Option<usize>,
}

impl ExecuteError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            line: None,
        }
    }

    pub fn at_line(message: impl Into<String>, line: usize) -> Self {
        Self {
            message: message.into(),
            line: Some(line),
        }
    }
}

impl Display for ExecuteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "{} at line {}", self.message, line),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ExecuteError {}
