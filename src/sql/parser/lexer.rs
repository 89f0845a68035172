//! SQL Lexer - Tokenizes SQL input text into a stream of tokens
//!
//! The lexer tracks line and column positions so parse errors can point at
//! the offending spot in the source buffer.

use std::{fmt::Display, iter::Peekable, str::CharIndices};

use crate::error::{ParseError, Result};

/// Represents a single lexical token in the SQL input
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Identifier such as a command, keyword, table or column name.
    /// Keywords are not distinguished here; the parser matches them
    /// case-insensitively.
    Ident(String),
    /// Integer literal
    Integer(i64),
    /// Floating-point literal
    Float(f64),
    /// String literal (quotes stripped, doubled quotes unescaped)
    String(String),
    /// Delimiters
    OpenParen,
    CloseParen,
    Comma,
    Semicolon,
    /// A greedy run of operator characters (`=`, `>`, `<`), e.g. ">=" or "<>".
    /// The parser decides whether the run forms a valid comparison operator.
    Op(String),
    /// A character the lexer does not recognize; fatality is the parser's call
    Unknown(char),
    /// End of input
    Eof,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Ident(v) => write!(f, "{}", v),
            Token::Integer(v) => write!(f, "{}", v),
            Token::Float(v) => write!(f, "{}", v),
            Token::String(v) => write!(f, "'{}'", v),
            Token::OpenParen => write!(f, "("),
            Token::CloseParen => write!(f, ")"),
            Token::Comma => write!(f, ","),
            Token::Semicolon => write!(f, ";"),
            Token::Op(v) => write!(f, "{}", v),
            Token::Unknown(c) => write!(f, "{}", c),
            Token::Eof => write!(f, "end of input"),
        }
    }
}

/// True for characters that may start an identifier. `*` is lexed as an
/// identifier so the SELECT column list can treat it like any other column.
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '*'
}

/// True for characters that may continue an identifier. Dotted names such as
/// `tbl.col` form a single token.
fn is_ident_part(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.'
}

fn is_operator(c: char) -> bool {
    matches!(c, '=' | '>' | '<')
}

/// SQL lexical analyzer.
///
/// A pure cursor over an immutable buffer: scanning only ever advances. The
/// cursor state (byte position, 1-based line, offset of the current line
/// start) is owned here and threaded through every scan.
pub struct Lexer<'a> {
    src: &'a str,
    chars: Peekable<CharIndices<'a>>,
    /// 1-based line number of the cursor
    line: usize,
    /// Byte offset where the cursor's line begins
    line_start: usize,
    /// Position of the start of the most recently scanned token
    token_line: usize,
    token_column: usize,
    token_line_start: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given SQL text
    pub fn new(sql_text: &'a str) -> Self {
        Self {
            src: sql_text,
            chars: sql_text.char_indices().peekable(),
            line: 1,
            line_start: 0,
            token_line: 1,
            token_column: 1,
            token_line_start: 0,
        }
    }

    /// Scans and returns the next token; `Token::Eof` once input is exhausted
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace();
        self.token_line = self.line;
        self.token_column = self.pos() - self.line_start + 1;
        self.token_line_start = self.line_start;

        let Some(&(_, c)) = self.chars.peek() else {
            return Ok(Token::Eof);
        };
        if c.is_ascii_digit() {
            self.scan_number()
        } else if is_ident_start(c) {
            Ok(self.scan_ident())
        } else if c == '\'' {
            self.scan_string()
        } else {
            match c {
                '(' | ')' | ',' | ';' => Ok(self.scan_delimiter(c)),
                _ if is_operator(c) => Ok(self.scan_operator()),
                _ => {
                    self.advance();
                    Ok(Token::Unknown(c))
                }
            }
        }
    }

    /// 1-based line the most recent token started on
    pub fn token_line(&self) -> usize {
        self.token_line
    }

    /// 1-based column the most recent token started on
    pub fn token_column(&self) -> usize {
        self.token_column
    }

    /// Source text of the line the most recent token started on
    pub fn token_line_text(&self) -> &str {
        let rest = &self.src[self.token_line_start..];
        rest.split(['\n', '\r']).next().unwrap_or("")
    }

    /// Builds a ParseError pointing at the most recent token
    pub fn error_here(&self, message: impl Into<String>) -> ParseError {
        ParseError {
            message: message.into(),
            line: self.token_line,
            column: self.token_column,
            line_text: self.token_line_text().to_string(),
        }
    }

    /// Byte offset of the next unconsumed character
    fn pos(&mut self) -> usize {
        match self.chars.peek() {
            Some(&(i, _)) => i,
            None => self.src.len(),
        }
    }

    /// Consumes one character, updating line bookkeeping
    fn advance(&mut self) -> Option<char> {
        let (_, c) = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
            self.line_start = self.pos();
        }
        Some(c)
    }

    /// Skips leading whitespace: any character at or below the space character
    fn skip_whitespace(&mut self) {
        while let Some(&(_, c)) = self.chars.peek() {
            if c > ' ' {
                break;
            }
            self.advance();
        }
    }

    /// Scans a numeric literal: an integer unless a `.` appears mid-scan
    fn scan_number(&mut self) -> Result<Token> {
        let mut val = String::new();
        let mut is_float = false;
        while let Some(&(_, c)) = self.chars.peek() {
            if c.is_ascii_digit() {
                val.push(c);
                self.advance();
            } else if !is_float && c == '.' {
                is_float = true;
                val.push(c);
                self.advance();
            } else {
                break;
            }
        }
        if is_float {
            match val.parse::<f64>() {
                Ok(n) => Ok(Token::Float(n)),
                Err(e) => Err(self.error_here(format!("Error parsing number '{}': {}", val, e)).into()),
            }
        } else {
            match val.parse::<i64>() {
                Ok(n) => Ok(Token::Integer(n)),
                Err(e) => Err(self.error_here(format!("Error parsing number '{}': {}", val, e)).into()),
            }
        }
    }

    /// Scans an identifier; keyword recognition is left to the parser
    fn scan_ident(&mut self) -> Token {
        let mut val = String::new();
        if let Some(c) = self.advance() {
            val.push(c);
        }
        while let Some(&(_, c)) = self.chars.peek() {
            if !is_ident_part(c) {
                break;
            }
            val.push(c);
            self.advance();
        }
        Token::Ident(val)
    }

    /// Scans a string literal. A doubled quote inside the literal is an
    /// escaped quote; the literal ends at the first unescaped quote.
    fn scan_string(&mut self) -> Result<Token> {
        self.advance();
        let mut val = String::new();
        loop {
            match self.advance() {
                Some('\'') => {
                    if let Some(&(_, '\'')) = self.chars.peek() {
                        self.advance();
                        val.push('\'');
                    } else {
                        break;
                    }
                }
                Some(c) => val.push(c),
                None => return Err(self.error_here("Unterminated string literal").into()),
            }
        }
        Ok(Token::String(val))
    }

    /// Scans a single-character delimiter token
    fn scan_delimiter(&mut self, c: char) -> Token {
        self.advance();
        match c {
            '(' => Token::OpenParen,
            ')' => Token::CloseParen,
            ',' => Token::Comma,
            _ => Token::Semicolon,
        }
    }

    /// Greedily consumes a run of operator characters
    fn scan_operator(&mut self) -> Token {
        let mut val = String::new();
        while let Some(&(_, c)) = self.chars.peek() {
            if !is_operator(c) {
                break;
            }
            val.push(c);
            self.advance();
        }
        Token::Op(val)
    }
}
