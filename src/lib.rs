//! minisql - An embeddable in-memory SQL interpreter
//!
//! This crate provides a minimal SQL engine with:
//! - A hand-written lexer with line/column tracking for diagnostics
//! - A recursive-descent parser producing per-statement ASTs, including a
//!   canonical AND/OR constraint tree for WHERE clauses
//! - An execution engine interpreting statements against transient
//!   in-memory tables (CREATE TABLE, INSERT, SELECT, UPDATE, DELETE, DUMP)
//! - A bordered text-table renderer for query results
//!
//! Tables live for the lifetime of one [`sql::engine::Engine`] instance;
//! there is no persistence, indexing, join or transaction support. Any REPL
//! or file-loading driver sits outside this crate.

pub mod error;
pub mod sql;
