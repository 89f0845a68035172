//! SQL processing module
//!
//! This module provides:
//! - `parser`: SQL lexer and parser
//! - `types`: SQL data types and runtime values
//! - `schema`: Table and column definitions
//! - `store`: The in-memory table store
//! - `executor`: Per-statement execution and the WHERE matcher
//! - `engine`: The execution engine owning the store
//! - `render`: Bordered text-table output

pub mod engine;
pub mod executor;
pub mod parser;
pub mod render;
pub mod schema;
pub mod store;
pub mod types;
