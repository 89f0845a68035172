use tracing::debug;

use crate::error::Result;
use crate::sql::executor::{self, ResultSet};
use crate::sql::parser::Parser;
use crate::sql::parser::ast::Statement;
use crate::sql::store::Store;

/// The SQL engine: owns the table store and executes parsed statements
/// against it.
///
/// Single-threaded and synchronous; nothing here yields or blocks. One
/// engine instance owns all mutable state, so concurrent callers need an
/// external mutual-exclusion boundary around `execute`.
#[derive(Debug, Default)]
pub struct Engine {
    store: Store,
}

impl Engine {
    pub fn new() -> Self {
        Self {
            store: Store::new(),
        }
    }

    /// Executes one parsed statement against the table store
    pub fn execute(&mut self, stmt: Statement) -> Result<ResultSet> {
        debug!(?stmt, "executing statement");
        executor::execute(&mut self.store, stmt)
    }

    /// Parses and executes every statement in the buffer, in order,
    /// aborting on the first failure
    pub fn run(&mut self, sql: &str) -> Result<Vec<ResultSet>> {
        let mut parser = Parser::new(sql);
        let mut results = Vec::new();
        while let Some(stmt) = parser.parse()? {
            results.push(self.execute(stmt)?);
        }
        Ok(results)
    }

    /// Re-serializes every table as SQL text, in definition order.
    ///
    /// Running the output against a fresh engine reproduces an identical
    /// table store.
    pub fn dump_all(&self) -> String {
        self.store
            .tables()
            .iter()
            .map(executor::dump_table_sql)
            .collect()
    }

    /// Read access to the table store
    pub fn store(&self) -> &Store {
        &self.store
    }
}
