use crate::error::{ExecuteError, Result};
use crate::sql::schema::Table;

/// In-memory table store: every table defined in one engine instance.
///
/// Tables are kept in definition order, which is also the order `DUMP` and
/// `dump_all` walk them in. Lookup never fails on its own; callers decide
/// whether a missing table is fatal.
#[derive(Debug, Default)]
pub struct Store {
    tables: Vec<Table>,
}

impl Store {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Inserts a new table definition; fails if the name is already taken
    pub fn define(&mut self, table: Table) -> Result<()> {
        if self.lookup(&table.name).is_some() {
            return Err(ExecuteError::new(format!(
                "Cannot create table '{}': Table already exists",
                table.name
            ))
            .into());
        }
        self.tables.push(table);
        Ok(())
    }

    /// Returns the table with the given name, if defined
    pub fn lookup(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name == name)
    }

    pub fn lookup_mut(&mut self, name: &str) -> Option<&mut Table> {
        self.tables.iter_mut().find(|t| t.name == name)
    }

    /// All tables, in definition order
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }
}
