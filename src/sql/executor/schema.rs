//! CREATE TABLE and DUMP TABLE handlers.
//!
//! DUMP re-serializes a table as SQL text: one CREATE TABLE statement
//! reproducing the declared columns, then one INSERT per stored row in row
//! order. Feeding the output back through the parser and engine rebuilds an
//! identical table.

use crate::error::{ExecuteError, Result};
use crate::sql::executor::ResultSet;
use crate::sql::parser::ast::ColumnDef;
use crate::sql::schema::Table;
use crate::sql::store::Store;
use crate::sql::types::{Row, Value};

/// CREATE TABLE: fails if the name is taken, else defines an empty table
pub fn create_table(store: &mut Store, name: String, columns: Vec<ColumnDef>) -> Result<ResultSet> {
    let table = Table::new(name, columns);
    let table_name = table.name.clone();
    store.define(table)?;
    Ok(ResultSet::CreateTable { table_name })
}

/// DUMP TABLE: fails if the table is missing; `line` attributes the error to
/// the statement's source line
pub fn dump_table(store: &Store, name: &str, line: usize) -> Result<ResultSet> {
    let table = store
        .lookup(name)
        .ok_or_else(|| ExecuteError::at_line(format!("Table '{}' not found", name), line))?;
    Ok(ResultSet::Dump {
        sql: dump_table_sql(table),
    })
}

/// Re-serializes one table's schema and contents as SQL text
pub fn dump_table_sql(table: &Table) -> String {
    let mut buf = format!("CREATE TABLE {} (\n", table.name);
    for (i, col) in table.columns.iter().enumerate() {
        buf.push_str(&format!("    {} {}", col.name, col.datatype));
        if i < table.columns.len() - 1 {
            buf.push(',');
        }
        buf.push('\n');
    }
    buf.push_str(");\n");
    for row in &table.rows {
        buf.push_str(&dump_row_sql(table, row));
    }
    buf
}

fn dump_row_sql(table: &Table, row: &Row) -> String {
    let cols = table.column_names().join(", ");
    let values: Vec<String> = row.iter().map(Value::to_sql).collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({});\n",
        table.name,
        cols,
        values.join(", ")
    )
}
