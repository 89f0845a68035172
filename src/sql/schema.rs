use serde::{Deserialize, Serialize};

use crate::sql::parser::ast::ColumnDef;
use crate::sql::types::{DataType, Row, Value};

/// An in-memory table: its schema plus every stored row.
///
/// Tables are created by CREATE TABLE only and live for the lifetime of the
/// engine; there is no DROP or ALTER.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    /// Declaration order is significant: it is the row positional order and
    /// the projection order of SELECT
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
}

impl Table {
    /// Builds an empty table from a parsed CREATE TABLE statement
    pub fn new(name: String, columns: Vec<ColumnDef>) -> Self {
        Self {
            name,
            columns: columns
                .into_iter()
                .map(|c| Column {
                    name: c.name,
                    datatype: c.datatype,
                })
                .collect(),
            rows: Vec::new(),
        }
    }

    /// Returns the positional index of a column, or None if undeclared
    pub fn col_index(&self, col_name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == col_name)
    }

    /// Returns a row with every declared column defaulted to NULL
    pub fn null_row(&self) -> Row {
        vec![Value::Null; self.columns.len()]
    }

    /// Column names in declaration order
    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }
}

/// Column schema definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub datatype: DataType,
}

#[cfg(test)]
mod tests {
    use super::Table;
    use crate::sql::parser::ast::ColumnDef;
    use crate::sql::types::{DataType, Value};

    #[test]
    fn test_table_new_and_lookup() {
        let table = Table::new(
            "t".to_string(),
            vec![
                ColumnDef {
                    name: "id".to_string(),
                    datatype: DataType::Int,
                },
                ColumnDef {
                    name: "name".to_string(),
                    datatype: DataType::Varchar,
                },
            ],
        );
        assert_eq!(table.col_index("id"), Some(0));
        assert_eq!(table.col_index("name"), Some(1));
        assert_eq!(table.col_index("missing"), None);
        assert_eq!(table.null_row(), vec![Value::Null, Value::Null]);
        assert_eq!(table.column_names(), vec!["id", "name"]);
        assert!(table.rows.is_empty());
    }
}
