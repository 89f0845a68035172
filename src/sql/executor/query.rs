//! SELECT handler.

use crate::error::{ExecuteError, Result};
use crate::sql::executor::ResultSet;
use crate::sql::executor::filter::row_matches;
use crate::sql::parser::ast::Where;
use crate::sql::store::Store;
use crate::sql::types::Row;

/// SELECT: keeps the rows matching the WHERE tree and projects every
/// declared column in declaration order.
///
/// Only the first FROM table is queried; the grammar accepts more but there
/// is no join support. The statement's explicit column list has already been
/// discarded by the dispatcher for the same reason: projection is always the
/// full declared column set.
pub fn select(store: &Store, tables: &[String], filter: &Where) -> Result<ResultSet> {
    let table_name = tables
        .first()
        .ok_or_else(|| ExecuteError::new("No table given in SELECT"))?;
    let table = store
        .lookup(table_name)
        .ok_or_else(|| ExecuteError::new(format!("Table '{}' not found", table_name)))?;

    let rows: Vec<Row> = table
        .rows
        .iter()
        .filter(|row| row_matches(table, row, filter))
        .cloned()
        .collect();

    Ok(ResultSet::Scan {
        columns: table.column_names(),
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::select;
    use crate::error::{Error, Result};
    use crate::sql::executor::ResultSet;
    use crate::sql::parser::ast::{AndGroup, ColumnDef, Comparison, Operand, Operator, Where};
    use crate::sql::schema::Table;
    use crate::sql::store::Store;
    use crate::sql::types::{DataType, Value};

    fn store_with_rows() -> Store {
        let mut store = Store::new();
        let mut table = Table::new(
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
        table.rows.push(vec![
            Value::Integer(1),
            Value::String("a".to_string()),
        ]);
        table.rows.push(vec![
            Value::Integer(2),
            Value::String("b".to_string()),
        ]);
        store.define(table).expect("fresh store");
        store
    }

    #[test]
    fn test_select_all() -> Result<()> {
        let store = store_with_rows();
        let result = select(&store, &["t".to_string()], &Where::all())?;
        let ResultSet::Scan { columns, rows } = result else {
            panic!("expected scan");
        };
        assert_eq!(columns, vec!["id", "name"]);
        assert_eq!(rows.len(), 2);
        Ok(())
    }

    #[test]
    fn test_select_filtered() -> Result<()> {
        let store = store_with_rows();
        let filter = Where {
            groups: vec![AndGroup {
                comparisons: vec![Comparison {
                    column: "id".to_string(),
                    op: Operator::Equal,
                    right: Operand::Literal(Value::Integer(2)),
                }],
            }],
        };
        let result = select(&store, &["t".to_string()], &filter)?;
        let ResultSet::Scan { rows, .. } = result else {
            panic!("expected scan");
        };
        assert_eq!(
            rows,
            vec![vec![Value::Integer(2), Value::String("b".to_string())]]
        );
        Ok(())
    }

    #[test]
    fn test_select_queries_first_table_only() -> Result<()> {
        let store = store_with_rows();
        // The second name is never resolved, so it may not even exist
        let result = select(
            &store,
            &["t".to_string(), "ghost".to_string()],
            &Where::all(),
        )?;
        assert!(matches!(result, ResultSet::Scan { .. }));
        Ok(())
    }

    #[test]
    fn test_select_missing_table() {
        let store = store_with_rows();
        let err = select(&store, &["missing".to_string()], &Where::all()).unwrap_err();
        match err {
            Error::Execute(e) => {
                assert_eq!(e.message, "Table 'missing' not found");
                assert_eq!(e.line, None);
            }
            other => panic!("expected execute error, got {:?}", other),
        }
    }
}
