//! INSERT, UPDATE and DELETE handlers.
//!
//! Each handler validates against the store before mutating, so a failed
//! statement leaves no partial state behind: INSERT and UPDATE resolve every
//! referenced column up front, after which the per-row work cannot fail.

use crate::error::{ExecuteError, Result};
use crate::sql::executor::ResultSet;
use crate::sql::executor::filter::row_matches;
use crate::sql::parser::ast::Where;
use crate::sql::store::Store;
use crate::sql::types::{Row, Value};

/// INSERT: builds a row with every declared column defaulted to NULL, then
/// overlays the supplied values onto the supplied columns positionally.
///
/// The parser does not require the column and value lists to be the same
/// length: columns without a value keep NULL, values without a column are
/// dropped.
pub fn insert(
    store: &mut Store,
    table_name: String,
    columns: Vec<String>,
    values: Vec<Value>,
) -> Result<ResultSet> {
    let table = store.lookup_mut(&table_name).ok_or_else(|| {
        ExecuteError::new(format!("Error in INSERT: Unknown table '{}'", table_name))
    })?;

    // Resolve every supplied column before touching the row list
    let mut indexes = Vec::with_capacity(columns.len());
    for col in &columns {
        let idx = table
            .col_index(col)
            .ok_or_else(|| ExecuteError::new(format!("Unknown column name '{}'", col)))?;
        indexes.push(idx);
    }

    let mut row = table.null_row();
    for (idx, value) in indexes.into_iter().zip(values) {
        row[idx] = value;
    }
    table.rows.push(row);

    Ok(ResultSet::Insert { count: 1 })
}

/// UPDATE: applies every assignment, in statement order, to each row matching
/// the WHERE tree. Matching is evaluated against pre-update values.
pub fn update(
    store: &mut Store,
    table_name: String,
    assignments: Vec<(String, Value)>,
    filter: Where,
) -> Result<ResultSet> {
    let table = store.lookup_mut(&table_name).ok_or_else(|| {
        ExecuteError::new(format!("Error in UPDATE: Unknown table '{}'", table_name))
    })?;

    let mut resolved = Vec::with_capacity(assignments.len());
    for (col, value) in assignments {
        let idx = table
            .col_index(&col)
            .ok_or_else(|| ExecuteError::new(format!("Unknown column name '{}'", col)))?;
        resolved.push((idx, value));
    }

    // Match first, then mutate, so an assignment to a WHERE-tested column
    // cannot change which rows qualify
    let matching: Vec<usize> = table
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| row_matches(table, row, &filter))
        .map(|(i, _)| i)
        .collect();
    for &i in &matching {
        for (idx, value) in &resolved {
            table.rows[i][*idx] = value.clone();
        }
    }

    Ok(ResultSet::Update {
        count: matching.len(),
    })
}

/// DELETE: keeps the rows not matching the WHERE tree, order preserved
pub fn delete(store: &mut Store, table_name: String, filter: Where) -> Result<ResultSet> {
    let table = store.lookup_mut(&table_name).ok_or_else(|| {
        ExecuteError::new(format!("Error in DELETE: Unknown table '{}'", table_name))
    })?;

    let kept: Vec<Row> = table
        .rows
        .iter()
        .filter(|row| !row_matches(table, row, &filter))
        .cloned()
        .collect();
    let count = table.rows.len() - kept.len();
    table.rows = kept;

    Ok(ResultSet::Delete { count })
}
