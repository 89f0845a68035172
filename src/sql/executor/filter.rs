//! WHERE-tree matcher.
//!
//! Consumes the parser's canonical OR-of-AND tree directly; no intermediate
//! normalization. A comparison between mismatched types (including anything
//! involving NULL) or against an unknown column is a non-match, never an
//! error.

use std::cmp::Ordering;

use crate::sql::parser::ast::{AndGroup, Comparison, Operand, Operator, Where};
use crate::sql::schema::Table;
use crate::sql::types::{Row, Value};

/// Returns true if the row satisfies the constraint tree.
///
/// An empty tree matches unconditionally. The OR level short-circuits on the
/// first matching group; each AND group short-circuits on the first failing
/// comparison.
pub fn row_matches(table: &Table, row: &Row, filter: &Where) -> bool {
    if filter.is_empty() {
        return true;
    }
    filter.groups.iter().any(|g| group_matches(table, row, g))
}

fn group_matches(table: &Table, row: &Row, group: &AndGroup) -> bool {
    group
        .comparisons
        .iter()
        .all(|c| comparison_matches(table, row, c))
}

fn comparison_matches(table: &Table, row: &Row, cmp: &Comparison) -> bool {
    let Some(left) = lookup(table, row, &cmp.column) else {
        return false;
    };
    let right = match &cmp.right {
        Operand::Literal(value) => value,
        Operand::Column(name) => match lookup(table, row, name) {
            Some(value) => value,
            None => return false,
        },
    };
    match left.partial_cmp(right) {
        Some(ordering) => op_holds(cmp.op, ordering),
        None => false,
    }
}

fn op_holds(op: Operator, ordering: Ordering) -> bool {
    match op {
        Operator::Equal => ordering == Ordering::Equal,
        Operator::NotEqual => ordering != Ordering::Equal,
        Operator::GreaterThan => ordering == Ordering::Greater,
        Operator::LessThan => ordering == Ordering::Less,
        Operator::GreaterEqual => ordering != Ordering::Less,
        Operator::LessEqual => ordering != Ordering::Greater,
    }
}

fn lookup<'a>(table: &Table, row: &'a Row, col_name: &str) -> Option<&'a Value> {
    table.col_index(col_name).and_then(|i| row.get(i))
}
