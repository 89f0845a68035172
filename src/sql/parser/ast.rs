//! Abstract syntax tree for parsed SQL statements.
//!
//! The WHERE representation is a canonical OR-of-AND tree: the parser always
//! emits one `AndGroup` per OR branch, each holding at least one comparison,
//! so the matcher never has to special-case tree depth.

use crate::sql::types::{DataType, Value};

/// One parsed SQL statement
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// CREATE TABLE statement
    CreateTable {
        name: String,
        columns: Vec<ColumnDef>,
    },
    /// DUMP TABLE statement; `line` is where the statement started, for
    /// error attribution during execution
    DumpTable {
        name: String,
        line: usize,
    },
    /// INSERT statement. The column and value lists are parsed independently;
    /// equal length is not enforced here - the engine pairs them positionally.
    Insert {
        table_name: String,
        columns: Vec<String>,
        values: Vec<Value>,
    },
    /// SELECT statement. The grammar accepts multiple FROM tables and an
    /// explicit column list; the engine queries only the first table and
    /// projects every declared column.
    Select {
        columns: Vec<String>,
        tables: Vec<String>,
        filter: Where,
    },
    /// UPDATE statement; assignments apply in statement order
    Update {
        table_name: String,
        assignments: Vec<(String, Value)>,
        filter: Where,
    },
    /// DELETE statement
    Delete {
        table_name: String,
        filter: Where,
    },
    About,
    Help,
}

/// Column definition in a CREATE TABLE statement
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub name: String,
    pub datatype: DataType,
}

/// WHERE clause: a disjunction of AND-groups.
///
/// Zero groups means the statement had no WHERE clause and matches every row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Where {
    pub groups: Vec<AndGroup>,
}

impl Where {
    /// A universal match (no constraints)
    pub fn all() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// A conjunction of comparisons; matches iff every comparison matches
#[derive(Debug, Clone, PartialEq)]
pub struct AndGroup {
    pub comparisons: Vec<Comparison>,
}

/// A single comparison leaf: `column <op> right`
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub column: String,
    pub op: Operator,
    pub right: Operand,
}

/// The right-hand side of a comparison: a literal, or another column
/// resolved against the same row
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Column(String),
    Literal(Value),
}

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operator {
    Equal,
    GreaterThan,
    LessThan,
    GreaterEqual,
    LessEqual,
    NotEqual,
}

impl Operator {
    /// Maps a lexed operator run to an operator, rejecting runs such as `=>`
    pub fn from_str(op: &str) -> Option<Operator> {
        Some(match op {
            "=" => Operator::Equal,
            ">" => Operator::GreaterThan,
            "<" => Operator::LessThan,
            ">=" => Operator::GreaterEqual,
            "<=" => Operator::LessEqual,
            "<>" => Operator::NotEqual,
            _ => return None,
        })
    }
}
