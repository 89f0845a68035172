use crate::error::Result;
use crate::sql::parser::ast::Statement;
use crate::sql::render::render;
use crate::sql::store::Store;
use crate::sql::types::Row;

mod filter;
mod mutation;
mod query;
mod schema;

pub use schema::dump_table_sql;

const ABOUT_TEXT: &str = "
                                   minisql
                       An embeddable SQL engine in Rust
                                 MIT License
";

const HELP_TEXT: &str = "= Commands =\n\
HELP\n\
ABOUT\n\
CREATE TABLE [table] ([coldefs])\n\
INSERT INTO [table] ([cols]) VALUES ([values])\n\
UPDATE [table] SET [assignments] WHERE [conditions]\n\
SELECT [cols] FROM [table] WHERE [conditions]\n\
DELETE FROM [table] WHERE [conditions]\n\
DUMP TABLE [table]\n";

/// Dispatches a statement to its handler.
///
/// The statement enum is closed, so there is no unknown-command failure here;
/// truly unrecognized input already failed in the parser.
pub fn execute(store: &mut Store, stmt: Statement) -> Result<ResultSet> {
    match stmt {
        Statement::CreateTable { name, columns } => schema::create_table(store, name, columns),
        Statement::DumpTable { name, line } => schema::dump_table(store, &name, line),
        Statement::Insert {
            table_name,
            columns,
            values,
        } => mutation::insert(store, table_name, columns, values),
        // The parsed column list is discarded: SELECT projects every
        // declared column regardless of what the statement asked for
        Statement::Select {
            columns: _,
            tables,
            filter,
        } => query::select(store, &tables, &filter),
        Statement::Update {
            table_name,
            assignments,
            filter,
        } => mutation::update(store, table_name, assignments, filter),
        Statement::Delete { table_name, filter } => mutation::delete(store, table_name, filter),
        Statement::About => Ok(ResultSet::Text {
            text: ABOUT_TEXT.to_string(),
        }),
        Statement::Help => Ok(ResultSet::Text {
            text: HELP_TEXT.to_string(),
        }),
    }
}

/// Execution result set
#[derive(Debug, Clone, PartialEq)]
pub enum ResultSet {
    CreateTable { table_name: String },
    Insert { count: usize },
    Scan { columns: Vec<String>, rows: Vec<Row> },
    Update { count: usize },
    Delete { count: usize },
    Dump { sql: String },
    Text { text: String },
}

impl ResultSet {
    /// Renders the result for human consumption. Zero-row SELECT results
    /// become "Empty set" here; the table renderer itself never sees them.
    pub fn format(&self) -> String {
        match self {
            ResultSet::CreateTable { table_name } => {
                format!("Created table \"{}\"\n", table_name)
            }
            ResultSet::Insert { count } => {
                format!("{} {} inserted\n", count, row_word(*count))
            }
            ResultSet::Scan { columns, rows } => {
                if rows.is_empty() {
                    "Empty set\n".to_string()
                } else {
                    format!(
                        "{}{} {} in set\n",
                        render(columns, rows),
                        rows.len(),
                        row_word(rows.len())
                    )
                }
            }
            ResultSet::Update { count } => {
                format!("{} {} affected\n", count, row_word(*count))
            }
            ResultSet::Delete { count } => {
                format!("{} {} deleted\n", count, row_word(*count))
            }
            ResultSet::Dump { sql } => sql.clone(),
            ResultSet::Text { text } => text.clone(),
        }
    }
}

fn row_word(count: usize) -> &'static str {
    if count == 1 { "row" } else { "rows" }
}
