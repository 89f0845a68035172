use crate::error::{Error, Result};
use crate::sql::parser::ast::{AndGroup, ColumnDef, Comparison, Operand, Operator, Statement, Where};
use crate::sql::parser::lexer::{Lexer, Token};
use crate::sql::types::{DataType, Value};

pub mod ast;
mod lexer;

/// SQL Parser - Converts tokens into Abstract Syntax Tree (AST)
///
/// The parser keeps a single token of lookahead. Command and keyword
/// identifiers are matched case-insensitively; the lexer does not reserve
/// keywords.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    lookahead: Option<Token>,
}

impl<'a> Parser<'a> {
    /// Creates a new parser for the given SQL input
    pub fn new(input: &'a str) -> Self {
        Parser {
            lexer: Lexer::new(input),
            lookahead: None,
        }
    }

    /// Parses the next statement from the buffer, or None when only
    /// end-of-input remains. Repeated calls drain a multi-statement buffer
    /// one statement at a time; each statement may end with a `;`.
    pub fn parse(&mut self) -> Result<Option<Statement>> {
        if *self.peek()? == Token::Eof {
            return Ok(None);
        }
        let command = self.next_ident()?;
        let stmt = match command.to_uppercase().as_str() {
            "CREATE" => self.parse_create()?,
            "DUMP" => {
                let line = self.lexer.token_line();
                self.parse_dump(line)?
            }
            "INSERT" => self.parse_insert()?,
            "SELECT" => self.parse_select()?,
            "UPDATE" => self.parse_update()?,
            "DELETE" => self.parse_delete()?,
            "ABOUT" => Statement::About,
            "HELP" => Statement::Help,
            other => return Err(self.err(format!("Unknown SQL command '{}'", other))),
        };
        self.next_if(&Token::Semicolon)?;
        Ok(Some(stmt))
    }

    /// Parses `CREATE TABLE name ( col type [, col type]* )`
    fn parse_create(&mut self) -> Result<Statement> {
        let entity = self.next_ident()?;
        if !entity.eq_ignore_ascii_case("TABLE") {
            return Err(self.err(format!("Unknown entity type for CREATE: {}", entity)));
        }
        let name = self.next_ident()?;
        self.expect(Token::OpenParen)?;

        let mut columns = Vec::new();
        loop {
            columns.push(self.parse_column_def()?);
            match self.next()? {
                Token::CloseParen => break,
                Token::Comma => {}
                token => return Err(self.err(format!("Expected delimiter, got {}", token))),
            }
        }
        Ok(Statement::CreateTable { name, columns })
    }

    /// Parses one `col type` pair in a CREATE TABLE column list
    fn parse_column_def(&mut self) -> Result<ColumnDef> {
        let name = self.next_ident()?;
        let type_name = self.next_ident()?;
        let datatype = DataType::from_str(&type_name)
            .ok_or_else(|| self.err(format!("Unknown column type '{}'", type_name)))?;
        Ok(ColumnDef { name, datatype })
    }

    /// Parses `DUMP TABLE name`; `line` attributes later execution errors
    fn parse_dump(&mut self, line: usize) -> Result<Statement> {
        let entity = self.next_ident()?;
        if !entity.eq_ignore_ascii_case("TABLE") {
            return Err(self.err(format!("Unknown entity type for DUMP: {}", entity)));
        }
        let name = self.next_ident()?;
        Ok(Statement::DumpTable { name, line })
    }

    /// Parses `INSERT INTO name ( cols ) VALUES ( literals )`.
    ///
    /// The column and value lists are parsed independently and may differ in
    /// length; the engine pairs them positionally.
    fn parse_insert(&mut self) -> Result<Statement> {
        self.expect_keyword("INTO")?;
        let table_name = self.next_ident()?;

        self.expect(Token::OpenParen)?;
        let mut columns = Vec::new();
        loop {
            columns.push(self.next_ident()?);
            match self.next()? {
                Token::CloseParen => break,
                Token::Comma => {}
                token => return Err(self.err(format!("Expected delimiter, got {}", token))),
            }
        }

        self.expect_keyword("VALUES")?;
        self.expect(Token::OpenParen)?;
        let mut values = Vec::new();
        loop {
            values.push(self.next_value()?);
            match self.next()? {
                Token::CloseParen => break,
                Token::Comma => {}
                token => return Err(self.err(format!("Expected delimiter, got {}", token))),
            }
        }

        Ok(Statement::Insert {
            table_name,
            columns,
            values,
        })
    }

    /// Parses `SELECT cols FROM tables [WHERE constraints]`
    fn parse_select(&mut self) -> Result<Statement> {
        let mut columns = Vec::new();
        loop {
            match self.next()? {
                Token::Ident(s) => columns.push(s),
                Token::Integer(n) => columns.push(n.to_string()),
                Token::Float(n) => columns.push(n.to_string()),
                Token::String(s) => columns.push(s),
                token => {
                    return Err(self.err(format!(
                        "Expected identifier or literal in SELECT column list, got {}",
                        token
                    )));
                }
            }
            if !self.next_if(&Token::Comma)? {
                break;
            }
        }

        self.expect_keyword("FROM")?;
        let mut tables = Vec::new();
        loop {
            tables.push(self.next_ident()?);
            if !self.next_if(&Token::Comma)? {
                break;
            }
        }

        let filter = self.parse_where()?;
        match self.peek()? {
            Token::Eof | Token::Semicolon => {}
            token => {
                let message = format!("Unexpected end to SELECT: {}", token);
                return Err(self.err(message));
            }
        }

        Ok(Statement::Select {
            columns,
            tables,
            filter,
        })
    }

    /// Parses `UPDATE name SET col = value [, col = value]* [WHERE ...]`
    fn parse_update(&mut self) -> Result<Statement> {
        let table_name = self.next_ident()?;
        self.expect_keyword("SET")?;

        let mut assignments = Vec::new();
        loop {
            let column = self.next_ident()?;
            match self.next()? {
                Token::Op(ref op) if op == "=" => {}
                token => return Err(self.err(format!("Expected '=', got {}", token))),
            }
            assignments.push((column, self.next_value()?));
            if !self.next_if(&Token::Comma)? {
                break;
            }
        }

        Ok(Statement::Update {
            table_name,
            assignments,
            filter: self.parse_where()?,
        })
    }

    /// Parses `DELETE FROM name [WHERE ...]`
    fn parse_delete(&mut self) -> Result<Statement> {
        self.expect_keyword("FROM")?;
        let table_name = self.next_ident()?;
        Ok(Statement::Delete {
            table_name,
            filter: self.parse_where()?,
        })
    }

    /// Parses an optional WHERE clause into the canonical OR-of-AND tree.
    /// Absent WHERE yields the empty (universal) tree.
    fn parse_where(&mut self) -> Result<Where> {
        if !self.next_if_keyword("WHERE")? {
            return Ok(Where::all());
        }
        self.parse_or()
    }

    /// `OR := AND (OR_kw AND)*` - always OR-rooted, even for one group
    fn parse_or(&mut self) -> Result<Where> {
        let mut groups = vec![self.parse_and()?];
        while self.next_if_keyword("OR")? {
            groups.push(self.parse_and()?);
        }
        Ok(Where { groups })
    }

    /// `AND := Comparison (AND_kw Comparison)*`
    fn parse_and(&mut self) -> Result<AndGroup> {
        let mut comparisons = vec![self.parse_comparison()?];
        while self.next_if_keyword("AND")? {
            comparisons.push(self.parse_comparison()?);
        }
        Ok(AndGroup { comparisons })
    }

    /// `Comparison := identifier operator (identifier|literal)`
    fn parse_comparison(&mut self) -> Result<Comparison> {
        let column = self.next_ident()?;
        let op = match self.next()? {
            Token::Op(op) => Operator::from_str(&op)
                .ok_or_else(|| self.err(format!("Unknown operator '{}'", op)))?,
            token => return Err(self.err(format!("Expected operator, got {}", token))),
        };
        let right = match self.next()? {
            Token::Ident(s) => Operand::Column(s),
            Token::Integer(n) => Operand::Literal(Value::Integer(n)),
            Token::Float(n) => Operand::Literal(Value::Float(n)),
            Token::String(s) => Operand::Literal(Value::String(s)),
            token => {
                return Err(self.err(format!(
                    "Expected identifier or literal in comparison, got {}",
                    token
                )));
            }
        };
        Ok(Comparison { column, op, right })
    }

    /// Peeks at the next token without consuming it
    fn peek(&mut self) -> Result<&Token> {
        let token = match self.lookahead.take() {
            Some(token) => token,
            None => self.lexer.next_token()?,
        };
        Ok(self.lookahead.insert(token))
    }

    /// Consumes and returns the next token
    fn next(&mut self) -> Result<Token> {
        match self.lookahead.take() {
            Some(token) => Ok(token),
            None => self.lexer.next_token(),
        }
    }

    /// Expects and consumes an identifier
    fn next_ident(&mut self) -> Result<String> {
        match self.next()? {
            Token::Ident(ident) => Ok(ident),
            token => Err(self.err(format!("Expected identifier, got {}", token))),
        }
    }

    /// Expects and consumes a literal value; NULL is accepted so DUMP output
    /// can be parsed back
    fn next_value(&mut self) -> Result<Value> {
        match self.next()? {
            Token::Integer(n) => Ok(Value::Integer(n)),
            Token::Float(n) => Ok(Value::Float(n)),
            Token::String(s) => Ok(Value::String(s)),
            Token::Ident(ref s) if s.eq_ignore_ascii_case("NULL") => Ok(Value::Null),
            token => Err(self.err(format!("Expected literal value, got {}", token))),
        }
    }

    /// Expects a specific token, returns error if different
    fn expect(&mut self, expected: Token) -> Result<()> {
        let token = self.next()?;
        if token != expected {
            return Err(self.err(format!("Expected {}, got {}", expected, token)));
        }
        Ok(())
    }

    /// Expects an identifier matching the given keyword, case-insensitively
    fn expect_keyword(&mut self, keyword: &str) -> Result<()> {
        match self.next()? {
            Token::Ident(ref s) if s.eq_ignore_ascii_case(keyword) => Ok(()),
            token => Err(self.err(format!("Expected keyword '{}', got {}", keyword, token))),
        }
    }

    /// Consumes the next token if it matches the given token
    fn next_if(&mut self, token: &Token) -> Result<bool> {
        let found = self.peek()? == token;
        if found {
            self.next()?;
        }
        Ok(found)
    }

    /// Consumes the next token if it is the given keyword, case-insensitively
    fn next_if_keyword(&mut self, keyword: &str) -> Result<bool> {
        let found = matches!(self.peek()?, Token::Ident(s) if s.eq_ignore_ascii_case(keyword));
        if found {
            self.next()?;
        }
        Ok(found)
    }

    /// Builds a ParseError at the position of the most recently scanned token
    fn err(&self, message: String) -> Error {
        self.lexer.error_here(message).into()
    }
}

#[cfg(test)]
mod tests {
    use super::Parser;
    use crate::error::{Error, Result};
    use crate::sql::parser::ast::{
        AndGroup, ColumnDef, Comparison, Operand, Operator, Statement, Where,
    };
    use crate::sql::types::{DataType, Value};

    #[test]
    fn test_parser_create_table() -> Result<()> {
        let stmt = Parser::new("CREATE TABLE t (id int, score float, name varchar);").parse()?;
        assert_eq!(
            stmt,
            Some(Statement::CreateTable {
                name: "t".to_string(),
                columns: vec![
                    ColumnDef {
                        name: "id".to_string(),
                        datatype: DataType::Int,
                    },
                    ColumnDef {
                        name: "score".to_string(),
                        datatype: DataType::Float,
                    },
                    ColumnDef {
                        name: "name".to_string(),
                        datatype: DataType::Varchar,
                    },
                ],
            })
        );

        // Keywords are case-insensitive and the semicolon is optional
        let stmt = Parser::new("create table t (id INT)").parse()?;
        assert!(matches!(stmt, Some(Statement::CreateTable { .. })));
        Ok(())
    }

    #[test]
    fn test_parser_create_table_unterminated() {
        // Missing close paren, then EOF: the error points at end of input
        let err = Parser::new("CREATE TABLE t (id int").parse().unwrap_err();
        match err {
            Error::Parse(e) => {
                assert_eq!(e.message, "Expected delimiter, got end of input");
                assert_eq!(e.line, 1);
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_parser_unknown_command() {
        let err = Parser::new("EXPLAIN SELECT * FROM t;").parse().unwrap_err();
        match err {
            Error::Parse(e) => assert_eq!(e.message, "Unknown SQL command 'EXPLAIN'"),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_parser_insert() -> Result<()> {
        let stmt = Parser::new("INSERT INTO t (id, name) VALUES (1, 'Al''s');").parse()?;
        assert_eq!(
            stmt,
            Some(Statement::Insert {
                table_name: "t".to_string(),
                columns: vec!["id".to_string(), "name".to_string()],
                values: vec![Value::Integer(1), Value::String("Al's".to_string())],
            })
        );

        // NULL is a valid value, and list lengths are not checked here
        let stmt = Parser::new("insert into t (a, b, c) values (NULL, 2.5)").parse()?;
        assert_eq!(
            stmt,
            Some(Statement::Insert {
                table_name: "t".to_string(),
                columns: vec!["a".to_string(), "b".to_string(), "c".to_string()],
                values: vec![Value::Null, Value::Float(2.5)],
            })
        );
        Ok(())
    }

    #[test]
    fn test_parser_select_canonical_where_shape() -> Result<()> {
        // A single bare comparison still yields the OR-of-AND tree
        let stmt = Parser::new("SELECT * FROM t WHERE id = 1;").parse()?;
        let Some(Statement::Select { columns, tables, filter }) = stmt else {
            panic!("expected select");
        };
        assert_eq!(columns, vec!["*".to_string()]);
        assert_eq!(tables, vec!["t".to_string()]);
        assert_eq!(
            filter,
            Where {
                groups: vec![AndGroup {
                    comparisons: vec![Comparison {
                        column: "id".to_string(),
                        op: Operator::Equal,
                        right: Operand::Literal(Value::Integer(1)),
                    }],
                }],
            }
        );
        Ok(())
    }

    #[test]
    fn test_parser_where_and_or_nesting() -> Result<()> {
        let stmt =
            Parser::new("SELECT * FROM t WHERE a > 1 AND b <= 2 OR c <> 'x' OR d = e").parse()?;
        let Some(Statement::Select { filter, .. }) = stmt else {
            panic!("expected select");
        };
        assert_eq!(filter.groups.len(), 3);
        assert_eq!(filter.groups[0].comparisons.len(), 2);
        assert_eq!(filter.groups[0].comparisons[0].op, Operator::GreaterThan);
        assert_eq!(filter.groups[0].comparisons[1].op, Operator::LessEqual);
        assert_eq!(filter.groups[1].comparisons.len(), 1);
        assert_eq!(filter.groups[1].comparisons[0].op, Operator::NotEqual);
        // Right side may reference another column
        assert_eq!(
            filter.groups[2].comparisons[0].right,
            Operand::Column("e".to_string())
        );
        Ok(())
    }

    #[test]
    fn test_parser_invalid_operator() {
        let err = Parser::new("SELECT * FROM t WHERE a => 1").parse().unwrap_err();
        match err {
            Error::Parse(e) => assert_eq!(e.message, "Unknown operator '=>'"),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_parser_update() -> Result<()> {
        let stmt =
            Parser::new("UPDATE t SET a = 1, b = 'x' WHERE id = 2 AND a < b;").parse()?;
        assert_eq!(
            stmt,
            Some(Statement::Update {
                table_name: "t".to_string(),
                assignments: vec![
                    ("a".to_string(), Value::Integer(1)),
                    ("b".to_string(), Value::String("x".to_string())),
                ],
                filter: Where {
                    groups: vec![AndGroup {
                        comparisons: vec![
                            Comparison {
                                column: "id".to_string(),
                                op: Operator::Equal,
                                right: Operand::Literal(Value::Integer(2)),
                            },
                            Comparison {
                                column: "a".to_string(),
                                op: Operator::LessThan,
                                right: Operand::Column("b".to_string()),
                            },
                        ],
                    }],
                },
            })
        );
        Ok(())
    }

    #[test]
    fn test_parser_delete() -> Result<()> {
        let stmt = Parser::new("DELETE FROM t").parse()?;
        assert_eq!(
            stmt,
            Some(Statement::Delete {
                table_name: "t".to_string(),
                filter: Where::all(),
            })
        );
        Ok(())
    }

    #[test]
    fn test_parser_dump_records_line() -> Result<()> {
        let mut parser = Parser::new("SELECT * FROM t;\nDUMP TABLE t;");
        parser.parse()?;
        let dump = parser.parse()?;
        assert_eq!(
            dump,
            Some(Statement::DumpTable {
                name: "t".to_string(),
                line: 2,
            })
        );
        Ok(())
    }

    #[test]
    fn test_parser_drains_statements() -> Result<()> {
        let mut parser = Parser::new("ABOUT; HELP");
        assert_eq!(parser.parse()?, Some(Statement::About));
        assert_eq!(parser.parse()?, Some(Statement::Help));
        assert_eq!(parser.parse()?, None);
        assert_eq!(parser.parse()?, None);
        Ok(())
    }

    #[test]
    fn test_parser_select_multi_table() -> Result<()> {
        let stmt = Parser::new("SELECT id FROM t1, t2;").parse()?;
        let Some(Statement::Select { tables, .. }) = stmt else {
            panic!("expected select");
        };
        assert_eq!(tables, vec!["t1".to_string(), "t2".to_string()]);
        Ok(())
    }

    #[test]
    fn test_parser_select_trailing_garbage() {
        let err = Parser::new("SELECT a FROM t WHERE a = 1 !").parse().unwrap_err();
        match err {
            Error::Parse(e) => assert_eq!(e.message, "Unexpected end to SELECT: !"),
            other => panic!("expected parse error, got {:?}", other),
        }
    }
}
