use crate::ast::{
    AlterTableStatement, CreateDatabaseStatement, CreateTableStatement, DropDatabaseStatement,
    DropTableStatement, SelectStatement, Statement, UseStatement,
};
use crate::error::ParseError;
use crate::tokenizer::{Token, TokenKind};

pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, current: 0 }
    }

    /// Parses one instruction. `Ok(None)` means there is nothing to execute:
    /// an empty line, or an ALTER whose operation keyword is not ADD (that
    /// path is skipped without a report).
    pub fn parse(&mut self) -> Result<Option<Statement>, ParseError> {
        let first = match self.advance() {
            Some(token) => token,
            None => return Ok(None),
        };

        match first.kind {
            TokenKind::Create => self.parse_create().map(Some),
            TokenKind::Drop => self.parse_drop().map(Some),
            TokenKind::Use => {
                let name = self.expect_name("database name")?;
                Ok(Some(Statement::Use(UseStatement { name })))
            }
            TokenKind::Select => self.parse_select().map(Some),
            TokenKind::Alter => self.parse_alter(),
            TokenKind::Exit => Ok(Some(Statement::Exit)),
            _ => Err(ParseError::Unrecognized(first.value)),
        }
    }

    fn parse_create(&mut self) -> Result<Statement, ParseError> {
        match self.advance() {
            Some(token) => match token.kind {
                TokenKind::Database => {
                    let name = self.expect_name("database name")?;
                    Ok(Statement::CreateDatabase(CreateDatabaseStatement { name }))
                }
                TokenKind::Table => {
                    let table = self.expect_name("table name")?;
                    let fields = match self.advance() {
                        Some(payload) if payload.kind == TokenKind::Payload => {
                            split_fields(&payload.value)
                        }
                        _ => Vec::new(),
                    };
                    Ok(Statement::CreateTable(CreateTableStatement { table, fields }))
                }
                _ => Err(ParseError::Unrecognized(token.value)),
            },
            None => Err(ParseError::UnexpectedEnd("DATABASE or TABLE")),
        }
    }

    fn parse_drop(&mut self) -> Result<Statement, ParseError> {
        match self.advance() {
            Some(token) => match token.kind {
                TokenKind::Database => {
                    let name = self.expect_name("database name")?;
                    Ok(Statement::DropDatabase(DropDatabaseStatement { name }))
                }
                TokenKind::Table => {
                    let table = self.expect_name("table name")?;
                    Ok(Statement::DropTable(DropTableStatement { table }))
                }
                _ => Err(ParseError::Unrecognized(token.value)),
            },
            None => Err(ParseError::UnexpectedEnd("DATABASE or TABLE")),
        }
    }

    fn parse_select(&mut self) -> Result<Statement, ParseError> {
        // Column list runs up to the FROM keyword; a missing FROM is a
        // syntax error rather than silently consuming whatever sits there.
        let mut columns = Vec::new();
        loop {
            match self.advance() {
                Some(token) if token.kind == TokenKind::From => break,
                Some(token) => {
                    for piece in token.value.split(',') {
                        let piece = piece.trim();
                        if !piece.is_empty() {
                            columns.push(piece.to_string());
                        }
                    }
                }
                None => return Err(ParseError::UnexpectedEnd("FROM")),
            }
        }
        let table = self.expect_name("table name")?;
        Ok(Statement::Select(SelectStatement { columns, table }))
    }

    fn parse_alter(&mut self) -> Result<Option<Statement>, ParseError> {
        match self.advance() {
            Some(token) if token.kind == TokenKind::Table => {}
            Some(token) => {
                return Err(ParseError::UnexpectedToken {
                    expected: "TABLE",
                    found: token.value,
                })
            }
            None => return Err(ParseError::UnexpectedEnd("TABLE")),
        }
        let table = self.expect_name("table name")?;

        match self.advance() {
            Some(op) if op.kind == TokenKind::Add => {
                let values = match self.advance() {
                    Some(payload) if payload.kind == TokenKind::Payload => {
                        Some(strip_parentheses(&payload.value))
                    }
                    _ => None,
                };
                Ok(Some(Statement::AlterTable(AlterTableStatement {
                    table,
                    values,
                })))
            }
            // Any operation other than ADD (or no operation at all) is
            // skipped without a report.
            _ => Ok(None),
        }
    }

    fn advance(&mut self) -> Option<Token> {
        if self.current < self.tokens.len() {
            let token = self.tokens[self.current].clone();
            self.current += 1;
            Some(token)
        } else {
            None
        }
    }

    fn expect_name(&mut self, what: &'static str) -> Result<String, ParseError> {
        match self.advance() {
            Some(token) => Ok(token.value),
            None => Err(ParseError::UnexpectedEnd(what)),
        }
    }
}

fn strip_parentheses(payload: &str) -> String {
    payload.replace(['(', ')'], "").trim().to_string()
}

fn split_fields(payload: &str) -> Vec<String> {
    strip_parentheses(payload)
        .split(',')
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .map(str::to_string)
        .collect()
}

/// Public function to expose parsing functionality
pub fn parse_instruction(tokens: Vec<Token>) -> Result<Option<Statement>, ParseError> {
    let mut parser = Parser::new(tokens);
    parser.parse()
}
