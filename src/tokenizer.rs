use lazy_static::lazy_static;
use regex::Regex;

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Create,
    Drop,
    Use,
    Select,
    Alter,
    Database,
    Table,
    From,
    Add,
    Exit,
    Payload,
    Identifier,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
}

lazy_static! {
    // A parenthesized payload runs to the terminating semicolon so it may
    // contain spaces and commas; everything else splits on whitespace and
    // semicolons.
    static ref TOKEN_RE: Regex = Regex::new(r"(?i)\([^;]*|\.exit\b|[^\s;(]+").unwrap();
}

pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();

    for cap in TOKEN_RE.find_iter(input) {
        let value = cap.as_str().to_string();
        let kind = if value.starts_with('(') {
            TokenKind::Payload
        } else {
            match value.to_lowercase().as_str() {
                "create" => TokenKind::Create,
                "drop" => TokenKind::Drop,
                "use" => TokenKind::Use,
                "select" => TokenKind::Select,
                "alter" => TokenKind::Alter,
                "database" => TokenKind::Database,
                "table" => TokenKind::Table,
                "from" => TokenKind::From,
                "add" => TokenKind::Add,
                ".exit" => TokenKind::Exit,
                _ => TokenKind::Identifier,
            }
        };

        tokens.push(Token { kind, value });
    }

    tokens
}
