use crate::executor::Outcome;
use std::fmt::Display;

/// Prefix carried by every status line (and used as the interactive prompt).
pub const SHELL_PREFIX: &str = "flatbase~# ";

/// One instruction's externally visible result: a line to print, nothing,
/// or a request to stop reading instructions.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Output(String),
    Silent,
    Exit,
}

pub fn render_outcome(outcome: Outcome) -> Reply {
    match outcome {
        Outcome::DatabaseCreated(name) => status(format!("Database {name} created.")),
        Outcome::TableCreated(name) => status(format!("Table {name} created.")),
        Outcome::TableModified(name) => status(format!("Table {name} modified.")),
        Outcome::DatabaseDropped(name) => status(format!("Database {name} deleted.")),
        Outcome::TableDropped(name) => status(format!("Table {name} deleted.")),
        Outcome::Using(name) => status(format!("Using database {name}.")),
        // Query results are printed verbatim, without the shell prefix.
        Outcome::Record(record) => Reply::Output(record),
        Outcome::None => Reply::Silent,
        Outcome::Exit => Reply::Exit,
    }
}

/// Every error is a single report line; processing always continues.
pub fn render_error(error: &dyn Display) -> Reply {
    status(error.to_string())
}

fn status(text: String) -> Reply {
    Reply::Output(format!("{SHELL_PREFIX}{text}"))
}
