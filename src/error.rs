use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("Instruction {0} not recognized. Skipping instruction.")]
    Unrecognized(String),
    #[error("Expected {expected} but found {found}. Skipping instruction.")]
    UnexpectedToken {
        expected: &'static str,
        found: String,
    },
    #[error("Expected {0} but the instruction ended. Skipping instruction.")]
    UnexpectedEnd(&'static str),
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("!Failed to create database {0} because it already exists.")]
    DatabaseExists(String),
    #[error("!Failed to create table {0} because it already exists.")]
    TableExists(String),
    #[error("!Failed to drop database {0} because it does not exist.")]
    DatabaseMissing(String),
    #[error("!Failed to drop table {0} because it does not exist.")]
    TableMissing(String),
    #[error("!Failed to query table {0} because it does not exist.")]
    QueryFailed(String),
    #[error("Database {0} does not exist.")]
    UnknownDatabase(String),
    #[error("!Failed to {action} because database not specified.")]
    NoDatabase { action: &'static str },
    #[error("!Filesystem error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl EngineError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        EngineError::Io {
            path: path.into(),
            source,
        }
    }
}
