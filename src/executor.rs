use crate::ast::{
    AlterTableStatement, CreateDatabaseStatement, CreateTableStatement, DropDatabaseStatement,
    DropTableStatement, SelectStatement, Statement, UseStatement,
};
use crate::error::EngineError;
use crate::session::Session;
use crate::storage;
use std::fs;
use std::path::PathBuf;

/// What a successfully executed instruction produced. Rendering to report
/// lines is the reporter's job.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    DatabaseCreated(String),
    TableCreated(String),
    TableModified(String),
    DatabaseDropped(String),
    TableDropped(String),
    Using(String),
    Record(String),
    None,
    Exit,
}

#[derive(Debug)]
pub struct Engine {
    session: Session,
}

impl Engine {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            session: Session::new(root),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn execute(&mut self, statement: Statement) -> Result<Outcome, EngineError> {
        match statement {
            Statement::CreateDatabase(s) => self.create_database(s),
            Statement::CreateTable(s) => self.create_table(s),
            Statement::DropDatabase(s) => self.drop_database(s),
            Statement::DropTable(s) => self.drop_table(s),
            Statement::Use(s) => self.use_database(s),
            Statement::Select(s) => self.select(s),
            Statement::AlterTable(s) => self.alter_table(s),
            Statement::Exit => Ok(Outcome::Exit),
        }
    }

    fn create_database(&mut self, stmt: CreateDatabaseStatement) -> Result<Outcome, EngineError> {
        let path = self.session.database_path(&stmt.name);
        if path.exists() {
            return Err(EngineError::DatabaseExists(stmt.name));
        }
        fs::create_dir(&path).map_err(|e| EngineError::io(&path, e))?;
        Ok(Outcome::DatabaseCreated(stmt.name))
    }

    fn create_table(&mut self, stmt: CreateTableStatement) -> Result<Outcome, EngineError> {
        let path = self.session.table_path(&stmt.table, "create table")?;
        if path.exists() {
            return Err(EngineError::TableExists(stmt.table));
        }
        let record = storage::encode_record(&stmt.fields);
        storage::write_record(&path, &record).map_err(|e| EngineError::io(&path, e))?;
        Ok(Outcome::TableCreated(stmt.table))
    }

    fn alter_table(&mut self, stmt: AlterTableStatement) -> Result<Outcome, EngineError> {
        let path = self.session.table_path(&stmt.table, "modify table")?;
        // A missing table or a missing ADD payload is skipped without a
        // report; this is the one deliberate no-report path.
        if !path.exists() {
            return Ok(Outcome::None);
        }
        let values = match stmt.values {
            Some(values) => values,
            None => return Ok(Outcome::None),
        };
        storage::append_field(&path, &values).map_err(|e| EngineError::io(&path, e))?;
        Ok(Outcome::TableModified(stmt.table))
    }

    fn select(&mut self, stmt: SelectStatement) -> Result<Outcome, EngineError> {
        let path = self.session.table_path(&stmt.table, "query table")?;
        if !path.exists() {
            return Err(EngineError::QueryFailed(stmt.table));
        }
        match storage::read_first_record(&path).map_err(|e| EngineError::io(&path, e))? {
            Some(record) => Ok(Outcome::Record(record)),
            None => Ok(Outcome::None),
        }
    }

    fn drop_database(&mut self, stmt: DropDatabaseStatement) -> Result<Outcome, EngineError> {
        let path = self.session.database_path(&stmt.name);
        if !path.exists() {
            return Err(EngineError::DatabaseMissing(stmt.name));
        }
        storage::remove_database(&path).map_err(|e| EngineError::io(&path, e))?;
        Ok(Outcome::DatabaseDropped(stmt.name))
    }

    fn drop_table(&mut self, stmt: DropTableStatement) -> Result<Outcome, EngineError> {
        let path = self.session.table_path(&stmt.table, "drop table")?;
        if !path.exists() {
            return Err(EngineError::TableMissing(stmt.table));
        }
        fs::remove_file(&path).map_err(|e| EngineError::io(&path, e))?;
        Ok(Outcome::TableDropped(stmt.table))
    }

    fn use_database(&mut self, stmt: UseStatement) -> Result<Outcome, EngineError> {
        let path = self.session.database_path(&stmt.name);
        if path.is_dir() {
            self.session.set_current(&stmt.name);
            Ok(Outcome::Using(stmt.name))
        } else {
            // An unknown database resets the context rather than leaving the
            // prior one in effect.
            self.session.clear_current();
            Err(EngineError::UnknownDatabase(stmt.name))
        }
    }
}
