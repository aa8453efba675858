use crate::error::EngineError;
use std::path::{Path, PathBuf};

/// The one piece of mutable state in a run: which database directory is in
/// use. Threaded through the executor explicitly so tests can run several
/// independent sessions in one process.
#[derive(Debug)]
pub struct Session {
    root: PathBuf,
    current: Option<String>,
}

impl Session {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            current: None,
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn set_current(&mut self, name: &str) {
        self.current = Some(name.to_string());
    }

    pub fn clear_current(&mut self) {
        self.current = None;
    }

    pub fn database_path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Resolves `<root>/<current>/<table>` against whatever database is
    /// current right now. Fails fast when none is, instead of building a
    /// malformed path.
    pub fn table_path(&self, table: &str, action: &'static str) -> Result<PathBuf, EngineError> {
        match &self.current {
            Some(database) => Ok(self.root.join(database).join(table)),
            None => Err(EngineError::NoDatabase { action }),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_path_requires_a_current_database() {
        let mut session = Session::new("/data");
        assert!(session.table_path("students", "create table").is_err());

        session.set_current("school");
        let path = session.table_path("students", "create table").unwrap();
        assert_eq!(path, PathBuf::from("/data/school/students"));
    }

    #[test]
    fn clear_resets_current() {
        let mut session = Session::new(".");
        session.set_current("school");
        session.clear_current();
        assert!(session.current().is_none());
    }
}
