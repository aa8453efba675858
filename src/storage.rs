use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

/// The literal sequence separating fields in a stored record.
pub const FIELD_DELIMITER: &str = " | ";

pub fn encode_record(fields: &[String]) -> String {
    fields.join(FIELD_DELIMITER)
}

/// Creates the table file and writes the record as its entire content.
pub fn write_record(path: &Path, record: &str) -> io::Result<()> {
    let mut file = OpenOptions::new()
        .create_new(true)
        .write(true)
        .open(path)?;
    file.write_all(record.as_bytes())?;
    Ok(())
}

/// Appends one more field to the stored record, preserving prior content.
pub fn append_field(path: &Path, value: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().append(true).open(path)?;
    write!(file, "{}{}", FIELD_DELIMITER, value)?;
    Ok(())
}

/// Tables hold exactly one line by construction, so the first line is the
/// full record set. An empty file yields `None`.
pub fn read_first_record(path: &Path) -> io::Result<Option<String>> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches('\n').to_string()))
}

/// Deletes every immediate child file of the database directory, then the
/// directory itself. Nested directories are not handled; one left behind
/// surfaces as the final remove_dir error.
pub fn remove_database(path: &Path) -> io::Result<()> {
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            fs::remove_file(entry.path())?;
        }
    }
    fs::remove_dir(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn encode_joins_with_the_delimiter() {
        let fields = vec!["id".to_string(), "name".to_string()];
        assert_eq!(encode_record(&fields), "id | name");
        assert_eq!(encode_record(&[]), "");
    }

    #[test]
    fn write_then_read_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("students");
        write_record(&path, "id | name").unwrap();
        assert_eq!(
            read_first_record(&path).unwrap(),
            Some("id | name".to_string())
        );
    }

    #[test]
    fn append_preserves_prior_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("students");
        write_record(&path, "a | b | c").unwrap();
        append_field(&path, "x,y").unwrap();
        assert_eq!(
            read_first_record(&path).unwrap(),
            Some("a | b | c | x,y".to_string())
        );
    }

    #[test]
    fn empty_table_reads_as_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty");
        write_record(&path, "").unwrap();
        assert_eq!(read_first_record(&path).unwrap(), None);
    }

    #[test]
    fn remove_database_deletes_child_files() {
        let dir = TempDir::new().unwrap();
        let database = dir.path().join("school");
        fs::create_dir(&database).unwrap();
        write_record(&database.join("students"), "id").unwrap();
        remove_database(&database).unwrap();
        assert!(!database.exists());
    }
}
