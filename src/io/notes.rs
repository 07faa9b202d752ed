//! Free-text note store
//!
//! Messages that are neither transactions nor tasks are appended, one per
//! line, to `<output>/miscellaneous.txt`. There is no validation.

use crate::types::LedgerError;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct NoteStore {
    path: PathBuf,
}

impl NoteStore {
    pub fn new(output_dir: &Path) -> Self {
        NoteStore {
            path: output_dir.join("miscellaneous.txt"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a note as its own line
    pub fn append(&self, note: &str) -> Result<(), LedgerError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|e| LedgerError::io_at(dir, e))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| LedgerError::io_at(&self.path, e))?;
        file.write_all(format!("{}\n", note).as_bytes())
            .map_err(|e| LedgerError::io_at(&self.path, e))?;

        log::info!("MISC\t{}", note);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_creates_file_and_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let notes = NoteStore::new(&dir.path().join("out"));

        notes.append("call the plumber").unwrap();
        notes.append("library books due").unwrap();

        let content = fs::read_to_string(notes.path()).unwrap();
        assert_eq!(content, "call the plumber\nlibrary books due\n");
    }
}
