//! Inbox reader with iterator interface
//!
//! Provides a streaming iterator over the messages of an inbox CSV file with
//! columns `date,message`. Delegates format concerns to the inbox_format module.
//!
//! # Iterator Interface
//!
//! InboxReader implements the Iterator trait, yielding
//! `Result<InboxMessage, LedgerError>` for each row:
//!
//! ```no_run
//! use qif_ledger::io::inbox_reader::InboxReader;
//! use std::path::Path;
//!
//! let reader = InboxReader::new(Path::new("inbox.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(message) => println!("Message dated {}", message.date),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Individual row errors are yielded as Err variants in the iterator
//! - Line numbers are included in error messages for debugging; they are the
//!   physical line a row starts on, so quoted multi-line messages count fully

use crate::io::inbox_format::{convert_inbox_record, InboxMessage, InboxRecord};
use crate::types::LedgerError;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::path::Path;

/// Streaming inbox reader
///
/// Reads one row at a time; the whole inbox is never held in memory.
#[derive(Debug)]
pub struct InboxReader {
    reader: csv::Reader<File>,
    headers: StringRecord,
}

impl InboxReader {
    /// Open an inbox file
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::IoError` if the file could not be opened, or
    /// `LedgerError::InboxError` if its header row is unreadable.
    pub fn new(path: &Path) -> Result<Self, LedgerError> {
        let file = File::open(path).map_err(|e| LedgerError::IoError {
            message: format!("Failed to open inbox '{}': {}", path.display(), e),
        })?;

        let mut reader = ReaderBuilder::new()
            .trim(Trim::Headers)
            .buffer_capacity(8 * 1024)
            .from_reader(file);
        let headers = reader.headers()?.clone();

        Ok(Self { reader, headers })
    }
}

impl Iterator for InboxReader {
    type Item = Result<InboxMessage, LedgerError>;

    /// Get the next message from the inbox
    ///
    /// # Returns
    ///
    /// * `Some(Ok(InboxMessage))` - Successfully read row
    /// * `Some(Err(LedgerError))` - Row could not be read or converted
    /// * `None` - End of file reached
    fn next(&mut self) -> Option<Self::Item> {
        let mut row = StringRecord::new();
        match self.reader.read_record(&mut row) {
            Ok(true) => {}
            Ok(false) => return None,
            Err(e) => return Some(Err(e.into())),
        }

        let record: InboxRecord = match row.deserialize(Some(&self.headers)) {
            Ok(record) => record,
            Err(e) => return Some(Err(e.into())),
        };
        let line = row.position().map(|pos| pos.line());

        Some(
            convert_inbox_record(record)
                .map_err(|message| LedgerError::InboxError { line, message }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DateStamp;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper function to create a temporary inbox file for testing
    fn create_temp_inbox(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_inbox_reader_fails_on_missing_file() {
        let result = InboxReader::new(Path::new("nonexistent.csv"));
        assert!(result.unwrap_err().to_string().contains("Failed to open inbox"));
    }

    #[test]
    fn test_inbox_reader_reads_quoted_messages() {
        let content = "date,message\n\
                       2024-03-01,\"transaction d gas -c visa -a 42.50 -m \"\"fuel\"\"\"\n\
                       2024-03-02,todo water plants\n";
        let file = create_temp_inbox(content);

        let messages: Vec<_> = InboxReader::new(file.path())
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].date, DateStamp::new(2024, 3, 1));
        assert_eq!(
            messages[0].body,
            r#"transaction d gas -c visa -a 42.50 -m "fuel""#
        );
        assert_eq!(messages[1].body, "todo water plants");
    }

    #[test]
    fn test_inbox_reader_continues_after_bad_row() {
        let content = "date,message\n\
                       2024-03-01,note one\n\
                       someday,note two\n\
                       2024-03-03,note three\n";
        let file = create_temp_inbox(content);

        let results: Vec<_> = InboxReader::new(file.path()).unwrap().collect();

        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        let err = results[1].as_ref().unwrap_err();
        assert_eq!(err.to_string(), "Inbox parse error at line 3: Unrecognized date 'someday'");
        assert!(results[2].is_ok());
    }

    #[test]
    fn test_inbox_reader_reports_short_rows() {
        let content = "date,message\n2024-03-01\n";
        let file = create_temp_inbox(content);

        let results: Vec<_> = InboxReader::new(file.path()).unwrap().collect();

        assert_eq!(results.len(), 1);
        assert!(matches!(
            results[0],
            Err(LedgerError::InboxError { line: Some(2), .. })
        ));
    }

    #[test]
    fn test_inbox_reader_counts_lines_inside_quoted_messages() {
        let content = "date,message\n\
                       2024-03-01,\"note first line\nsecond line\nthird line\"\n\
                       someday,note bad date\n\
                       2024-03-03,\"note a\nb\"\n\
                       2024-03-04\n";
        let file = create_temp_inbox(content);

        let results: Vec<_> = InboxReader::new(file.path()).unwrap().collect();

        assert_eq!(results.len(), 4);
        assert_eq!(
            results[0].as_ref().unwrap().body,
            "note first line\nsecond line\nthird line"
        );
        assert!(matches!(
            results[1],
            Err(LedgerError::InboxError { line: Some(5), .. })
        ));
        assert!(results[2].is_ok());
        assert!(matches!(
            results[3],
            Err(LedgerError::InboxError { line: Some(8), .. })
        ));
    }

    #[test]
    fn test_inbox_reader_empty_inbox() {
        let file = create_temp_inbox("date,message\n");
        assert_eq!(InboxReader::new(file.path()).unwrap().count(), 0);
    }
}
