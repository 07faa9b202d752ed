//! Batch pipeline
//!
//! Orchestrates one run over an inbox: each message is read, routed and fully
//! handled before the next is considered. Per-message failures are logged and
//! counted; only a missing inbox or an unwritable summary stops the run.

use crate::config::Settings;
use crate::core::{ChartOfAccounts, PayloadParser, TagParser, TransactionProcessor};
use crate::io::{Action, InboxMessage, InboxReader, NoteStore};
use crate::types::LedgerError;
use std::fmt;
use std::io::Write;
use std::path::Path;

/// Counters for one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Rows read from the inbox, readable or not
    pub messages: usize,
    /// Transactions appended to a ledger
    pub recorded: usize,
    /// Transactions that failed parsing, validation or writing
    pub rejected: usize,
    /// Notes appended
    pub notes: usize,
    /// Messages acknowledged without action, or notes that failed to write
    pub skipped: usize,
    /// Inbox rows that could not be read
    pub unreadable: usize,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "messages: {}", self.messages)?;
        writeln!(f, "recorded: {}", self.recorded)?;
        writeln!(f, "rejected: {}", self.rejected)?;
        writeln!(f, "notes: {}", self.notes)?;
        writeln!(f, "skipped: {}", self.skipped)?;
        writeln!(f, "unreadable: {}", self.unreadable)
    }
}

pub struct Pipeline<P = TagParser> {
    processor: TransactionProcessor<P>,
    notes: NoteStore,
}

impl Pipeline<TagParser> {
    /// Build the standard pipeline from startup settings
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Config` if the configured chart of accounts is
    /// invalid.
    pub fn from_settings(settings: &Settings) -> Result<Self, LedgerError> {
        let chart = ChartOfAccounts::from_config(&settings.chart)?;
        let processor = TransactionProcessor::new(chart, &settings.output_dir);
        let notes = NoteStore::new(&settings.output_dir);
        Ok(Pipeline::new(processor, notes))
    }
}

impl<P: PayloadParser> Pipeline<P> {
    pub fn new(processor: TransactionProcessor<P>, notes: NoteStore) -> Self {
        Pipeline { processor, notes }
    }

    pub fn processor(&self) -> &TransactionProcessor<P> {
        &self.processor
    }

    /// Process an inbox file and write the run summary to `output`
    ///
    /// # Errors
    ///
    /// Returns an error string if the inbox cannot be opened or the summary
    /// cannot be written. Individual message failures never end the run.
    pub fn run(&self, input_path: &Path, output: &mut dyn Write) -> Result<RunSummary, String> {
        let reader = InboxReader::new(input_path).map_err(|e| e.to_string())?;
        let mut summary = RunSummary::default();

        for result in reader {
            summary.messages += 1;
            match result {
                Ok(message) => self.handle(&message, &mut summary),
                Err(e) => {
                    log::error!("Skipping inbox row: {}", e);
                    summary.unreadable += 1;
                }
            }
        }

        write!(output, "{}", summary).map_err(|e| format!("Failed to write summary: {}", e))?;
        output
            .flush()
            .map_err(|e| format!("Failed to flush output: {}", e))?;

        Ok(summary)
    }

    /// Route and handle a single message
    pub fn handle(&self, message: &InboxMessage, summary: &mut RunSummary) {
        log::debug!("MESSAGE {} {}", message.date, message.body.trim());

        match Action::from_message(&message.body) {
            Action::Transaction(payload) => {
                // outcome is already logged and audited by the processor
                match self.processor.process(message.date, &payload) {
                    Ok(_) => summary.recorded += 1,
                    Err(_) => summary.rejected += 1,
                }
            }
            Action::Todo(task) => {
                log::info!("TODO not supported, skipping: {}", task);
                summary.skipped += 1;
            }
            Action::Note(note) => match self.notes.append(&note) {
                Ok(()) => summary.notes += 1,
                Err(e) => {
                    log::warn!("Could not save note: {}", e);
                    summary.skipped += 1;
                }
            },
        }
    }
}
