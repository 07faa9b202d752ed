//! I/O module
//!
//! Handles everything that touches text formats or the file system.
//!
//! # Components
//!
//! - `qif_format` - QIF rendering (pure)
//! - `ledger_store` - Ledger file lifecycle and appends
//! - `audit_log` - One JSON line per transaction attempt
//! - `inbox_format` - Inbox CSV record conversion (pure)
//! - `inbox_reader` - Streaming inbox reader with iterator interface
//! - `message` - Markup stripping and action routing
//! - `notes` - Free-text note store

pub mod audit_log;
pub mod inbox_format;
pub mod inbox_reader;
pub mod ledger_store;
pub mod message;
pub mod notes;
pub mod qif_format;

pub use audit_log::AuditLog;
pub use inbox_format::{InboxMessage, InboxRecord};
pub use inbox_reader::InboxReader;
pub use ledger_store::{Committed, LedgerStore};
pub use message::Action;
pub use notes::NoteStore;
